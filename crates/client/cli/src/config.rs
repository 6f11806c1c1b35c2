//! CLI configuration: environment, optional TOML file and flags.
use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use vimrogue_core::{Ability, GameConfig};

/// Default tracing filter when neither `VIMROGUE_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Configuration assembled before the game starts.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// TOML file merged into the game configuration.
    pub config_path: Option<PathBuf>,
    /// Level file; the built-in level is used when unset.
    pub level_path: Option<PathBuf>,
    pub log_filter: Option<String>,
    /// Abilities the player starts with.
    pub abilities: Vec<Ability>,
    pub game: GameConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            level_path: None,
            log_filter: None,
            abilities: vec![Ability::AllCommands],
            game: GameConfig::default(),
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `VIMROGUE_CONFIG` - Path to a TOML configuration file
    /// - `VIMROGUE_LEVEL` - Path to a level file
    /// - `VIMROGUE_LOG` - Tracing filter (default: `RUST_LOG`, then `info`)
    /// - `VIMROGUE_KEYSTROKE_TURNS` - Every pending keystroke costs a turn
    /// - `VIMROGUE_ABILITIES` - Comma-separated starting abilities (default: `**`)
    pub fn from_env() -> Self {
        let mut config = Self {
            config_path: env::var("VIMROGUE_CONFIG").ok().map(PathBuf::from),
            level_path: env::var("VIMROGUE_LEVEL").ok().map(PathBuf::from),
            log_filter: env::var("VIMROGUE_LOG").ok(),
            ..Self::default()
        };

        if let Ok(abilities) = env::var("VIMROGUE_ABILITIES") {
            config.abilities = parse_abilities(abilities.split(','));
        }

        if let Some(enabled) = read_env::<bool>("VIMROGUE_KEYSTROKE_TURNS") {
            config.game.keystroke_costs_turn = enabled;
        }

        config
    }

    /// Merges the TOML file, if any. Values already set by the environment
    /// are overridden by the file's `[game]` table.
    pub fn load_file(mut self) -> Result<Self, ConfigError> {
        let Some(path) = self.config_path.clone() else {
            return Ok(self);
        };
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let file = FileConfig::parse(&text, &path)?;
        if let Some(game) = file.game {
            self.game = game;
        }
        if let Some(abilities) = file.abilities {
            self.abilities = parse_abilities(abilities.iter().map(String::as_str));
        }
        if self.level_path.is_none() {
            self.level_path = file.level.map(|level| resolve_relative(&path, level));
        }
        Ok(self)
    }

    pub fn log_filter(&self) -> String {
        self.log_filter
            .clone()
            .or_else(|| env::var("RUST_LOG").ok())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned())
    }
}

/// On-disk layout of the configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    level: Option<PathBuf>,
    abilities: Option<Vec<String>>,
    game: Option<GameConfig>,
}

impl FileConfig {
    fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Ability names as accepted by [`Ability`]'s `FromStr`; blanks are skipped.
pub fn parse_abilities<'a>(names: impl Iterator<Item = &'a str>) -> Vec<Ability> {
    names
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            let Ok(ability) = name.parse::<Ability>();
            ability
        })
        .collect()
}

/// Level paths in a config file are relative to the file itself.
fn resolve_relative(config_path: &Path, level: PathBuf) -> PathBuf {
    if level.is_absolute() {
        return level;
    }
    match config_path.parent() {
        Some(dir) => dir.join(level),
        None => level,
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vimrogue_core::PassiveKind;

    #[test]
    fn partial_game_table_keeps_defaults() {
        let file = FileConfig::parse(
            "level = \"caves.txt\"\n[game]\nkeystroke_costs_turn = true\n",
            Path::new("conf/vimrogue.toml"),
        )
        .expect("valid toml");
        let game = file.game.expect("game table");
        assert!(game.keystroke_costs_turn);
        assert_eq!(game.default_max_range, GameConfig::DEFAULT_MAX_RANGE);
        assert_eq!(
            resolve_relative(Path::new("conf/vimrogue.toml"), file.level.expect("level")),
            PathBuf::from("conf/caves.txt")
        );
    }

    #[test]
    fn ability_lists_skip_blanks() {
        let abilities = parse_abilities("h, j,,magnetic".split(','));
        assert_eq!(
            abilities,
            vec![
                Ability::command("h"),
                Ability::command("j"),
                Ability::Passive(PassiveKind::Magnetic),
            ]
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let error = FileConfig::parse("speed = 3\n", Path::new("vimrogue.toml"))
            .expect_err("unknown key");
        assert!(matches!(error, ConfigError::Parse { .. }));
    }
}
