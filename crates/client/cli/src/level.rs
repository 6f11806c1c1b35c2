//! Level loading for the CLI.
use std::path::Path;

use anyhow::{Context, Result};
use vimrogue_core::{GameConfig, ItemCatalog, Level};

/// Played when no level file is configured.
pub const BUILTIN_LEVEL: &str = "\
##################################
#@.....#..........g.......#......#
#......#..!...............#..*...#
#.................#########......#
#......#..........#.......o......#
#####.###...[.....#...r...#......#
#.................#.......#...T..#
#..?..............#.......#....>.#
##################################
";

/// Loads `path`, or the built-in level when `path` is `None`.
pub fn load(path: Option<&Path>, items: &ItemCatalog, config: &GameConfig) -> Result<Level> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read level {}", path.display()))?,
        None => BUILTIN_LEVEL.to_owned(),
    };
    let level = Level::from_text(&text, items, config).with_context(|| match path {
        Some(path) => format!("invalid level {}", path.display()),
        None => "invalid built-in level".to_owned(),
    })?;
    tracing::info!(
        npcs = level.state.entities.npcs.len(),
        items = level.state.entities.items.len(),
        "level loaded"
    );
    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_level_parses() {
        let level = load(None, &ItemCatalog::standard(), &GameConfig::default())
            .expect("built-in level is valid");
        assert_eq!(level.state.entities.npcs.len(), 4);
        assert_eq!(level.state.entities.items.len(), 4);
    }

    #[test]
    fn missing_file_reports_its_path() {
        let error = load(
            Some(Path::new("/nonexistent/level.txt")),
            &ItemCatalog::standard(),
            &GameConfig::default(),
        )
        .expect_err("no such file");
        assert!(error.to_string().contains("/nonexistent/level.txt"));
    }
}
