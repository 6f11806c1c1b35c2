//! Text level layouts.
//!
//! A level is a block of rows: `#` walls, `.` floor, `>`/`<` stairs, blanks
//! as solid rock, `@` the player, letters hostile actors and any glyph of the
//! item catalog an item lying on floor.

use crate::config::GameConfig;
use crate::env::{GridMap, ItemCatalog, TerrainKind};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{
    ActorState, ActorStats, EntitiesState, EntityId, Faction, GameState, InventoryState,
    ItemState, Position,
};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    #[error("level has no rows")]
    Empty,

    #[error("level has no player '@'")]
    MissingPlayer,

    #[error("second player '@' at {second} (first at {first})")]
    MultiplePlayers { first: Position, second: Position },

    #[error("unknown glyph {glyph:?} at {position}")]
    UnknownGlyph { glyph: char, position: Position },
}

impl GameError for LevelError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            LevelError::Empty => "LEVEL_EMPTY",
            LevelError::MissingPlayer => "LEVEL_MISSING_PLAYER",
            LevelError::MultiplePlayers { .. } => "LEVEL_MULTIPLE_PLAYERS",
            LevelError::UnknownGlyph { .. } => "LEVEL_UNKNOWN_GLYPH",
        }
    }
}

/// A parsed level: static terrain plus the initial state.
#[derive(Clone, Debug)]
pub struct Level {
    pub map: GridMap,
    pub state: GameState,
}

impl Level {
    /// Parses newline-separated rows; trailing blank lines are ignored.
    pub fn from_text(text: &str, items: &ItemCatalog, config: &GameConfig) -> Result<Self, LevelError> {
        let rows: Vec<&str> = text.trim_end().lines().collect();
        Self::parse(&rows, items, config)
    }

    pub fn parse<S: AsRef<str>>(
        rows: &[S],
        items: &ItemCatalog,
        config: &GameConfig,
    ) -> Result<Self, LevelError> {
        if rows.is_empty() {
            return Err(LevelError::Empty);
        }
        let map = GridMap::from_rows(rows);

        let mut player: Option<ActorState> = None;
        let mut npcs = Vec::new();
        let mut ground = Vec::new();
        let mut next_id = EntityId::PLAYER.0 + 1;
        let mut allocate = || {
            let id = EntityId(next_id);
            next_id += 1;
            id
        };

        for (y, row) in rows.iter().enumerate() {
            for (x, glyph) in row.as_ref().chars().enumerate() {
                let position = Position::new(x as i32, y as i32);
                if glyph == ' ' || TerrainKind::from_glyph(glyph).is_some() {
                    continue;
                }
                if glyph == '@' {
                    if let Some(first) = &player {
                        return Err(LevelError::MultiplePlayers {
                            first: first.position,
                            second: position,
                        });
                    }
                    player = Some(default_player(position, config));
                } else if glyph.is_ascii_alphabetic() {
                    npcs.push(monster(allocate(), glyph, position));
                } else if let Some(definition) = items.by_glyph(glyph) {
                    ground.push(ItemState::new(allocate(), position, definition.handle));
                } else {
                    return Err(LevelError::UnknownGlyph { glyph, position });
                }
            }
        }

        let player = player.ok_or(LevelError::MissingPlayer)?;
        let state = GameState::from_entities(EntitiesState::new(player, npcs, ground));
        Ok(Self { map, state })
    }
}

fn default_player(position: Position, config: &GameConfig) -> ActorState {
    ActorState::new(EntityId::PLAYER, "you", '@', position)
        .with_stats(ActorStats::new(20, 3, 1))
        .with_faction(Faction::Player)
        .with_inventory(InventoryState::with_capacity(
            config.clamped_inventory_capacity(),
        ))
}

fn monster(id: EntityId, glyph: char, position: Position) -> ActorState {
    let name = match glyph {
        'g' => "goblin",
        'o' => "orc",
        'r' => "rat",
        's' => "snake",
        'T' => "troll",
        _ => "creature",
    };
    let stats = if glyph.is_ascii_uppercase() {
        ActorStats::new(12, 3, 4)
    } else {
        ActorStats::new(4, 1, 0)
    };
    ActorState::new(id, name, glyph, position)
        .with_stats(stats)
        .with_faction(Faction::Hostile)
        .with_inventory(InventoryState::empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapOracle;

    fn parse(rows: &[&str]) -> Result<Level, LevelError> {
        Level::parse(rows, &ItemCatalog::standard(), &GameConfig::default())
    }

    #[test]
    fn parses_player_monsters_and_items() {
        let level = parse(&["#####", "#@g!#", "#####"]).expect("valid level");
        let entities = &level.state.entities;
        assert_eq!(entities.player.position, Position::new(1, 1));
        assert_eq!(entities.npcs.len(), 1);
        assert_eq!(entities.npcs[0].name, "goblin");
        assert_eq!(entities.npcs[0].faction, Faction::Hostile);
        assert_eq!(entities.items_at(Position::new(3, 1)).count(), 1);
        assert!(level.map.tile(Position::new(2, 1)).is_some_and(|t| t.is_passable()));
    }

    #[test]
    fn rejects_missing_or_duplicate_player() {
        assert_eq!(parse(&["..."]).err(), Some(LevelError::MissingPlayer));
        assert!(matches!(
            parse(&["@.@"]),
            Err(LevelError::MultiplePlayers { .. })
        ));
    }

    #[test]
    fn rejects_unknown_glyphs() {
        assert_eq!(
            parse(&["@~"]).err(),
            Some(LevelError::UnknownGlyph {
                glyph: '~',
                position: Position::new(1, 0)
            })
        );
    }
}
