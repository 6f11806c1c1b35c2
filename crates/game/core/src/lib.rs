//! Deterministic rules for a vim-flavoured roguelike.
//!
//! `vimrogue-core` turns keystrokes into game actions. An
//! [`InterpreterSession`] consumes one key at a time until the buffer forms a
//! complete command, the [`PathResolver`] turns movements into concrete grid
//! paths, bindings produce an [`ExecutableAction`] together with its
//! requirement tokens, and [`GameEngine`] is the only place that mutates
//! [`GameState`]. Clients supply the static map and item catalog through
//! [`Env`].
pub mod action;
pub mod command;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod level;
pub mod movement;
pub mod nav;
pub mod state;

#[cfg(test)]
mod test_utils;

pub use action::{
    ActionCommand, ActionError, ActionKind, ActionOutcome, ActionTransition, BindError,
    CommandContext, ExecutableAction, Impossible, Signal,
};
pub use command::{ActionRequest, CommandError, InterpreterResult, InterpreterSession, Verb};
pub use config::GameConfig;
pub use engine::{ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError};
pub use env::{
    Env, GameEnv, GridMap, ItemCatalog, ItemDefinition, ItemKind, ItemOracle, MapDimensions,
    MapOracle, OracleError, TerrainKind,
};
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use level::{Level, LevelError};
pub use movement::{MovementSpec, PathResolver};
pub use nav::{NavigationOracle, Path, WorldView};
pub use state::{
    Ability, ActorState, ActorStats, EntityId, Faction, GameState, InventoryState, ItemHandle,
    ItemState, PassiveKind, Position, Requirement, ResourceMeter,
};
