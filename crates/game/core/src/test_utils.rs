//! Shared world builder for unit tests.

use crate::action::{
    ActionCommand, ActionError, ActionOutcome, ActionTransition, CommandContext, ExecutableAction,
};
use crate::command::{ActionRequest, InterpreterResult, InterpreterSession};
use crate::config::GameConfig;
use crate::engine::{ExecuteError, GameEngine, drive_transition};
use crate::env::{Env, GameEnv, GridMap, ItemCatalog};
use crate::level::Level;
use crate::nav::WorldView;
use crate::state::{Ability, ActorState, EntityId, GameState, Position};

/// A level parsed from text rows with the standard item catalog.
///
/// The player can do everything and counts up to 10.
pub struct TestWorld {
    pub map: GridMap,
    pub items: ItemCatalog,
    pub state: GameState,
    pub config: GameConfig,
}

impl TestWorld {
    pub fn from_rows(rows: &[&str]) -> Self {
        let items = ItemCatalog::standard();
        let config = GameConfig::default();
        let Level { map, mut state } = match Level::parse(rows, &items, &config) {
            Ok(level) => level,
            Err(error) => panic!("invalid test level: {error}"),
        };
        let player = &mut state.entities.player;
        player.abilities.push(Ability::Omnipotent);
        player.stats.max_range = Some(10);
        Self {
            map,
            items,
            state,
            config,
        }
    }

    pub fn view(&self) -> WorldView<'_, GridMap, ItemCatalog> {
        WorldView::new(&self.state, &self.map, &self.items)
    }

    pub fn env(&self) -> GameEnv<'_> {
        Env::with_all(&self.map, &self.items).into_game_env()
    }

    pub fn player(&self) -> &ActorState {
        self.state.player()
    }

    /// Living NPC standing on `position`.
    pub fn npc_at(&self, position: Position) -> Option<&ActorState> {
        self.state
            .entities
            .npcs
            .iter()
            .find(|npc| npc.is_alive() && npc.position == position)
    }

    pub fn session(&self) -> InterpreterSession {
        InterpreterSession::new(&self.config)
    }

    /// Feeds `keys` to a fresh session for the player; the last key must resolve.
    pub fn request(&self, keys: &str) -> ActionRequest {
        let mut session = self.session();
        let player = self.player().clone();
        let mut last = None;
        for key in keys.chars() {
            last = Some(session.feed(key, &player));
        }
        match last {
            Some(InterpreterResult::Resolved(request)) => request,
            other => panic!("{keys:?} did not resolve: {other:?}"),
        }
    }

    pub fn bind(&self, request: ActionRequest) -> ExecutableAction {
        let env = Env::with_all(&self.map, &self.items);
        let ctx = CommandContext::new(&self.state, &env, &self.config);
        match request.into_action(EntityId::PLAYER, ctx) {
            Ok(action) => action,
            Err(error) => panic!("binding failed: {error}"),
        }
    }

    /// Runs a bound action through the engine.
    pub fn run(&mut self, action: &ExecutableAction) -> Result<ActionOutcome, ExecuteError> {
        let env = Env::with_all(&self.map, &self.items).into_game_env();
        GameEngine::new(&mut self.state).execute(env, action)
    }

    /// Runs a single transition without the requirement gate.
    pub fn execute<T: ActionTransition>(&mut self, action: &T) -> Result<ActionOutcome, ActionError> {
        let env = Env::with_all(&self.map, &self.items).into_game_env();
        drive_transition(action, &mut self.state, &env).map_err(|(_, error)| error)
    }
}
