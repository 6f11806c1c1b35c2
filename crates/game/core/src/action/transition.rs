use super::{ActionError, ActionOutcome};
use crate::env::{GameEnv, ItemOracle, MapOracle, OracleError};
use crate::nav::WorldView;
use crate::state::{ActorState, EntityId, GameState, ItemHandle};

/// Defines how a concrete action variant mutates game state.
///
/// Implementors can override the validation hooks to surface pre- and
/// post-conditions that must hold around the state mutation. All hooks receive
/// read-only access to the static oracles via `Env` and must stay side-effect
/// free.
pub trait ActionTransition {
    /// Returns the entity performing this action.
    fn actor(&self) -> EntityId;

    /// Validates pre-conditions using the state **before** mutation.
    ///
    /// The default requires a living actor.
    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        let actor = acting(state, self.actor())?;
        if actor.is_alive() {
            Ok(())
        } else {
            Err(ActionError::ActorDead(actor.id))
        }
    }

    /// Applies the action by mutating the game state directly. Implementations should
    /// assume that `pre_validate` has already run successfully.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionOutcome, ActionError>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        Ok(())
    }
}

pub(crate) fn acting(state: &GameState, actor: EntityId) -> Result<&ActorState, ActionError> {
    state
        .entities
        .actor(actor)
        .ok_or(ActionError::ActorNotFound(actor))
}

pub(crate) fn acting_mut(state: &mut GameState, actor: EntityId) -> Result<&mut ActorState, ActionError> {
    state
        .entities
        .actor_mut(actor)
        .ok_or(ActionError::ActorNotFound(actor))
}

/// Navigation view over `state` and the oracles in `env`.
pub(crate) fn world_view<'a>(
    state: &'a GameState,
    env: &GameEnv<'a>,
) -> Result<WorldView<'a, dyn MapOracle + 'a, dyn ItemOracle + 'a>, OracleError> {
    Ok(WorldView::new(state, env.map()?, env.items()?))
}

/// Display name of the item behind `handle`.
pub(crate) fn item_name(env: &GameEnv<'_>, handle: ItemHandle) -> Result<String, OracleError> {
    env.items()?
        .definition(handle)
        .map(|definition| definition.name.clone())
        .ok_or(OracleError::ItemNotFound(handle))
}
