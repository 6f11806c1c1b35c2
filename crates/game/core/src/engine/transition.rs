//! Action transition dispatch and execution logic.

use crate::action::{ActionError, ActionKind, ActionOutcome, ActionTransition};
use crate::env::GameEnv;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and return the outcome
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
pub(crate) fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<ActionOutcome, (TransitionPhase, ActionError)>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| (TransitionPhase::PreValidate, error))?;

    let outcome = transition
        .apply(state, env)
        .map_err(|error| (TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| (TransitionPhase::PostValidate, error))?;

    Ok(outcome)
}

macro_rules! dispatch_transition {
    ($kind:expr, $state:expr, $env:expr, [$($variant:ident),* $(,)?]) => {
        match $kind {
            $(ActionKind::$variant(transition) => drive_transition(transition, $state, $env),)*
        }
    };
}

/// Routes an action kind to its transition.
pub(super) fn execute_transition(
    kind: &ActionKind,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<ActionOutcome, ExecuteError> {
    dispatch_transition!(
        kind,
        state,
        env,
        [Move, Delete, Yank, Put, UseItem, SetMark, Swap, Stairs, Interface, Wait]
    )
    .map_err(|(phase, error)| ExecuteError::new(kind.as_snake_case(), phase, error))
}
