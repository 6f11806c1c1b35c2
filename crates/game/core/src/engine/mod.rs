//! Action execution pipeline.
//!
//! The [`GameEngine`] is the only place that mutates [`GameState`]. Every
//! executable action goes through the same pipeline: requirement gate,
//! pre_validate, apply, post_validate. Turn scheduling itself belongs to the
//! caller; the engine only advances the clock for turn-consuming actions.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

#[cfg(test)]
pub(crate) use transition::drive_transition;

use tracing::{info, warn};

use crate::action::{ActionError, ActionOutcome, ExecutableAction, pick_up};
use crate::env::GameEnv;
use crate::state::{GameState, PassiveKind};

/// Game engine that manages action execution.
///
/// All state mutations flow through the action pipeline:
/// requirements → pre_validate → apply → post_validate
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Executes a bound action.
    ///
    /// Requirement tokens are checked in order first; the first one the actor
    /// cannot fulfil fails with [`ActionError::Forbidden`]. Failed actions
    /// leave the clock untouched. Magnetic actors additionally yank the items
    /// on every cell a move or delete swept over.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        action: &ExecutableAction,
    ) -> Result<ActionOutcome, ExecuteError> {
        let kind = action.kind.as_snake_case();
        let nonce = self.state.turn.action_nonce;

        if let Err(error) = self.check_requirements(&env, action, nonce) {
            warn!(target: "vimrogue::engine", actor = %action.actor, %kind, %error, "forbidden");
            return Err(ExecuteError::new(kind, TransitionPhase::Requirements, error));
        }

        let mut outcome = match transition::execute_transition(&action.kind, self.state, &env) {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(
                    target: "vimrogue::engine",
                    actor = %action.actor,
                    %kind,
                    phase = error.phase().as_str(),
                    %error,
                    "action failed"
                );
                return Err(error);
            }
        };

        if action.kind.sweeps() && self.is_magnetic(&env, action)? {
            self.attract(&env, action, &mut outcome);
        }

        self.state.turn.next_nonce();
        if action.consumes_turn {
            self.state.turn.advance_clock();
        }

        info!(
            target: "vimrogue::engine",
            actor = %action.actor,
            %kind,
            text = %action.text,
            nonce,
            clock = self.state.turn.clock,
            "executed"
        );
        Ok(outcome)
    }

    fn check_requirements(
        &self,
        env: &GameEnv<'_>,
        action: &ExecutableAction,
        nonce: u64,
    ) -> Result<(), ActionError> {
        if action.requirements.is_empty() {
            return Ok(());
        }
        let actor = self
            .state
            .entities
            .actor(action.actor)
            .ok_or(ActionError::ActorNotFound(action.actor))?;
        let items = env.items()?;
        match action
            .requirements()
            .iter()
            .find(|requirement| !actor.fulfills(requirement, items))
        {
            Some(missing) => Err(ActionError::forbidden(actor.id, missing.clone(), nonce)),
            None => Ok(()),
        }
    }

    fn is_magnetic(&self, env: &GameEnv<'_>, action: &ExecutableAction) -> Result<bool, ExecuteError> {
        let kind = action.kind.as_snake_case();
        let lookup = || -> Result<bool, ActionError> {
            let actor = self
                .state
                .entities
                .actor(action.actor)
                .ok_or(ActionError::ActorNotFound(action.actor))?;
            Ok(actor.has_passive(PassiveKind::Magnetic, env.items()?))
        };
        lookup().map_err(|error| ExecuteError::new(kind, TransitionPhase::PostValidate, error))
    }

    /// Pulls items off the swept cells; failures only produce messages.
    fn attract(&mut self, env: &GameEnv<'_>, action: &ExecutableAction, outcome: &mut ActionOutcome) {
        match pick_up(self.state, env, action.actor, &outcome.covered, None) {
            Ok(pulled) => outcome.extend_messages(
                pulled
                    .messages
                    .into_iter()
                    .filter(|message| !message.starts_with("There is nothing")),
            ),
            Err(error) => outcome.message(error.to_string()),
        }
    }
}
