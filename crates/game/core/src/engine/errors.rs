//! Error types for the action execution pipeline.

use crate::action::ActionError;
use crate::error::{ErrorContext, ErrorSeverity, GameError};

/// Identifies which stage of the execution pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    /// Requirement tokens checked against the actor's abilities.
    Requirements,
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::Requirements => "requirements",
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("{kind} action failed: {source}")]
    Action {
        kind: &'static str,
        source: TransitionPhaseError<ActionError>,
    },
}

impl ExecuteError {
    pub(crate) fn new(kind: &'static str, phase: TransitionPhase, error: ActionError) -> Self {
        Self::Action {
            kind,
            source: TransitionPhaseError::new(phase, error),
        }
    }

    /// The action error behind this failure.
    pub fn action_error(&self) -> &ActionError {
        match self {
            Self::Action { source, .. } => &source.error,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        match self {
            Self::Action { source, .. } => source.phase,
        }
    }

    /// True for notices that leave the state untouched and cost no turn.
    pub fn is_impossible(&self) -> bool {
        self.action_error().is_impossible()
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self.action_error(), ActionError::Forbidden { .. })
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        self.action_error().severity()
    }

    fn context(&self) -> Option<&ErrorContext> {
        self.action_error().context()
    }

    fn error_code(&self) -> &'static str {
        self.action_error().error_code()
    }
}
