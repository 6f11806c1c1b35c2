//! Action binding and execution errors.
//!
//! Binding failures mean the world could not be read; execution failures are
//! either a harmless notice ([`Impossible`]), a missing ability
//! ([`ActionError::Forbidden`]) or a defect.

use crate::env::OracleError;
use crate::error::{ErrorContext, ErrorSeverity, GameError};
use crate::state::{EntityId, InventoryError, Requirement};

/// A valid command that has no useful effect right now.
///
/// Reported as a notice; the turn is not spent.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Impossible {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("Your health is already full.")]
    HealthFull,

    /// Using an item without a use prints its flavor text.
    #[error("{0}")]
    NoEffect(String),

    #[error("{0:?} is not a valid mark name.")]
    InvalidMark(char),

    #[error("There are no stairs going {} here.", stairs_direction(.up))]
    NoStairs { up: bool },
}

fn stairs_direction(up: &bool) -> &'static str {
    if *up { "up" } else { "down" }
}

/// Errors that can occur while executing a bound action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Impossible(#[from] Impossible),

    /// The actor lacks the ability behind a requirement token.
    #[error("You can't use {requirement} yet.")]
    Forbidden {
        requirement: Requirement,
        context: ErrorContext,
    },

    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    #[error("actor {0} is dead")]
    ActorDead(EntityId),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl ActionError {
    pub fn forbidden(actor: EntityId, requirement: Requirement, nonce: u64) -> Self {
        Self::Forbidden {
            requirement,
            context: ErrorContext::new(nonce)
                .with_actor(actor)
                .with_message("requirement not fulfilled"),
        }
    }

    pub fn is_impossible(&self) -> bool {
        matches!(self, Self::Impossible(_))
    }
}

impl From<InventoryError> for ActionError {
    fn from(error: InventoryError) -> Self {
        Self::Impossible(Impossible::Inventory(error))
    }
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Impossible(_) => ErrorSeverity::Recoverable,
            Self::Forbidden { .. } => ErrorSeverity::Validation,
            Self::ActorNotFound(_) => ErrorSeverity::Internal,
            Self::ActorDead(_) => ErrorSeverity::Validation,
            Self::Oracle(error) => error.severity(),
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::Forbidden { context, .. } => Some(context),
            _ => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Impossible(Impossible::Inventory(error)) => error.error_code(),
            Self::Impossible(Impossible::HealthFull) => "ACTION_HEALTH_FULL",
            Self::Impossible(Impossible::NoEffect(_)) => "ACTION_NO_EFFECT",
            Self::Impossible(Impossible::InvalidMark(_)) => "ACTION_INVALID_MARK",
            Self::Impossible(Impossible::NoStairs { .. }) => "ACTION_NO_STAIRS",
            Self::Forbidden { .. } => "ACTION_FORBIDDEN",
            Self::ActorNotFound(_) => "ACTION_ACTOR_NOT_FOUND",
            Self::ActorDead(_) => "ACTION_ACTOR_DEAD",
            Self::Oracle(error) => error.error_code(),
        }
    }
}

/// Errors raised while turning a request into an executable action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for BindError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ActorNotFound(_) => ErrorSeverity::Internal,
            Self::Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ActorNotFound(_) => "BIND_ACTOR_NOT_FOUND",
            Self::Oracle(error) => error.error_code(),
        }
    }
}
