//! Error classification shared by every vimrogue-core error.
//!
//! A keystroke can fail in three ways, and each error type reports which one
//! through [`GameError::severity`]:
//!
//! - a rejected keystroke buffer (`CommandError`) or a missing ability
//!   (`ActionError::Forbidden`) is [`ErrorSeverity::Validation`]: the player
//!   typed something they may not do;
//! - a well-formed command with nothing to act on (`ActionError::Impossible`)
//!   is [`ErrorSeverity::Recoverable`]: it becomes a notice and costs no turn;
//! - a missing actor or oracle is [`ErrorSeverity::Internal`] or
//!   [`ErrorSeverity::Fatal`] and points at a bug in the caller.

use crate::state::EntityId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Nothing happened; the player can keep going.
    Recoverable,
    /// The command itself is not allowed as typed.
    Validation,
    /// State and command disagree, e.g. the acting entity is gone.
    Internal,
    /// The engine was built without an oracle it needs.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// True when the client should report the error and carry on.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Who failed a requirement check, and at which action nonce.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorContext {
    pub actor: Option<EntityId>,
    pub nonce: u64,
    pub message: Option<&'static str>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(nonce: u64) -> Self {
        Self {
            actor: None,
            nonce,
            message: None,
        }
    }

    #[must_use]
    pub const fn with_actor(mut self, actor: EntityId) -> Self {
        self.actor = Some(actor);
        self
    }

    #[must_use]
    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

/// Implemented by every error the core returns.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Nonce and actor for errors raised while executing an action.
    fn context(&self) -> Option<&ErrorContext> {
        None
    }

    /// Stable identifier such as `COMMAND_NOT_AN_EDITOR_COMMAND`.
    fn error_code(&self) -> &'static str;
}
