use crate::error::{ErrorSeverity, GameError};

/// Keystroke buffer that cannot become a command.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The buffer is not a prefix of any command.
    #[error("E492: Not an editor command: {text}")]
    NotAnEditorCommand { text: String },

    /// A movement-only session was given something other than a movement.
    #[error("Not a valid movement.")]
    NotAMovement { text: String },
}

impl CommandError {
    /// The rejected text, echoed back to the user.
    pub fn text(&self) -> &str {
        match self {
            CommandError::NotAnEditorCommand { text } | CommandError::NotAMovement { text } => text,
        }
    }
}

impl GameError for CommandError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            CommandError::NotAnEditorCommand { .. } => "COMMAND_NOT_AN_EDITOR_COMMAND",
            CommandError::NotAMovement { .. } => "COMMAND_NOT_A_MOVEMENT",
        }
    }
}
