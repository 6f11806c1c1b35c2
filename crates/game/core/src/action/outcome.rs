use crate::command::ScrollKind;
use crate::state::Position;

/// Request for something outside the core: a mode switch, a text panel, a
/// level change or leaving the game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Signal {
    /// `:`, `/` or `?` was typed; collect a line.
    EnterMode(char),
    ShowInventory(Vec<String>),
    Observe,
    Scroll(ScrollKind),
    Save,
    Quit { force: bool },
    SaveAndQuit,
    Stairs { up: bool },
    Help(Vec<String>),
    Search { pattern: String, backwards: bool },
}

/// What an executed action produced besides the state change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    /// Log lines, oldest first.
    pub messages: Vec<String>,
    pub signal: Option<Signal>,
    /// Cells the actor swept over; drawn as a trace and scanned by magnetic actors.
    pub covered: Vec<Position>,
}

impl ActionOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_signal(signal: Signal) -> Self {
        Self {
            signal: Some(signal),
            ..Self::default()
        }
    }

    pub fn message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn extend_messages(&mut self, messages: impl IntoIterator<Item = String>) {
        self.messages.extend(messages);
    }
}
