use arrayvec::ArrayVec;
use tracing::{debug, info, warn};

use super::colon;
use super::error::CommandError;
use super::grammar::{Operand, Parse, ParsedCommand, parse_command, parse_movement};
use super::request::{ActionRequest, Verb, requirements_for};
use crate::config::GameConfig;
use crate::movement::{Motion, MovementSpec};
use crate::state::{ActorState, Position};

/// Outcome of feeding one keystroke.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InterpreterResult {
    /// Valid prefix; the buffer is kept.
    Pending { buffer: String, consumes_turn: bool },
    /// Complete command; the buffer is cleared.
    Resolved(ActionRequest),
    /// Not a prefix of any command; the buffer is cleared.
    Rejected(CommandError),
}

impl InterpreterResult {
    /// Whether this keystroke costs the actor a turn on its own.
    pub fn consumes_turn(&self) -> bool {
        match self {
            InterpreterResult::Pending { consumes_turn, .. } => *consumes_turn,
            InterpreterResult::Resolved(request) => request.consumes_turn(),
            InterpreterResult::Rejected(_) => false,
        }
    }
}

/// Per-actor keystroke interpreter.
///
/// Holds the partial command, a bounded history of positions for `u`, and
/// the last completed find for `;`. The buffer is empty at the start of
/// every command.
#[derive(Clone, Debug, Default)]
pub struct InterpreterSession {
    buffer: Vec<char>,
    history: ArrayVec<Position, { GameConfig::MAX_UNDO_HISTORY }>,
    last_find: Option<MovementSpec>,
    movement_only: bool,
    keystroke_costs_turn: bool,
}

impl InterpreterSession {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            keystroke_costs_turn: config.keystroke_costs_turn,
            ..Self::default()
        }
    }

    /// A session that only accepts movements (cursor entities).
    pub fn movement_only(config: &GameConfig) -> Self {
        Self {
            movement_only: true,
            ..Self::new(config)
        }
    }

    pub fn buffer(&self) -> String {
        self.buffer.iter().collect()
    }

    pub fn history(&self) -> &[Position] {
        &self.history
    }

    pub fn last_find(&self) -> Option<&MovementSpec> {
        self.last_find.as_ref()
    }

    /// Drops the partial command.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Forgets undo history (level change).
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Appends `key` and classifies the whole buffer.
    pub fn feed(&mut self, key: char, actor: &ActorState) -> InterpreterResult {
        self.buffer.push(key);
        let text = self.buffer();

        let parsed = if self.movement_only {
            match parse_movement(&self.buffer) {
                Parse::Complete(spec) => Parse::Complete(ParsedCommand::Move(spec)),
                Parse::Incomplete => Parse::Incomplete,
                Parse::Invalid if !parse_command(&self.buffer).is_invalid() => {
                    self.reset();
                    warn!(target: "vimrogue::command", actor = %actor.id, %text, "not a movement");
                    return InterpreterResult::Rejected(CommandError::NotAMovement { text });
                }
                Parse::Invalid => Parse::Invalid,
            }
        } else {
            parse_command(&self.buffer)
        };

        match parsed {
            Parse::Complete(command) => {
                self.reset();
                let request = self.complete(command, text, actor);
                info!(
                    target: "vimrogue::command",
                    actor = %actor.id,
                    text = %request.text,
                    consumes_turn = request.consumes_turn(),
                    "command resolved"
                );
                InterpreterResult::Resolved(request)
            }
            Parse::Incomplete => {
                let consumes_turn = self.keystroke_costs_turn && !self.is_free_prefix();
                debug!(target: "vimrogue::command", actor = %actor.id, %text, consumes_turn, "pending");
                InterpreterResult::Pending {
                    buffer: text,
                    consumes_turn,
                }
            }
            Parse::Invalid => {
                self.reset();
                warn!(target: "vimrogue::command", actor = %actor.id, %text, "rejected");
                InterpreterResult::Rejected(CommandError::NotAnEditorCommand { text })
            }
        }
    }

    /// Handles a full line typed in command (`:`) or search (`/`, `?`) mode.
    pub fn colon_command(&mut self, line: &str, actor: &ActorState) -> Result<ActionRequest, CommandError> {
        self.reset();
        if self.movement_only {
            return Err(CommandError::NotAMovement {
                text: line.to_owned(),
            });
        }
        let verb = colon::parse_line(line).inspect_err(|err| {
            warn!(target: "vimrogue::command", actor = %actor.id, %line, %err, "rejected line");
        })?;
        self.record_position(actor.position);
        Ok(ActionRequest::new(verb, line))
    }

    /// Register selection and the `g` prefix never cost a turn.
    fn is_free_prefix(&self) -> bool {
        let len = self.buffer.len();
        let selecting_register = self.buffer.last() == Some(&'"')
            || (len >= 2 && self.buffer[len - 2] == '"');
        selecting_register || self.buffer.as_slice() == ['g']
    }

    fn complete(&mut self, command: ParsedCommand, text: String, actor: &ActorState) -> ActionRequest {
        let requirements = requirements_for(&command);
        let (verb, register) = match command {
            ParsedCommand::Undo => {
                return match self.undo_target(actor.position) {
                    Some(target) => ActionRequest::new(Verb::Undo { target: Some(target) }, text)
                        .with_requirements(requirements),
                    None => ActionRequest::new(Verb::Undo { target: None }, text),
                };
            }
            ParsedCommand::Stairs { up } => {
                self.clear_history();
                return ActionRequest::new(Verb::Stairs { up }, text);
            }
            ParsedCommand::Move(spec) => (Verb::Move(self.remember_find(spec)), None),
            ParsedCommand::Delete { register, operand } => {
                (Verb::Delete(self.remember_operand(operand)), register)
            }
            ParsedCommand::Yank { register, operand } => {
                (Verb::Yank(self.remember_operand(operand)), register)
            }
            ParsedCommand::Put { register } => (Verb::Put, register),
            ParsedCommand::UseItem(register) => (Verb::UseItem, Some(register)),
            ParsedCommand::SetMark(name) => (Verb::SetMark(name), None),
            ParsedCommand::EnterMode(mode) => (Verb::EnterMode(mode), None),
            ParsedCommand::Scroll(kind) => (Verb::Scroll(kind), None),
            ParsedCommand::ShowInventory => (Verb::ShowInventory, None),
            ParsedCommand::Observe => (Verb::Observe, None),
            ParsedCommand::SaveAndQuit => (Verb::SaveAndQuit, None),
            ParsedCommand::Wait => (Verb::Wait, None),
        };
        self.record_position(actor.position);
        ActionRequest::new(verb, text)
            .with_register(register)
            .with_requirements(requirements)
    }

    fn remember_operand(&mut self, operand: Operand) -> Operand {
        match operand {
            Operand::Along(spec) => Operand::Along(self.remember_find(spec)),
            line => line,
        }
    }

    /// Swaps `;` for the remembered find and remembers new finds.
    fn remember_find(&mut self, spec: MovementSpec) -> MovementSpec {
        match spec.motion {
            Motion::RepeatFind => self.last_find.unwrap_or(spec),
            Motion::Find(_) => {
                self.last_find = Some(spec);
                spec
            }
            _ => spec,
        }
    }

    fn record_position(&mut self, position: Position) {
        if self.history.last() == Some(&position) {
            return;
        }
        if self.history.is_full() {
            self.history.remove(0);
        }
        self.history.push(position);
    }

    /// Pops the undo target, skipping an entry equal to the current cell.
    fn undo_target(&mut self, current: Position) -> Option<Position> {
        let target = self.history.pop()?;
        if target == current {
            if let Some(previous) = self.history.pop() {
                return Some(previous);
            }
        }
        Some(target)
    }
}
