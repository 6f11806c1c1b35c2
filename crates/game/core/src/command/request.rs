use super::grammar::{Operand, ParsedCommand, ScrollKind};
use crate::movement::{Edge, Motion, MovementSpec};
use crate::state::{Position, Requirement};

/// What a completed command asks the engine to do.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verb {
    Move(MovementSpec),
    /// Attack along, then move.
    Delete(Operand),
    /// Pick up along, without moving.
    Yank(Operand),
    /// Drop the item in the request register (or the last used one).
    Put,
    UseItem,
    SetMark(char),
    /// Walk back to the previous position; `None` when there is no history.
    Undo { target: Option<Position> },
    Stairs { up: bool },
    EnterMode(char),
    Scroll(ScrollKind),
    ShowInventory,
    Observe,
    Save,
    Quit { force: bool },
    SaveAndQuit,
    SwapRegisters(char, char),
    Help(Option<String>),
    Search { pattern: String, backwards: bool },
    Wait,
}

impl Verb {
    /// Whether executing this verb ends the actor's turn.
    pub fn consumes_turn(&self) -> bool {
        matches!(
            self,
            Verb::Move(_)
                | Verb::Delete(_)
                | Verb::Yank(_)
                | Verb::Put
                | Verb::Stairs { .. }
                | Verb::SwapRegisters(..)
                | Verb::Wait
        )
    }

    /// The movement this verb travels along, if any.
    pub fn movement(&self) -> Option<&MovementSpec> {
        match self {
            Verb::Move(spec)
            | Verb::Delete(Operand::Along(spec))
            | Verb::Yank(Operand::Along(spec)) => Some(spec),
            _ => None,
        }
    }
}

/// Structured result of a completed command.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionRequest {
    pub verb: Verb,
    pub register: Option<char>,
    /// Keys as typed.
    pub text: String,
    /// Ability tokens checked in order before execution.
    pub requirements: Vec<Requirement>,
}

impl ActionRequest {
    pub fn new(verb: Verb, text: impl Into<String>) -> Self {
        Self {
            verb,
            register: None,
            text: text.into(),
            requirements: Vec::new(),
        }
    }

    pub fn with_register(mut self, register: Option<char>) -> Self {
        self.register = register;
        self
    }

    pub fn with_requirements(mut self, requirements: Vec<Requirement>) -> Self {
        self.requirements = requirements;
        self
    }

    pub fn consumes_turn(&self) -> bool {
        self.verb.consumes_turn()
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }
}

/// Requirement tokens implied by the typed command.
pub(crate) fn requirements_for(command: &ParsedCommand) -> Vec<Requirement> {
    fn along(spec: &MovementSpec, verb: char) -> Vec<Requirement> {
        let mut requirements = movement_requirements(spec);
        requirements.push(Requirement::from(verb));
        requirements
    }

    match command {
        ParsedCommand::Move(spec) => movement_requirements(spec),
        ParsedCommand::Delete {
            operand: Operand::Along(spec),
            ..
        } => along(spec, 'd'),
        ParsedCommand::Delete {
            operand: Operand::Line { .. },
            ..
        } => vec![Requirement::from("d"), Requirement::from("dd")],
        ParsedCommand::Yank {
            operand: Operand::Along(spec),
            ..
        } => along(spec, 'y'),
        ParsedCommand::SetMark(_) => vec![Requirement::from("m")],
        ParsedCommand::Undo => vec![Requirement::from("u")],
        _ => Vec::new(),
    }
}

fn movement_requirements(spec: &MovementSpec) -> Vec<Requirement> {
    match spec.motion {
        Motion::Edge(Edge::Left) => vec![Requirement::from("0")],
        _ => spec.requirements(),
    }
}
