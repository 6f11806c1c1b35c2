//! Action domain: binding requests to executable actions.
//!
//! A completed [`ActionRequest`](crate::command::ActionRequest) is bound
//! through [`ActionCommand::into_action`] into an [`ExecutableAction`]: the
//! concrete [`ActionKind`] with its resolved path, the requirement tokens the
//! engine checks first, and whether it costs a turn.
//!
//! # Module Structure
//!
//! - `command`: binding (`CommandContext`, `ActionCommand`)
//! - `kinds`: one transition per verb (move, delete, yank, put, ...)
//! - `combat`: deterministic melee
//! - `outcome`: messages and signals returned by execution
//! - `error`: `ActionError`, `Impossible`, `BindError`

pub mod combat;
pub mod command;
pub mod error;
pub mod kinds;
pub mod outcome;
mod transition;

pub use combat::{MeleeReport, melee, melee_damage};
pub use command::{ActionCommand, CommandContext};
pub use error::{ActionError, BindError, Impossible};
pub use kinds::{
    DeleteAction, InterfaceAction, InterfaceRequest, MoveAction, PutAction, SetMarkAction,
    StairsAction, SwapRegistersAction, UseItemAction, WaitAction, YankAction,
};
pub use outcome::{ActionOutcome, Signal};
pub use transition::ActionTransition;

pub(crate) use kinds::inventory::pick_up;

use strum::IntoStaticStr;

use crate::state::{EntityId, Requirement};

/// Every action variant the engine can execute.
#[derive(Clone, Debug, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    Move(MoveAction),
    Delete(DeleteAction),
    Yank(YankAction),
    Put(PutAction),
    UseItem(UseItemAction),
    SetMark(SetMarkAction),
    Swap(SwapRegistersAction),
    Stairs(StairsAction),
    Interface(InterfaceAction),
    Wait(WaitAction),
}

impl ActionKind {
    /// Returns the snake_case name of the variant.
    ///
    /// Used for logging and error reporting.
    pub fn as_snake_case(&self) -> &'static str {
        self.into()
    }

    /// Actions that sweep cells a magnetic actor pulls items from.
    pub fn sweeps(&self) -> bool {
        matches!(self, ActionKind::Move(_) | ActionKind::Delete(_))
    }
}

/// A bound action ready for [`GameEngine::execute`](crate::GameEngine::execute).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutableAction {
    pub actor: EntityId,
    pub kind: ActionKind,
    /// Checked in order against the actor's abilities before execution.
    pub requirements: Vec<Requirement>,
    pub consumes_turn: bool,
    /// Keys as typed.
    pub text: String,
}

impl ExecutableAction {
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    pub fn consumes_turn(&self) -> bool {
        self.consumes_turn
    }
}
