//! Concrete action variants, one [`ActionTransition`](super::ActionTransition) each.

pub mod delete;
pub mod interface;
pub mod inventory;
pub mod mark;
pub mod movement;

pub use delete::DeleteAction;
pub use interface::{InterfaceAction, InterfaceRequest};
pub use inventory::{PutAction, SwapRegistersAction, UseItemAction, YankAction};
pub use mark::SetMarkAction;
pub use movement::{MoveAction, StairsAction, WaitAction};
