//! Incremental command interpreter.
//!
//! Keystrokes arrive one at a time through [`InterpreterSession::feed`]. After
//! every key the whole buffer is classified as pending, resolved or rejected;
//! resolved commands come out as [`ActionRequest`]s ready for binding.
//!
//! # Module Structure
//!
//! - `grammar`: recognizer over the fixed keystroke alphabet
//! - `request`: verbs, requests and their requirement tokens
//! - `session`: per-actor buffer, undo history and last find
//! - `colon`: full lines typed after `:`, `/` or `?`
//! - `help`: `:help` topics

mod colon;
mod error;
mod grammar;
mod help;
mod request;
mod session;

pub use colon::parse_line;
pub use error::CommandError;
pub use grammar::{Operand, Parse, ParsedCommand, ScrollKind, parse_command, parse_movement};
pub use help::help_lines;
pub use request::{ActionRequest, Verb};
pub use session::{InterpreterResult, InterpreterSession};
