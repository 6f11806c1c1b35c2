//! Movement specifications and their resolution into paths.
mod resolver;
mod spec;

pub use resolver::PathResolver;
pub use spec::{CardinalDirection, Edge, FindMode, FindSpec, Motion, MovementSpec};
