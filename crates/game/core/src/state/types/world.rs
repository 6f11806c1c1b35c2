use std::collections::BTreeMap;

use super::Position;

/// Runtime world data layered on top of the static map.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    marks: BTreeMap<char, Position>,
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark names are the lowercase letters `a`-`z`.
    pub fn is_valid_mark(name: char) -> bool {
        name.is_ascii_lowercase()
    }

    pub fn mark(&self, name: char) -> Option<Position> {
        self.marks.get(&name).copied()
    }

    /// Stores a mark; returns false (and stores nothing) for invalid names.
    pub fn set_mark(&mut self, name: char, position: Position) -> bool {
        if !Self::is_valid_mark(name) {
            return false;
        }
        self.marks.insert(name, position);
        true
    }

    pub fn marks(&self) -> impl Iterator<Item = (char, Position)> + '_ {
        self.marks.iter().map(|(name, position)| (*name, *position))
    }

    /// Marks belong to one level and are forgotten on stairs.
    pub fn clear_marks(&mut self) {
        self.marks.clear();
    }
}
