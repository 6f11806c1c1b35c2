use std::fmt;
use std::ops::{Add, Sub};

/// Game clock measured in elapsed turns.
pub type Tick = u64;

/// Unique identifier for any entity tracked in the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Reserved identifier for the controllable player character.
    pub const PLAYER: Self = Self(0);

    /// Returns true if this entity represents the player.
    #[inline]
    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::PLAYER
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
///
/// Rows grow downward: `y == 0` is the top edge of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Moves by `(dx, dy)` scaled by `times`.
    pub fn offset(self, (dx, dy): (i32, i32), times: i32) -> Self {
        Self::new(
            self.x.saturating_add(dx.saturating_mul(times)),
            self.y.saturating_add(dy.saturating_mul(times)),
        )
    }

    /// Squared Euclidean distance; orders cells exactly like the true distance.
    pub fn distance_squared(self, other: Position) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }

    /// True for the eight cells surrounding `other` (not `other` itself).
    pub fn is_adjacent_to(self, other: Position) -> bool {
        self != other && (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }

    /// The eight surrounding cells, x-major then y.
    pub fn neighbors(self) -> [Position; 8] {
        let mut cells = [self; 8];
        let mut i = 0;
        for dx in -1..=1 {
            for dy in -1..=1 {
                if (dx, dy) != (0, 0) {
                    cells[i] = Position::new(self.x + dx, self.y + dy);
                    i += 1;
                }
            }
        }
        cells
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add<(i32, i32)> for Position {
    type Output = Position;
    fn add(self, rhs: (i32, i32)) -> Position {
        self.offset(rhs, 1)
    }
}

impl Sub<(i32, i32)> for Position {
    type Output = Position;
    fn sub(self, rhs: (i32, i32)) -> Position {
        self.offset(rhs, -1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Integer resource meter (e.g., health) tracked per actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }

    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.maximum
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Restores up to `amount`, returning what was actually recovered.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_add(amount).min(self.maximum);
        self.current - before
    }

    /// Removes up to `amount`, never going below zero.
    pub fn drain(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_skip_center_in_x_major_order() {
        let cells = Position::new(5, 5).neighbors();
        assert_eq!(cells[0], Position::new(4, 4));
        assert_eq!(cells[2], Position::new(4, 6));
        assert_eq!(cells[3], Position::new(5, 4));
        assert_eq!(cells[7], Position::new(6, 6));
        assert!(!cells.contains(&Position::new(5, 5)));
    }

    #[test]
    fn resource_meter_clamps_restore_and_drain() {
        let mut hp = ResourceMeter::new(3, 10);
        assert_eq!(hp.restore(20), 7);
        assert!(hp.is_full());
        hp.drain(50);
        assert!(hp.is_depleted());
    }
}
