/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Upper bound for repeat counts of actors that do not carry their own range.
    pub default_max_range: u32,
    /// Number of registers an actor inventory starts with (at most `MAX_REGISTERS`).
    pub inventory_capacity: usize,
    /// When set, every pending keystroke costs a game turn, except register
    /// selection and the `g` prefix.
    pub keystroke_costs_turn: bool,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Positions remembered per session for `u`.
    pub const MAX_UNDO_HISTORY: usize = 32;
    /// `1`-`9` followed by `a`-`z`.
    pub const MAX_REGISTERS: usize = 35;
    /// Registers `1`-`9` hold equipped items.
    pub const EQUIPPED_REGISTERS: &'static str = "123456789";
    /// Every register name in insertion order.
    pub const REGISTER_NAMES: &'static str = "123456789abcdefghijklmnopqrstuvwxyz";

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_RANGE: u32 = 5;
    pub const DEFAULT_INVENTORY_CAPACITY: usize = 10;

    pub fn new() -> Self {
        Self {
            default_max_range: Self::DEFAULT_MAX_RANGE,
            inventory_capacity: Self::DEFAULT_INVENTORY_CAPACITY,
            keystroke_costs_turn: false,
        }
    }

    pub fn with_keystroke_turns(mut self, enabled: bool) -> Self {
        self.keystroke_costs_turn = enabled;
        self
    }

    /// Capacity clamped to the number of register names.
    pub fn clamped_inventory_capacity(&self) -> usize {
        self.inventory_capacity.min(Self::MAX_REGISTERS)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
