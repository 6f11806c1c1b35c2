//! Register-addressed inventory for actors.
//!
//! Items live in named registers: `1`-`9` hold equipped items, `a`-`z` hold
//! everything else. An inventory of capacity `n` may only use the first `n`
//! register names.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::types::{EntityId, ItemHandle};

/// Errors raised by register bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("\"{0} is not a valid register.")]
    InvalidRegister(char),

    #[error("\"{0} is full.")]
    RegisterOccupied(char),

    #[error("Your inventory is full.")]
    Full,

    #[error("Nothing in \"{0}!")]
    Empty(char),
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidRegister(_) => ErrorSeverity::Validation,
            Self::RegisterOccupied(_) | Self::Full | Self::Empty(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRegister(_) => "INVENTORY_INVALID_REGISTER",
            Self::RegisterOccupied(_) => "INVENTORY_REGISTER_OCCUPIED",
            Self::Full => "INVENTORY_FULL",
            Self::Empty(_) => "INVENTORY_EMPTY_REGISTER",
        }
    }
}

/// One occupied register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventorySlot {
    pub register: char,
    /// Entity id the item had on the map; reused when it is dropped again.
    pub item: EntityId,
    pub handle: ItemHandle,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    capacity: usize,
    slots: ArrayVec<InventorySlot, { GameConfig::MAX_REGISTERS }>,
    /// Registers in order of last use, most recent last.
    history: ArrayVec<char, { GameConfig::MAX_REGISTERS }>,
}

impl Default for InventoryState {
    fn default() -> Self {
        Self::with_capacity(GameConfig::DEFAULT_INVENTORY_CAPACITY)
    }
}

impl InventoryState {
    /// Creates an empty inventory; capacity is clamped to the register count.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.min(GameConfig::MAX_REGISTERS),
            slots: ArrayVec::new(),
            history: ArrayVec::new(),
        }
    }

    pub fn empty() -> Self {
        Self::with_capacity(0)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Register names usable by this inventory, in insertion order.
    pub fn valid_registers(&self) -> &'static str {
        &GameConfig::REGISTER_NAMES[..self.capacity]
    }

    pub fn is_valid_register(&self, register: char) -> bool {
        self.valid_registers().contains(register)
    }

    pub fn get(&self, register: char) -> Option<&InventorySlot> {
        self.slots.iter().find(|slot| slot.register == register)
    }

    /// Occupied registers sorted by register order.
    pub fn slots(&self) -> impl Iterator<Item = &InventorySlot> {
        self.valid_registers()
            .chars()
            .filter_map(|register| self.get(register))
    }

    /// Items in the equipped registers `1`-`9`.
    pub fn equipped(&self) -> impl Iterator<Item = &InventorySlot> {
        self.slots
            .iter()
            .filter(|slot| GameConfig::EQUIPPED_REGISTERS.contains(slot.register))
    }

    /// Most recently used register that still holds an item.
    ///
    /// Stale history entries are discarded along the way.
    pub fn last_used_register(&mut self) -> Option<char> {
        while let Some(&candidate) = self.history.last() {
            if self.get(candidate).is_some() {
                return Some(candidate);
            }
            self.history.pop();
        }
        None
    }

    /// Picks the register a `put`/`use` without explicit register refers to.
    ///
    /// Falls back to the last used register, then to `1`.
    pub fn resolve_register(&mut self, register: Option<char>) -> Result<char, InventoryError> {
        let register = match register {
            Some(register) => register,
            None => self.last_used_register().unwrap_or('1'),
        };
        if self.get(register).is_some() {
            Ok(register)
        } else if !self.is_valid_register(register) {
            Err(InventoryError::InvalidRegister(register))
        } else {
            Err(InventoryError::Empty(register))
        }
    }

    /// Stores an item, either in `register` or in the first free register.
    ///
    /// Returns the register the item landed in.
    pub fn insert(
        &mut self,
        item: EntityId,
        handle: ItemHandle,
        register: Option<char>,
    ) -> Result<char, InventoryError> {
        if self.is_full() {
            return Err(InventoryError::Full);
        }
        let register = match register {
            Some(register) if self.get(register).is_some() => {
                return Err(InventoryError::RegisterOccupied(register));
            }
            Some(register) if !self.is_valid_register(register) => {
                return Err(InventoryError::InvalidRegister(register));
            }
            Some(register) => register,
            None => self
                .valid_registers()
                .chars()
                .find(|register| self.get(*register).is_none())
                .ok_or(InventoryError::Full)?,
        };

        self.slots
            .try_push(InventorySlot {
                register,
                item,
                handle,
            })
            .map_err(|_| InventoryError::Full)?;
        self.touch(register);
        Ok(register)
    }

    /// Takes the item out of `register`.
    pub fn remove(&mut self, register: char) -> Result<InventorySlot, InventoryError> {
        match self.slots.iter().position(|slot| slot.register == register) {
            Some(index) => Ok(self.slots.remove(index)),
            None if !self.is_valid_register(register) => {
                Err(InventoryError::InvalidRegister(register))
            }
            None => Err(InventoryError::Empty(register)),
        }
    }

    /// Exchanges the contents of two registers; either may be empty.
    pub fn swap(&mut self, first: char, second: char) -> Result<(), InventoryError> {
        for register in [first, second] {
            if !self.is_valid_register(register) {
                return Err(InventoryError::InvalidRegister(register));
            }
        }
        if self.get(first).is_none() && self.get(second).is_none() {
            return Err(InventoryError::Empty(first));
        }
        for slot in self.slots.iter_mut() {
            if slot.register == first {
                slot.register = second;
            } else if slot.register == second {
                slot.register = first;
            }
        }
        self.touch(first);
        self.touch(second);
        Ok(())
    }

    /// Human-readable summary, equipped registers first.
    pub fn summary_lines<'a>(&self, name_of: impl Fn(ItemHandle) -> &'a str) -> Vec<String> {
        let mut lines = vec!["Equipped:".to_owned()];
        let (equipped, unequipped): (Vec<&InventorySlot>, Vec<&InventorySlot>) = self
            .slots()
            .partition(|slot| GameConfig::EQUIPPED_REGISTERS.contains(slot.register));
        lines.extend(
            equipped
                .iter()
                .map(|slot| format!(" {}) {}", slot.register, name_of(slot.handle))),
        );
        lines.push("Unequipped:".to_owned());
        lines.extend(
            unequipped
                .iter()
                .map(|slot| format!(" {}) {}", slot.register, name_of(slot.handle))),
        );
        lines
    }

    fn touch(&mut self, register: char) {
        self.history.retain(|r| *r != register);
        // Every register appears at most once, so this never overflows.
        let _ = self.history.try_push(register);
    }
}
