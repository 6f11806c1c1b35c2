//! Actor-related state types.
//!
//! This module contains all types specific to actors:
//! - ActorState: Main actor structure
//! - Abilities: Command gates and passive modifiers
//! - Inventory: Register-addressed item storage

pub mod abilities;
pub mod inventory;

pub use abilities::{Ability, PassiveKind, Requirement};
pub use inventory::{InventoryError, InventorySlot, InventoryState};

use strum::{Display, EnumString, IntoStaticStr};

use super::{EntityId, Position, ResourceMeter};
use crate::env::ItemOracle;

/// Glyph drawn for a dead actor.
pub const CORPSE_GLYPH: char = '%';

/// Allegiance used to decide who attacks whom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Display, EnumString, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Faction {
    Player,
    Hostile,
    #[default]
    Neutral,
}

impl Faction {
    pub fn is_hostile_to(self, other: Faction) -> bool {
        matches!(
            (self, other),
            (Faction::Player, Faction::Hostile) | (Faction::Hostile, Faction::Player)
        )
    }
}

/// Combat numbers for an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorStats {
    pub hp: ResourceMeter,
    /// Damage dealt by one melee hit.
    pub strength: u32,
    pub armor: u32,
    /// Cap applied to repeat counts; `None` uses the configured default.
    pub max_range: Option<u32>,
}

impl ActorStats {
    pub fn new(max_hp: u32, strength: u32, armor: u32) -> Self {
        Self {
            hp: ResourceMeter::full(max_hp),
            strength,
            armor,
            max_range: None,
        }
    }
}

impl Default for ActorStats {
    fn default() -> Self {
        Self::new(10, 1, 0)
    }
}

/// Complete actor state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: EntityId,
    pub name: String,
    /// Glyph drawn while alive; also what `f<c>` searches match.
    pub glyph: char,
    pub position: Position,
    pub stats: ActorStats,
    pub faction: Faction,
    /// Intrinsic abilities, independent of equipment.
    pub abilities: Vec<Ability>,
    pub inventory: InventoryState,
}

impl ActorState {
    pub fn new(id: EntityId, name: impl Into<String>, glyph: char, position: Position) -> Self {
        Self {
            id,
            name: name.into(),
            glyph,
            position,
            stats: ActorStats::default(),
            faction: Faction::default(),
            abilities: Vec::new(),
            inventory: InventoryState::default(),
        }
    }

    pub fn with_stats(mut self, stats: ActorStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_faction(mut self, faction: Faction) -> Self {
        self.faction = faction;
        self
    }

    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.abilities.push(ability);
        self
    }

    pub fn with_inventory(mut self, inventory: InventoryState) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn with_max_range(mut self, max_range: u32) -> Self {
        self.stats.max_range = Some(max_range);
        self
    }

    /// Quick check if actor is alive.
    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.stats.hp.is_depleted()
    }

    /// Only living actors block movement.
    #[inline]
    pub fn blocks_movement(&self) -> bool {
        self.is_alive()
    }

    pub fn display_glyph(&self) -> char {
        if self.is_alive() { self.glyph } else { CORPSE_GLYPH }
    }

    pub fn is_hostile_to(&self, other: &ActorState) -> bool {
        self.id != other.id && self.faction.is_hostile_to(other.faction)
    }

    /// Effective count cap for this actor.
    pub fn max_range(&self, default_max_range: u32) -> u32 {
        self.stats.max_range.unwrap_or(default_max_range)
    }

    /// Intrinsic abilities plus those granted by equipped items.
    pub fn abilities<'a, I>(&'a self, items: &'a I) -> impl Iterator<Item = &'a Ability> + 'a
    where
        I: ItemOracle + ?Sized,
    {
        let granted = self
            .inventory
            .equipped()
            .filter_map(move |slot| items.definition(slot.handle))
            .filter_map(|definition| definition.grants());
        self.abilities.iter().chain(granted)
    }

    /// Returns true if any owned ability fulfills `requirement`.
    pub fn fulfills<I>(&self, requirement: &Requirement, items: &I) -> bool
    where
        I: ItemOracle + ?Sized,
    {
        self.abilities(items)
            .any(|ability| ability.fulfills(requirement))
    }

    /// Checks a passive modifier; omnipotence does not imply passives.
    pub fn has_passive<I>(&self, kind: PassiveKind, items: &I) -> bool
    where
        I: ItemOracle + ?Sized,
    {
        self.abilities(items).any(|ability| ability.is_passive(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factions_are_only_hostile_across_player_line() {
        assert!(Faction::Player.is_hostile_to(Faction::Hostile));
        assert!(Faction::Hostile.is_hostile_to(Faction::Player));
        assert!(!Faction::Hostile.is_hostile_to(Faction::Hostile));
        assert!(!Faction::Neutral.is_hostile_to(Faction::Player));
    }

    #[test]
    fn dead_actor_draws_as_corpse_and_stops_blocking() {
        let mut actor = ActorState::new(EntityId(3), "rat", 'r', Position::new(1, 1));
        assert!(actor.blocks_movement());
        actor.stats.hp.drain(100);
        assert_eq!(actor.display_glyph(), CORPSE_GLYPH);
        assert!(!actor.blocks_movement());
    }
}
