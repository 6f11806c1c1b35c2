//! Authoritative game state representation.
//!
//! This module owns the data structures that describe entities, turn
//! bookkeeping and marks. Bindings read this state; only the engine
//! mutates it.
pub mod types;

pub use types::{
    Ability, ActorState, ActorStats, CORPSE_GLYPH, EntitiesState, EntityId, Faction,
    InventoryError, InventorySlot, InventoryState, ItemHandle, ItemState, PassiveKind, Position,
    Requirement, ResourceMeter, Tick, TurnState, WorldState,
};

/// Canonical snapshot of the game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Sequential entity ID allocator (monotonically increasing, never reused).
    next_entity_id: u32,

    /// Turn bookkeeping.
    pub turn: TurnState,
    /// All entities on the level: actors and ground items.
    pub entities: EntitiesState,
    /// Runtime world data layered on top of the static map.
    pub world: WorldState,
}

impl GameState {
    /// Creates a state holding only the given player.
    pub fn new(player: ActorState) -> Self {
        Self::from_entities(EntitiesState::new(player, Vec::new(), Vec::new()))
    }

    /// Creates a state around pre-built entities; the id allocator starts past
    /// the highest id already present.
    pub fn from_entities(entities: EntitiesState) -> Self {
        let next_entity_id = entities.max_id().0.saturating_add(1);
        Self {
            next_entity_id,
            turn: TurnState::default(),
            entities,
            world: WorldState::default(),
        }
    }

    /// Allocates a new unique EntityId.
    pub fn allocate_entity_id(&mut self) -> EntityId {
        if self.next_entity_id == EntityId::PLAYER.0 {
            self.next_entity_id = 1;
        }
        let id = EntityId(self.next_entity_id);
        self.next_entity_id = self.next_entity_id.saturating_add(1);
        id
    }

    /// Adds an NPC with a freshly allocated id.
    pub fn spawn_npc(&mut self, mut actor: ActorState) -> EntityId {
        let id = self.allocate_entity_id();
        actor.id = id;
        self.entities.npcs.push(actor);
        id
    }

    /// Places an item on the ground with a freshly allocated id.
    pub fn spawn_item(&mut self, handle: ItemHandle, position: Position) -> EntityId {
        let id = self.allocate_entity_id();
        self.entities.items.push(ItemState::new(id, position, handle));
        id
    }

    pub fn player(&self) -> &ActorState {
        &self.entities.player
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawned_entities_get_unique_ids() {
        let player = ActorState::new(EntityId::PLAYER, "you", '@', Position::new(1, 1));
        let mut state = GameState::new(player);
        let rat = state.spawn_npc(ActorState::new(EntityId(0), "rat", 'r', Position::new(2, 1)));
        let coin = state.spawn_item(ItemHandle(7), Position::new(3, 1));
        assert_ne!(rat, EntityId::PLAYER);
        assert_ne!(rat, coin);
        assert_eq!(state.entities.items_at(Position::new(3, 1)).count(), 1);
    }
}
