use super::{ActorState, EntityId, ItemState, Position};

/// Aggregate state for every entity in the map.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    pub player: ActorState,
    pub npcs: Vec<ActorState>,
    pub items: Vec<ItemState>,
}

impl EntitiesState {
    pub fn new(player: ActorState, npcs: Vec<ActorState>, items: Vec<ItemState>) -> Self {
        Self {
            player,
            npcs,
            items,
        }
    }

    /// Returns a reference to an actor by ID (player or NPC).
    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        if self.player.id == id {
            return Some(&self.player);
        }
        self.npcs.iter().find(|actor| actor.id == id)
    }

    /// Returns a mutable reference to an actor by ID (player or NPC).
    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        if self.player.id == id {
            return Some(&mut self.player);
        }
        self.npcs.iter_mut().find(|actor| actor.id == id)
    }

    /// Returns an iterator over all actors (player + NPCs), corpses included.
    pub fn all_actors(&self) -> impl Iterator<Item = &ActorState> {
        std::iter::once(&self.player).chain(self.npcs.iter())
    }

    /// The living actor standing on `position`, if any.
    pub fn living_actor_at(&self, position: Position) -> Option<&ActorState> {
        self.all_actors()
            .find(|actor| actor.is_alive() && actor.position == position)
    }

    /// The most recently killed actor lying on `position`, if any.
    pub fn corpse_at(&self, position: Position) -> Option<&ActorState> {
        self.all_actors()
            .filter(|actor| !actor.is_alive() && actor.position == position)
            .last()
    }

    pub fn items_at(&self, position: Position) -> impl Iterator<Item = &ItemState> {
        self.items.iter().filter(move |item| item.position == position)
    }

    /// Removes an item from the ground.
    pub fn take_item(&mut self, id: EntityId) -> Option<ItemState> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Highest id in use; used to allocate fresh ids.
    pub fn max_id(&self) -> EntityId {
        self.all_actors()
            .map(|actor| actor.id)
            .chain(self.items.iter().map(|item| item.id))
            .max()
            .unwrap_or(EntityId::PLAYER)
    }
}
