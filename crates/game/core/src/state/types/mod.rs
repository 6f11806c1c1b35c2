pub mod actor;
pub mod common;
pub mod entities;
pub mod item;
pub mod turn;
pub mod world;

// Re-export all actor-related types
pub use actor::{
    // Abilities
    Ability,
    // Main actor state
    ActorState,
    ActorStats,
    CORPSE_GLYPH,
    Faction,
    // Inventory
    InventoryError,
    InventorySlot,
    InventoryState,
    PassiveKind,
    Requirement,
};

// Re-export common types
pub use common::{EntityId, Position, ResourceMeter, Tick};

pub use entities::EntitiesState;

// Re-export item types
pub use item::{ItemHandle, ItemState};

// Re-export turn state
pub use turn::TurnState;

// Re-export world types
pub use world::WorldState;
