use crate::state::{Ability, ItemHandle, PassiveKind};

pub trait ItemOracle: Send + Sync {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition>;
}

/// Item definition with common fields and type-specific data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    pub name: String,
    /// Glyph drawn while the item lies on the ground.
    pub glyph: char,
    pub kind: ItemKind,
}

impl ItemDefinition {
    pub fn new(handle: ItemHandle, name: impl Into<String>, glyph: char, kind: ItemKind) -> Self {
        Self {
            handle,
            name: name.into(),
            glyph,
            kind,
        }
    }

    /// Ability granted while equipped in registers `1`-`9`.
    pub fn grants(&self) -> Option<&Ability> {
        match &self.kind {
            ItemKind::Equipment { grants } => Some(grants),
            _ => None,
        }
    }
}

/// Item type with type-specific data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Grants an ability while equipped.
    Equipment { grants: Ability },

    /// Used up by `@<register>`.
    Consumable(ConsumableEffect),

    /// Carried around; using it only prints `message`.
    Inert { message: String },
}

/// Consumable effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConsumableEffect {
    /// Restore health.
    HealHealth(u32),
}

/// In-memory item table implementing [`ItemOracle`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemCatalog {
    items: Vec<ItemDefinition>,
}

impl ItemCatalog {
    pub fn new(items: Vec<ItemDefinition>) -> Self {
        Self { items }
    }

    /// The built-in item set used by level files.
    pub fn standard() -> Self {
        Self::new(vec![
            ItemDefinition::new(
                ItemHandle(1),
                "healing potion",
                '!',
                ItemKind::Consumable(ConsumableEffect::HealHealth(5)),
            ),
            ItemDefinition::new(
                ItemHandle(2),
                "magnet",
                '[',
                ItemKind::Equipment {
                    grants: Ability::Passive(PassiveKind::Magnetic),
                },
            ),
            ItemDefinition::new(
                ItemHandle(3),
                "longbow",
                ')',
                ItemKind::Equipment {
                    grants: Ability::Passive(PassiveKind::Ranged),
                },
            ),
            ItemDefinition::new(
                ItemHandle(4),
                "scroll of deletion",
                '?',
                ItemKind::Equipment {
                    grants: Ability::command("d"),
                },
            ),
            ItemDefinition::new(
                ItemHandle(5),
                "gem",
                '*',
                ItemKind::Inert {
                    message: "It sparkles, but does nothing.".to_owned(),
                },
            ),
        ])
    }

    pub fn insert(&mut self, definition: ItemDefinition) {
        self.items.retain(|item| item.handle != definition.handle);
        self.items.push(definition);
    }

    pub fn by_glyph(&self, glyph: char) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| item.glyph == glyph)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter()
    }
}

impl ItemOracle for ItemCatalog {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| item.handle == handle)
    }
}
