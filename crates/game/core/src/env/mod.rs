//! Traits describing read-only world data.
//!
//! Oracles expose static map geometry and item definitions. The [`Env`]
//! aggregate bundles them so binding and execution can reach everything they
//! need without hard coupling to concrete implementations.
mod error;
mod items;
mod map;

pub use error::OracleError;
pub use items::{ConsumableEffect, ItemCatalog, ItemDefinition, ItemKind, ItemOracle};
pub use map::{GridMap, MapDimensions, MapOracle, StaticTile, TerrainKind};

/// Aggregates read-only oracles required by binding and execution.
#[derive(Debug)]
pub struct Env<'a, M, I>
where
    M: MapOracle + ?Sized,
    I: ItemOracle + ?Sized,
{
    map: Option<&'a M>,
    items: Option<&'a I>,
}

pub type GameEnv<'a> = Env<'a, dyn MapOracle + 'a, dyn ItemOracle + 'a>;

impl<M, I> Clone for Env<'_, M, I>
where
    M: MapOracle + ?Sized,
    I: ItemOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, I> Copy for Env<'_, M, I>
where
    M: MapOracle + ?Sized,
    I: ItemOracle + ?Sized,
{
}

impl<'a, M, I> Env<'a, M, I>
where
    M: MapOracle + ?Sized,
    I: ItemOracle + ?Sized,
{
    pub fn new(map: Option<&'a M>, items: Option<&'a I>) -> Self {
        Self { map, items }
    }

    pub fn with_all(map: &'a M, items: &'a I) -> Self {
        Self::new(Some(map), Some(items))
    }

    pub fn empty() -> Self {
        Self {
            map: None,
            items: None,
        }
    }

    /// Returns the MapOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MapNotAvailable` if no map oracle was provided.
    pub fn map(&self) -> Result<&'a M, OracleError> {
        self.map.ok_or(OracleError::MapNotAvailable)
    }

    /// Returns the ItemOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no items oracle was provided.
    pub fn items(&self) -> Result<&'a I, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }
}

impl<'a, M, I> Env<'a, M, I>
where
    M: MapOracle + 'a,
    I: ItemOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv`.
    pub fn into_game_env(self) -> GameEnv<'a> {
        let map: Option<&'a dyn MapOracle> = self.map.map(|map| map as _);
        let items: Option<&'a dyn ItemOracle> = self.items.map(|items| items as _);
        Env::new(map, items)
    }
}
