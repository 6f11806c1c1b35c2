use super::NavigationOracle;
use crate::env::{ItemOracle, MapDimensions, MapOracle};
use crate::state::{EntityId, GameState, Position};

/// Glyph drawn for ground items without a definition.
const UNKNOWN_ITEM_GLYPH: char = '?';

/// Navigation oracle over a state snapshot and the static oracles.
///
/// Glyph priority per cell: living actor, ground item, corpse, terrain.
pub struct WorldView<'a, M, I>
where
    M: MapOracle + ?Sized,
    I: ItemOracle + ?Sized,
{
    state: &'a GameState,
    map: &'a M,
    items: &'a I,
}

impl<'a, M, I> WorldView<'a, M, I>
where
    M: MapOracle + ?Sized,
    I: ItemOracle + ?Sized,
{
    pub fn new(state: &'a GameState, map: &'a M, items: &'a I) -> Self {
        Self { state, map, items }
    }

    pub fn state(&self) -> &'a GameState {
        self.state
    }

    /// The whole grid as text rows.
    pub fn render_rows(&self) -> Vec<String> {
        let dims = self.map.dimensions();
        (0..dims.height as i32)
            .map(|y| {
                (0..dims.width as i32)
                    .map(|x| self.glyph_at(Position::new(x, y)).unwrap_or(' '))
                    .collect()
            })
            .collect()
    }
}

impl<M, I> NavigationOracle for WorldView<'_, M, I>
where
    M: MapOracle + ?Sized,
    I: ItemOracle + ?Sized,
{
    fn dimensions(&self) -> MapDimensions {
        self.map.dimensions()
    }

    fn is_navigable(&self, position: Position, actor: EntityId) -> bool {
        let passable = self
            .map
            .tile(position)
            .is_some_and(|tile| tile.is_passable());
        passable
            && self
                .state
                .entities
                .living_actor_at(position)
                .is_none_or(|occupant| occupant.id == actor)
    }

    fn glyph_at(&self, position: Position) -> Option<char> {
        let tile = self.map.tile(position)?;
        let entities = &self.state.entities;
        if let Some(actor) = entities.living_actor_at(position) {
            return Some(actor.glyph);
        }
        if let Some(item) = entities.items_at(position).next() {
            return Some(
                self.items
                    .definition(item.handle)
                    .map_or(UNKNOWN_ITEM_GLYPH, |definition| definition.glyph),
            );
        }
        if let Some(corpse) = entities.corpse_at(position) {
            return Some(corpse.display_glyph());
        }
        Some(tile.terrain().glyph())
    }

    fn mark_location(&self, name: char) -> Option<Position> {
        self.state.world.mark(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestWorld;

    #[test]
    fn other_living_actors_block_but_self_does_not() {
        let world = TestWorld::from_rows(&["@g."]);
        let view = world.view();
        assert!(view.is_navigable(Position::new(0, 0), EntityId::PLAYER));
        assert!(!view.is_navigable(Position::new(1, 0), EntityId::PLAYER));
        assert!(view.is_navigable(Position::new(2, 0), EntityId::PLAYER));
        assert!(!view.is_navigable(Position::new(3, 0), EntityId::PLAYER));
    }

    #[test]
    fn render_draws_actors_items_and_terrain() {
        let world = TestWorld::from_rows(&["#@!g>"]);
        assert_eq!(world.view().render_rows(), vec!["#@!g>".to_owned()]);
    }
}
