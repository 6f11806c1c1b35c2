//! Grid navigation: the navigability oracle, discrete lines and paths.
//!
//! The resolver and the action bindings only ever see the grid through
//! [`NavigationOracle`]. [`WorldView`] implements it over a [`GameState`]
//! and the static oracles.
//!
//! [`GameState`]: crate::state::GameState
mod line;
mod path;
mod view;

pub use line::{LineIter, line_passes_through};
pub use path::Path;
pub use view::WorldView;

use crate::env::MapDimensions;
use crate::state::{EntityId, Position};

/// What a find command searches for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchCriterion {
    /// Cells currently drawn with this glyph (`t<c>`, `f<c>`).
    Glyph(char),
    /// Cells drawn with any ASCII letter (`w`, `e`).
    Alphabetic,
}

impl MatchCriterion {
    pub fn matches(self, glyph: char) -> bool {
        match self {
            MatchCriterion::Glyph(target) => glyph == target,
            MatchCriterion::Alphabetic => glyph.is_ascii_alphabetic(),
        }
    }
}

/// Read-only questions the resolver asks about the grid.
pub trait NavigationOracle {
    fn dimensions(&self) -> MapDimensions;

    /// True if `actor` may legally occupy `position`: in bounds, passable
    /// terrain and not blocked by another living actor.
    fn is_navigable(&self, position: Position, actor: EntityId) -> bool;

    /// Glyph currently visible at `position`.
    fn glyph_at(&self, position: Position) -> Option<char>;

    fn mark_location(&self, name: char) -> Option<Position>;

    /// Up to `count` cells matching `criterion`, nearest to `origin` first.
    ///
    /// The origin itself never matches. Ties keep scan order (column by
    /// column, then row). With `exclude_adjacent`, the eight surrounding
    /// cells are skipped too.
    fn nearest_matches(
        &self,
        origin: Position,
        criterion: MatchCriterion,
        count: usize,
        exclude_adjacent: bool,
    ) -> Vec<Position> {
        let dims = self.dimensions();
        let mut found: Vec<Position> = (0..dims.width as i32)
            .flat_map(|x| (0..dims.height as i32).map(move |y| Position::new(x, y)))
            .filter(|cell| *cell != origin)
            .filter(|cell| !exclude_adjacent || cell.distance_squared(origin) > 2)
            .filter(|cell| self.glyph_at(*cell).is_some_and(|g| criterion.matches(g)))
            .collect();
        found.sort_by_key(|cell| cell.distance_squared(origin));
        found.truncate(count);
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestWorld;

    #[test]
    fn nearest_matches_orders_by_distance_then_scan_order() {
        let world = TestWorld::from_rows(&[
            "x...x", //
            "..@..",
            "x...x",
        ]);
        let view = world.view();
        let found = view.nearest_matches(Position::new(2, 1), MatchCriterion::Glyph('x'), 4, false);
        assert_eq!(
            found,
            vec![
                Position::new(0, 0),
                Position::new(0, 2),
                Position::new(4, 0),
                Position::new(4, 2),
            ]
        );
    }

    #[test]
    fn nearest_matches_can_skip_adjacent_cells() {
        let world = TestWorld::from_rows(&["@x.x"]);
        let view = world.view();
        let near = view.nearest_matches(Position::new(0, 0), MatchCriterion::Glyph('x'), 1, false);
        let far = view.nearest_matches(Position::new(0, 0), MatchCriterion::Glyph('x'), 1, true);
        assert_eq!(near, vec![Position::new(1, 0)]);
        assert_eq!(far, vec![Position::new(3, 0)]);
    }

    #[test]
    fn alphabetic_criterion_ignores_symbols() {
        assert!(MatchCriterion::Alphabetic.matches('g'));
        assert!(MatchCriterion::Alphabetic.matches('T'));
        assert!(!MatchCriterion::Alphabetic.matches('#'));
        assert!(!MatchCriterion::Alphabetic.matches('@'));
    }
}
