use super::{LineIter, NavigationOracle};
use crate::state::{ActorState, Position};

/// Ordered, non-empty sequence of grid cells produced by the resolver.
///
/// The first cell is the logical start and the last the logical end before
/// truncation. Operations that need the grid take the oracle as an argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Position>,
}

impl Path {
    /// Straight line from `start` to `end`, both included.
    pub fn line(start: Position, end: Position) -> Self {
        Self {
            cells: LineIter::new(start, end).collect(),
        }
    }

    /// Zero-length path: the single cell `at`.
    pub fn stationary(at: Position) -> Self {
        Self { cells: vec![at] }
    }

    /// Joins straight segments from `start` through each way-point. Repeated
    /// cells keep only their first occurrence.
    pub fn poly(start: Position, waypoints: &[Position]) -> Self {
        let mut cells = vec![start];
        let mut from = start;
        for &to in waypoints {
            for cell in LineIter::new(from, to) {
                if !cells.contains(&cell) {
                    cells.push(cell);
                }
            }
            from = to;
        }
        Self { cells }
    }

    /// Arbitrary cell set (e.g. whole rows); empty input degenerates to `origin`.
    pub fn covering(cells: Vec<Position>, origin: Position) -> Self {
        if cells.is_empty() {
            Self::stationary(origin)
        } else {
            Self { cells }
        }
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Position {
        self.cells[0]
    }

    pub fn end(&self) -> Position {
        self.cells[self.cells.len() - 1]
    }

    pub fn contains(&self, cell: Position) -> bool {
        self.cells.contains(&cell)
    }

    /// Last cell `actor` could legally stand on; the actor's own cell if none.
    pub fn last_occupiable<O>(&self, oracle: &O, actor: &ActorState) -> Position
    where
        O: NavigationOracle + ?Sized,
    {
        self.cells
            .iter()
            .rev()
            .copied()
            .find(|cell| oracle.is_navigable(*cell, actor.id))
            .unwrap_or(actor.position)
    }

    /// Keeps the longest prefix ending on a navigable cell, plus one more cell
    /// when `include_barrier` is set. Collapses to the actor's cell when no
    /// cell is navigable.
    pub fn truncate_to_navigable<O>(&mut self, oracle: &O, actor: &ActorState, include_barrier: bool)
    where
        O: NavigationOracle + ?Sized,
    {
        match self
            .cells
            .iter()
            .rposition(|cell| oracle.is_navigable(*cell, actor.id))
        {
            Some(index) => {
                let keep = if include_barrier { index + 2 } else { index + 1 };
                self.cells.truncate(keep);
            }
            None => self.cells = vec![actor.position],
        }
    }

    /// The cell after the last navigable one, if the path has one.
    pub fn barrier<O>(&self, oracle: &O, actor: &ActorState) -> Option<Position>
    where
        O: NavigationOracle + ?Sized,
    {
        let index = self
            .cells
            .iter()
            .rposition(|cell| oracle.is_navigable(*cell, actor.id))?;
        self.cells.get(index + 1).copied()
    }
}

impl IntoIterator for Path {
    type Item = Position;
    type IntoIter = std::vec::IntoIter<Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestWorld;

    #[test]
    fn poly_path_collapses_repeated_cells() {
        let path = Path::poly(Position::new(0, 0), &[Position::new(2, 0), Position::new(0, 0)]);
        assert_eq!(
            path.cells(),
            &[Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]
        );
    }

    #[test]
    fn truncation_keeps_one_barrier_cell_on_request() {
        let world = TestWorld::from_rows(&["@..#"]);
        let view = world.view();
        let player = world.player();

        let mut with_barrier = Path::line(Position::new(0, 0), Position::new(5, 0));
        with_barrier.truncate_to_navigable(&view, player, true);
        assert_eq!(with_barrier.end(), Position::new(3, 0));

        let mut without = Path::line(Position::new(0, 0), Position::new(5, 0));
        without.truncate_to_navigable(&view, player, false);
        assert_eq!(without.end(), Position::new(2, 0));
    }

    #[test]
    fn truncation_scans_from_the_far_end() {
        let world = TestWorld::from_rows(&["@..#.."]);
        let view = world.view();
        let mut path = Path::line(Position::new(0, 0), Position::new(5, 0));
        path.truncate_to_navigable(&view, world.player(), true);
        assert_eq!(path.end(), Position::new(5, 0));
        assert_eq!(path.barrier(&view, world.player()), None);
    }

    #[test]
    fn truncation_is_idempotent_on_navigable_paths() {
        let world = TestWorld::from_rows(&["@....."]);
        let view = world.view();
        let mut path = Path::line(Position::new(0, 0), Position::new(4, 0));
        let before = path.clone();
        path.truncate_to_navigable(&view, world.player(), true);
        assert_eq!(path, before);
    }

    #[test]
    fn nothing_navigable_collapses_to_actor_cell() {
        let world = TestWorld::from_rows(&["###", "#@#"]);
        let view = world.view();
        let mut path = Path::line(Position::new(0, 0), Position::new(2, 0));
        path.truncate_to_navigable(&view, world.player(), true);
        assert_eq!(path.cells(), &[Position::new(1, 1)]);
        assert_eq!(path.last_occupiable(&view, world.player()), Position::new(1, 1));
    }
}
