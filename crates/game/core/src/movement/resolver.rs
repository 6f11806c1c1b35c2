use tracing::trace;

use super::{Edge, FindMode, FindSpec, Motion, MovementSpec};
use crate::nav::{NavigationOracle, Path, line_passes_through};
use crate::state::{ActorState, Position};

/// Turns a [`MovementSpec`] into a concrete [`Path`] for one actor.
///
/// Paths are not truncated here; the action consuming the path decides how.
pub struct PathResolver<'a, O>
where
    O: NavigationOracle + ?Sized,
{
    oracle: &'a O,
    actor: &'a ActorState,
    max_range: u32,
}

impl<'a, O> PathResolver<'a, O>
where
    O: NavigationOracle + ?Sized,
{
    /// `max_range` caps every repeat count.
    pub fn new(oracle: &'a O, actor: &'a ActorState, max_range: u32) -> Self {
        Self {
            oracle,
            actor,
            max_range,
        }
    }

    pub fn resolve(&self, spec: &MovementSpec) -> Path {
        let origin = self.actor.position;
        let count = spec.count.map(|count| count.min(self.max_range));
        let path = match spec.motion {
            Motion::Step(direction) => {
                let steps = grid_steps(count.unwrap_or(1));
                Path::line(origin, origin.offset(direction.delta(), steps))
            }
            Motion::Edge(edge) => self.edge_jump(edge, count),
            Motion::Center => Path::line(origin, self.oracle.dimensions().center()),
            Motion::Find(find) => self.find(&find, count.unwrap_or(1)),
            Motion::RepeatFind => Path::stationary(origin),
            Motion::Mark { name, .. } => match self.oracle.mark_location(name) {
                Some(mark) => Path::line(origin, mark),
                None => Path::stationary(origin),
            },
        };
        trace!(
            target: "vimrogue::resolver",
            actor = %self.actor.id,
            motion = ?spec.motion,
            ?count,
            end = %path.end(),
            "resolved path"
        );
        path
    }

    fn edge_cell(&self, edge: Edge) -> Position {
        let dims = self.oracle.dimensions();
        let origin = self.actor.position;
        match edge {
            Edge::Left => Position::new(0, origin.y),
            Edge::Right => Position::new(dims.last_column(), origin.y),
            Edge::Top => Position::new(origin.x, 0),
            Edge::Bottom => Position::new(origin.x, dims.last_row()),
        }
    }

    /// Without a count: straight to the edge. With a count `n`: `n` cells
    /// back from the barrier of the jump. When nothing is in the way the
    /// pivot is the top row for `H` and the cell just past the edge for `L`
    /// and `$`.
    fn edge_jump(&self, edge: Edge, count: Option<u32>) -> Path {
        let origin = self.actor.position;
        let edge_cell = self.edge_cell(edge);
        let jump = Path::line(origin, edge_cell);
        let Some(n) = count else {
            return jump;
        };
        let pivot = match jump.barrier(self.oracle, self.actor) {
            Some(barrier) => barrier,
            None if edge == Edge::Top => edge_cell,
            None => edge_cell.offset(edge.delta(), 1),
        };
        let target = pivot.offset(edge.delta(), -grid_steps(n));
        Path::line(origin, target)
    }

    fn find(&self, find: &FindSpec, count: u32) -> Path {
        let origin = self.actor.position;
        let mut waypoints = self.oracle.nearest_matches(
            origin,
            find.criterion,
            count as usize,
            find.exclude_adjacent(),
        );
        let Some(&last) = waypoints.last() else {
            return Path::stationary(origin);
        };
        let previous = match waypoints.len() {
            1 => origin,
            n => waypoints[n - 2],
        };
        let landing = self.bump_destination(previous, last, find.mode());
        if let Some(slot) = waypoints.last_mut() {
            *slot = landing;
        }
        Path::poly(origin, &waypoints)
    }

    /// Decides whether a find lands on, before or past its matched cell.
    pub fn bump_destination(&self, source: Position, target: Position, mode: FindMode) -> Position {
        if source == target {
            return target;
        }
        if mode == FindMode::Overshoot && self.oracle.is_navigable(target, self.actor.id) {
            return target;
        }

        let mut candidates = target.neighbors();
        candidates.sort_by_key(|cell| cell.distance_squared(source));

        if mode == FindMode::Undershoot {
            return candidates[0];
        }

        let choice = candidates
            .iter()
            .copied()
            .find(|cell| line_passes_through(source, *cell, target))
            .unwrap_or(candidates[candidates.len() - 1]);
        if self.oracle.is_navigable(choice, self.actor.id) {
            choice
        } else {
            target
        }
    }
}

/// Repeat counts beyond `i32::MAX` saturate instead of wrapping.
fn grid_steps(count: u32) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}
