use tracing::info;

use crate::action::combat::melee;
use crate::action::transition::{acting, acting_mut, world_view};
use crate::action::{ActionError, ActionOutcome, ActionTransition, Impossible, Signal};
use crate::env::{GameEnv, TerrainKind};
use crate::nav::Path;
use crate::state::{EntityId, GameState, Position};

/// Walks along a resolved path to its last navigable cell.
///
/// A hostile actor standing right behind that cell is attacked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveAction {
    pub actor: EntityId,
    pub path: Path,
}

impl MoveAction {
    pub fn new(actor: EntityId, path: Path) -> Self {
        Self { actor, path }
    }
}

impl ActionTransition for MoveAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionOutcome, ActionError> {
        let (destination, defender, covered) = {
            let view = world_view(state, env)?;
            let actor = acting(state, self.actor)?;
            let mut path = self.path.clone();
            path.truncate_to_navigable(&view, actor, true);
            let destination = path.last_occupiable(&view, actor);
            let defender = path
                .barrier(&view, actor)
                .and_then(|cell| state.entities.living_actor_at(cell))
                .filter(|occupant| actor.is_hostile_to(occupant))
                .map(|occupant| occupant.id);
            (destination, defender, covered_cells(&path, destination))
        };

        let mut outcome = ActionOutcome::new();
        if let Some(defender) = defender {
            outcome.extend_messages(melee(state, self.actor, defender)?.messages);
        }
        let origin = relocate(state, self.actor, destination)?;
        info!(
            target: "vimrogue::action",
            actor = %self.actor,
            from = %origin,
            to = %destination,
            attacked = defender.is_some(),
            "move"
        );
        outcome.covered = covered;
        Ok(outcome)
    }
}

/// Cells of a truncated path up to and including `destination`.
pub(crate) fn covered_cells(path: &Path, destination: Position) -> Vec<Position> {
    match path.cells().iter().position(|cell| *cell == destination) {
        Some(index) => path.cells()[..=index].to_vec(),
        None => vec![destination],
    }
}

/// Moves `actor` and returns where it came from.
pub(crate) fn relocate(
    state: &mut GameState,
    actor: EntityId,
    destination: Position,
) -> Result<Position, ActionError> {
    let actor = acting_mut(state, actor)?;
    let origin = actor.position;
    actor.position = destination;
    Ok(origin)
}

/// `>` or `<`: leaves the level when standing on matching stairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StairsAction {
    pub actor: EntityId,
    pub up: bool,
}

impl ActionTransition for StairsAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), ActionError> {
        let actor = acting(state, self.actor)?;
        let wanted = if self.up {
            TerrainKind::StairsUp
        } else {
            TerrainKind::StairsDown
        };
        let on_stairs = env
            .map()?
            .tile(actor.position)
            .is_some_and(|tile| tile.terrain() == wanted);
        if on_stairs {
            Ok(())
        } else {
            Err(Impossible::NoStairs { up: self.up }.into())
        }
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<ActionOutcome, ActionError> {
        state.world.clear_marks();
        info!(target: "vimrogue::action", actor = %self.actor, up = self.up, "stairs");
        Ok(ActionOutcome::with_signal(Signal::Stairs { up: self.up }))
    }
}

/// Spends the turn (or nothing, for an empty undo).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WaitAction {
    pub actor: EntityId,
}

impl ActionTransition for WaitAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn apply(&self, _state: &mut GameState, _env: &GameEnv<'_>) -> Result<ActionOutcome, ActionError> {
        Ok(ActionOutcome::new())
    }
}
