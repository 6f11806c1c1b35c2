use tracing::info;

use super::movement::{covered_cells, relocate};
use crate::action::combat::melee;
use crate::action::transition::{acting, world_view};
use crate::action::{ActionError, ActionOutcome, ActionTransition};
use crate::env::GameEnv;
use crate::nav::Path;
use crate::state::{EntityId, GameState, PassiveKind};

/// `d`: attacks every hostile actor on the path, then moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteAction {
    pub actor: EntityId,
    pub path: Path,
    /// Line deletes (`dd`) strike whole rows and leave the actor in place.
    pub moves: bool,
}

impl DeleteAction {
    pub fn along(actor: EntityId, path: Path) -> Self {
        Self {
            actor,
            path,
            moves: true,
        }
    }

    pub fn rows(actor: EntityId, path: Path) -> Self {
        Self {
            actor,
            path,
            moves: false,
        }
    }
}

impl ActionTransition for DeleteAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionOutcome, ActionError> {
        // Destination comes from the grid as it is before any blow lands.
        let (defenders, destination, covered) = {
            let view = world_view(state, env)?;
            let actor = acting(state, self.actor)?;
            let defenders: Vec<EntityId> = self
                .path
                .cells()
                .iter()
                .filter_map(|cell| state.entities.living_actor_at(*cell))
                .filter(|occupant| actor.is_hostile_to(occupant))
                .map(|occupant| occupant.id)
                .collect();
            let stays = !self.moves || actor.has_passive(PassiveKind::Ranged, env.items()?);

            let mut path = self.path.clone();
            path.truncate_to_navigable(&view, actor, true);
            let destination = if stays {
                actor.position
            } else {
                path.last_occupiable(&view, actor)
            };
            path.truncate_to_navigable(&view, actor, false);
            let covered = if stays {
                path.cells().to_vec()
            } else {
                covered_cells(&path, destination)
            };
            (defenders, destination, covered)
        };

        let mut outcome = ActionOutcome::new();
        for defender in &defenders {
            outcome.extend_messages(melee(state, self.actor, *defender)?.messages);
        }

        relocate(state, self.actor, destination)?;

        info!(
            target: "vimrogue::action",
            actor = %self.actor,
            hits = defenders.len(),
            to = %destination,
            "delete"
        );
        outcome.covered = covered;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Ability, Position};
    use crate::test_utils::TestWorld;

    fn line(to: Position) -> Path {
        Path::line(Position::ORIGIN, to)
    }

    #[test]
    fn attacks_every_hostile_on_the_path_then_moves() {
        let mut world = TestWorld::from_rows(&["@r.r.#"]);
        world.state.entities.player.stats.strength = 10;
        let outcome = world
            .execute(&DeleteAction::along(EntityId::PLAYER, line(Position::new(5, 0))))
            .expect("delete succeeds");
        assert_eq!(outcome.messages.iter().filter(|m| m.contains("attacked rat")).count(), 2);
        assert_eq!(world.player().position, Position::new(4, 0));
        assert!(world.npc_at(Position::new(1, 0)).is_none());
    }

    #[test]
    fn slain_barrier_is_not_entered() {
        let mut world = TestWorld::from_rows(&["@.r..."]);
        world.state.entities.player.stats.strength = 50;
        world
            .execute(&DeleteAction::along(EntityId::PLAYER, line(Position::new(2, 0))))
            .expect("delete succeeds");
        assert!(world.npc_at(Position::new(2, 0)).is_none());
        assert_eq!(world.player().position, Position::new(1, 0));
    }

    #[test]
    fn hostiles_past_a_wall_are_still_struck() {
        let mut world = TestWorld::from_rows(&["@#r.."]);
        world.state.entities.player.stats.strength = 50;
        let outcome = world
            .execute(&DeleteAction::along(EntityId::PLAYER, line(Position::new(2, 0))))
            .expect("delete succeeds");
        assert!(outcome.messages.iter().any(|m| m.contains("attacked rat")));
        assert!(world.npc_at(Position::new(2, 0)).is_none());
        assert_eq!(world.player().position, Position::ORIGIN);
    }

    #[test]
    fn ranged_actors_stay_put() {
        let mut world = TestWorld::from_rows(&["@.T.."]);
        world
            .state
            .entities
            .player
            .abilities
            .push(Ability::Passive(PassiveKind::Ranged));
        world
            .execute(&DeleteAction::along(EntityId::PLAYER, line(Position::new(4, 0))))
            .expect("delete succeeds");
        assert_eq!(world.player().position, Position::ORIGIN);
        let troll = world.npc_at(Position::new(2, 0)).expect("troll survives one hit");
        assert!(troll.stats.hp.current < troll.stats.hp.maximum);
    }

    #[test]
    fn row_deletes_do_not_move() {
        let mut world = TestWorld::from_rows(&["..g", "@..", "r.."]);
        world.state.entities.player.stats.strength = 10;
        let rows = Path::covering(
            (0..3).flat_map(|y| (0..3).map(move |x| Position::new(x, y))).collect(),
            Position::new(0, 1),
        );
        world
            .execute(&DeleteAction::rows(EntityId::PLAYER, rows))
            .expect("delete succeeds");
        assert_eq!(world.player().position, Position::new(0, 1));
        assert!(world.npc_at(Position::new(2, 0)).is_none());
        assert!(world.npc_at(Position::new(0, 2)).is_none());
    }
}
