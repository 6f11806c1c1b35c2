use tracing::debug;

use crate::action::transition::acting;
use crate::action::{ActionError, ActionOutcome, ActionTransition, Impossible};
use crate::env::GameEnv;
use crate::state::{EntityId, GameState, WorldState};

/// `m<r>`: remembers the actor's cell under a mark name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetMarkAction {
    pub actor: EntityId,
    pub name: char,
}

impl ActionTransition for SetMarkAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        acting(state, self.actor)?;
        if WorldState::is_valid_mark(self.name) {
            Ok(())
        } else {
            Err(Impossible::InvalidMark(self.name).into())
        }
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<ActionOutcome, ActionError> {
        let position = acting(state, self.actor)?.position;
        if !state.world.set_mark(self.name, position) {
            return Err(Impossible::InvalidMark(self.name).into());
        }
        debug!(target: "vimrogue::action", actor = %self.actor, mark = %self.name, %position, "mark set");
        Ok(ActionOutcome::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Position;
    use crate::test_utils::TestWorld;

    #[test]
    fn marks_store_the_actor_cell() {
        let mut world = TestWorld::from_rows(&["..@"]);
        let mark = SetMarkAction {
            actor: EntityId::PLAYER,
            name: 'q',
        };
        world.execute(&mark).expect("valid mark");
        assert_eq!(world.state.world.mark('q'), Some(Position::new(2, 0)));
    }

    #[test]
    fn uppercase_marks_are_impossible() {
        let mut world = TestWorld::from_rows(&["@"]);
        let mark = SetMarkAction {
            actor: EntityId::PLAYER,
            name: 'Q',
        };
        assert_eq!(
            world.execute(&mark),
            Err(ActionError::Impossible(Impossible::InvalidMark('Q')))
        );
    }
}
