use crate::action::transition::acting;
use crate::action::{ActionError, ActionOutcome, ActionTransition, Signal};
use crate::command::{ScrollKind, help_lines};
use crate::env::GameEnv;
use crate::state::{EntityId, GameState};

/// Requests answered by whoever drives the game rather than by the core.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InterfaceRequest {
    EnterMode(char),
    ShowInventory,
    Observe,
    Scroll(ScrollKind),
    Save,
    Quit { force: bool },
    SaveAndQuit,
    Help(Option<String>),
    Search { pattern: String, backwards: bool },
}

/// Turn-free action that only produces a [`Signal`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterfaceAction {
    pub actor: EntityId,
    pub request: InterfaceRequest,
}

impl ActionTransition for InterfaceAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionOutcome, ActionError> {
        let signal = match &self.request {
            InterfaceRequest::EnterMode(mode) => Signal::EnterMode(*mode),
            InterfaceRequest::ShowInventory => {
                let items = env.items()?;
                let lines = acting(state, self.actor)?.inventory.summary_lines(|handle| {
                    items
                        .definition(handle)
                        .map_or("unknown item", |definition| definition.name.as_str())
                });
                Signal::ShowInventory(lines)
            }
            InterfaceRequest::Observe => Signal::Observe,
            InterfaceRequest::Scroll(kind) => Signal::Scroll(*kind),
            InterfaceRequest::Save => Signal::Save,
            InterfaceRequest::Quit { force } => Signal::Quit { force: *force },
            InterfaceRequest::SaveAndQuit => Signal::SaveAndQuit,
            InterfaceRequest::Help(topic) => Signal::Help(help_lines(topic.as_deref())),
            InterfaceRequest::Search {
                pattern,
                backwards,
            } => Signal::Search {
                pattern: pattern.clone(),
                backwards: *backwards,
            },
        };
        Ok(ActionOutcome::with_signal(signal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Position;
    use crate::test_utils::TestWorld;

    #[test]
    fn inventory_lists_equipped_and_unequipped() {
        let mut world = TestWorld::from_rows(&["@[!"]);
        let yank = crate::action::YankAction::new(
            EntityId::PLAYER,
            crate::nav::Path::line(Position::ORIGIN, Position::new(2, 0)),
            None,
        );
        world.execute(&yank).expect("yank");
        let outcome = world
            .execute(&InterfaceAction {
                actor: EntityId::PLAYER,
                request: InterfaceRequest::ShowInventory,
            })
            .expect("inventory");
        assert_eq!(
            outcome.signal,
            Some(Signal::ShowInventory(vec![
                "Equipped:".to_owned(),
                " 1) magnet".to_owned(),
                " 2) healing potion".to_owned(),
                "Unequipped:".to_owned(),
            ]))
        );
    }
}
