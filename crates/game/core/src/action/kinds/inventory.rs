//! Register-based item handling: yank, put, use and swap.

use tracing::{info, warn};

use crate::action::transition::{acting, acting_mut, item_name, world_view};
use crate::action::{ActionError, ActionOutcome, ActionTransition, Impossible};
use crate::env::{ConsumableEffect, GameEnv, ItemKind, OracleError};
use crate::nav::Path;
use crate::state::{EntityId, GameState, InventoryError, ItemState, Position};

/// `y`: picks up every item on the reachable part of the path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YankAction {
    pub actor: EntityId,
    pub path: Path,
    /// Register for the first item; later items take free registers.
    pub register: Option<char>,
}

impl YankAction {
    pub fn new(actor: EntityId, path: Path, register: Option<char>) -> Self {
        Self {
            actor,
            path,
            register,
        }
    }
}

impl ActionTransition for YankAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionOutcome, ActionError> {
        let covered = {
            let view = world_view(state, env)?;
            let actor = acting(state, self.actor)?;
            let mut path = self.path.clone();
            path.truncate_to_navigable(&view, actor, false);
            path.cells().to_vec()
        };
        let mut outcome = pick_up(state, env, self.actor, &covered, self.register)?;
        outcome.covered = covered;
        Ok(outcome)
    }
}

/// Moves ground items on `cells` into the actor's inventory, in path order.
///
/// Fails only when not a single item fits; later failures become messages.
pub(crate) fn pick_up(
    state: &mut GameState,
    env: &GameEnv<'_>,
    actor: EntityId,
    cells: &[Position],
    register: Option<char>,
) -> Result<ActionOutcome, ActionError> {
    let found: Vec<ItemState> = cells
        .iter()
        .flat_map(|cell| state.entities.items_at(*cell))
        .copied()
        .collect();

    let mut outcome = ActionOutcome::new();
    if found.is_empty() {
        outcome.message("There is nothing to yank.");
        return Ok(outcome);
    }

    let mut taken = 0;
    for (index, item) in found.iter().enumerate() {
        let wanted = if index == 0 { register } else { None };
        let name = item_name(env, item.handle)?;
        let inserted = acting_mut(state, actor)?
            .inventory
            .insert(item.id, item.handle, wanted);
        match inserted {
            Ok(landed) => {
                state.entities.take_item(item.id);
                taken += 1;
                outcome.message(format!("You yanked the {name} into \"{landed}."));
            }
            Err(error) if taken == 0 => return Err(error.into()),
            Err(error) => {
                warn!(target: "vimrogue::action", %actor, %error, "yank stopped early");
                outcome.message(error.to_string());
                break;
            }
        }
    }
    info!(target: "vimrogue::action", %actor, taken, "yank");
    Ok(outcome)
}

/// `p`: drops the item in a register onto the actor's cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PutAction {
    pub actor: EntityId,
    /// `None` drops the last used register (or `1`).
    pub register: Option<char>,
}

impl ActionTransition for PutAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionOutcome, ActionError> {
        let actor = acting_mut(state, self.actor)?;
        let position = actor.position;
        let register = actor.inventory.resolve_register(self.register)?;
        let slot = actor.inventory.remove(register)?;
        state
            .entities
            .items
            .push(ItemState::new(slot.item, position, slot.handle));

        let name = item_name(env, slot.handle)?;
        info!(target: "vimrogue::action", actor = %self.actor, %register, "put");
        let mut outcome = ActionOutcome::new();
        outcome.message(format!("You dropped the {name}."));
        Ok(outcome)
    }
}

/// `@r`: uses the item in a register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UseItemAction {
    pub actor: EntityId,
    pub register: Option<char>,
}

impl ActionTransition for UseItemAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionOutcome, ActionError> {
        let items = env.items()?;
        let actor = acting_mut(state, self.actor)?;
        let register = actor.inventory.resolve_register(self.register)?;
        let handle = actor
            .inventory
            .get(register)
            .map(|slot| slot.handle)
            .ok_or(InventoryError::Empty(register))?;
        let definition = items
            .definition(handle)
            .ok_or(OracleError::ItemNotFound(handle))?;

        let mut outcome = ActionOutcome::new();
        match &definition.kind {
            ItemKind::Consumable(ConsumableEffect::HealHealth(amount)) => {
                let recovered = actor.stats.hp.restore(*amount);
                if recovered == 0 {
                    return Err(Impossible::HealthFull.into());
                }
                actor.inventory.remove(register)?;
                outcome.message(format!(
                    "You consumed the {}, recovering {recovered} hp.",
                    definition.name
                ));
            }
            ItemKind::Inert { message } => return Err(Impossible::NoEffect(message.clone()).into()),
            ItemKind::Equipment { .. } => {
                return Err(Impossible::NoEffect(format!(
                    "The {} works while equipped in registers 1-9.",
                    definition.name
                ))
                .into());
            }
        }
        info!(target: "vimrogue::action", actor = %self.actor, %register, "use item");
        Ok(outcome)
    }
}

/// `:swap a b`: exchanges two registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapRegistersAction {
    pub actor: EntityId,
    pub first: char,
    pub second: char,
}

impl ActionTransition for SwapRegistersAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<ActionOutcome, ActionError> {
        acting_mut(state, self.actor)?
            .inventory
            .swap(self.first, self.second)?;
        let mut outcome = ActionOutcome::new();
        outcome.message(format!("Swapped \"{} and \"{}.", self.first, self.second));
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ItemHandle;
    use crate::test_utils::TestWorld;

    fn yank(world: &mut TestWorld, to: Position, register: Option<char>) -> Result<ActionOutcome, ActionError> {
        let from = world.player().position;
        world.execute(&YankAction::new(EntityId::PLAYER, Path::line(from, to), register))
    }

    #[test]
    fn yank_fills_requested_then_free_registers() {
        let mut world = TestWorld::from_rows(&["@!*.#"]);
        let outcome = yank(&mut world, Position::new(4, 0), Some('a')).expect("yank succeeds");
        let inventory = &world.player().inventory;
        assert_eq!(inventory.get('a').map(|slot| slot.handle), Some(ItemHandle(1)));
        assert_eq!(inventory.get('1').map(|slot| slot.handle), Some(ItemHandle(5)));
        assert_eq!(outcome.messages.len(), 2);
        assert!(world.state.entities.items.is_empty());
        assert_eq!(world.player().position, Position::ORIGIN);
    }

    #[test]
    fn yank_with_nothing_found_is_a_notice() {
        let mut world = TestWorld::from_rows(&["@..."]);
        let outcome = yank(&mut world, Position::new(3, 0), None).expect("nothing is fine");
        assert_eq!(outcome.messages, vec!["There is nothing to yank."]);
    }

    #[test]
    fn yank_into_occupied_register_is_impossible() {
        let mut world = TestWorld::from_rows(&["@!!"]);
        yank(&mut world, Position::new(1, 0), Some('a')).expect("first yank");
        world.state.entities.player.position = Position::new(1, 0);
        let error = yank(&mut world, Position::new(2, 0), Some('a')).expect_err("a is taken");
        assert_eq!(error, ActionError::from(InventoryError::RegisterOccupied('a')));
    }

    #[test]
    fn put_drops_last_used_register() {
        let mut world = TestWorld::from_rows(&["@*."]);
        yank(&mut world, Position::new(1, 0), Some('a')).expect("yank");
        world
            .execute(&PutAction {
                actor: EntityId::PLAYER,
                register: None,
            })
            .expect("put");
        assert!(world.player().inventory.is_empty());
        assert_eq!(world.state.entities.items_at(Position::ORIGIN).count(), 1);
    }

    #[test]
    fn healing_needs_missing_health() {
        let mut world = TestWorld::from_rows(&["@!"]);
        yank(&mut world, Position::new(1, 0), Some('a')).expect("yank");
        let use_a = UseItemAction {
            actor: EntityId::PLAYER,
            register: Some('a'),
        };
        assert_eq!(
            world.execute(&use_a),
            Err(ActionError::Impossible(Impossible::HealthFull))
        );

        world.state.entities.player.stats.hp.drain(3);
        let outcome = world.execute(&use_a).expect("heals");
        assert_eq!(outcome.messages, vec!["You consumed the healing potion, recovering 3 hp."]);
        assert!(world.player().inventory.get('a').is_none());
    }

    #[test]
    fn inert_items_echo_their_message() {
        let mut world = TestWorld::from_rows(&["@*"]);
        yank(&mut world, Position::new(1, 0), Some('2')).expect("yank");
        let error = world
            .execute(&UseItemAction {
                actor: EntityId::PLAYER,
                register: Some('2'),
            })
            .expect_err("gems do nothing");
        assert_eq!(error.to_string(), "It sparkles, but does nothing.");
    }
}
