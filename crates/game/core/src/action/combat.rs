//! Deterministic melee resolution.

use tracing::debug;

use super::ActionError;
use crate::state::{EntityId, GameState};

/// Result of one melee exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeleeReport {
    pub target: EntityId,
    pub damage: u32,
    pub killed: bool,
    pub messages: Vec<String>,
}

/// Damage dealt by a hit of `strength` against `armor`.
///
/// Armor halves damage below its value and cancels damage below a quarter of it.
pub fn melee_damage(strength: u32, armor: u32) -> u32 {
    if strength < armor / 4 {
        0
    } else if strength < armor {
        strength / 2
    } else {
        strength
    }
}

/// `attacker` hits `target` once. Killed actors stay in place as corpses.
pub fn melee(
    state: &mut GameState,
    attacker: EntityId,
    target: EntityId,
) -> Result<MeleeReport, ActionError> {
    let attacker_state = state
        .entities
        .actor(attacker)
        .ok_or(ActionError::ActorNotFound(attacker))?;
    let strength = attacker_state.stats.strength;
    let attacker_name = attacker_state.name.clone();

    let target_state = state
        .entities
        .actor_mut(target)
        .ok_or(ActionError::ActorNotFound(target))?;
    let damage = melee_damage(strength, target_state.stats.armor);
    target_state.stats.hp.drain(damage);
    let killed = !target_state.is_alive();

    let mut messages = Vec::with_capacity(2);
    if damage == 0 {
        messages.push(format!(
            "{attacker_name} hit {} but did no damage.",
            target_state.name
        ));
    } else {
        messages.push(format!(
            "{attacker_name} attacked {} ({damage} hp).",
            target_state.name
        ));
    }
    if killed {
        messages.push(format!("{} dies!", target_state.name));
    }

    debug!(
        target: "vimrogue::combat",
        %attacker,
        %target,
        damage,
        killed,
        "melee"
    );

    Ok(MeleeReport {
        target,
        damage,
        killed,
        messages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ActorState, ActorStats, Faction, Position};

    #[test]
    fn armor_halves_then_cancels() {
        assert_eq!(melee_damage(5, 0), 5);
        assert_eq!(melee_damage(5, 5), 5);
        assert_eq!(melee_damage(5, 8), 2);
        assert_eq!(melee_damage(1, 8), 0);
        assert_eq!(melee_damage(2, 8), 1);
    }

    #[test]
    fn lethal_hit_leaves_a_corpse() {
        let player = ActorState::new(EntityId::PLAYER, "you", '@', Position::ORIGIN)
            .with_stats(ActorStats::new(20, 5, 0));
        let mut state = GameState::new(player);
        let rat = state.spawn_npc(
            ActorState::new(EntityId(0), "rat", 'r', Position::new(1, 0))
                .with_stats(ActorStats::new(4, 1, 0))
                .with_faction(Faction::Hostile),
        );

        let report = melee(&mut state, EntityId::PLAYER, rat).expect("both actors exist");
        assert!(report.killed);
        assert_eq!(report.messages, vec!["you attacked rat (5 hp).", "rat dies!"]);
        assert!(state.entities.living_actor_at(Position::new(1, 0)).is_none());
        assert!(state.entities.corpse_at(Position::new(1, 0)).is_some());
    }
}
