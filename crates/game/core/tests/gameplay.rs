//! End-to-end scenario: fight, loot, heal and reorganize registers.
//!
//! 1. The player deletes towards a goblin twice and kills it, staying put
//! 2. The player steps onto the corpse and yanks the potion behind it
//! 3. Using it restores health without costing a turn
//! 4. `:swap` moves it out of the equipped registers
//! 5. `:q` only signals the client

mod common;

use common::Harness;
use vimrogue_core::{GameError, Position, Signal};

#[test]
fn fight_loot_heal_and_swap() {
    let mut harness = Harness::new(&["@.g!."]);

    let first = harness.play("2dl").expect("first strike");
    assert_eq!(first.messages, vec!["you attacked goblin (3 hp).".to_owned()]);
    assert_eq!(harness.position(), Position::new(1, 0));

    let second = harness.play("dl").expect("second strike");
    assert_eq!(
        second.messages,
        vec![
            "you attacked goblin (3 hp).".to_owned(),
            "goblin dies!".to_owned()
        ]
    );
    assert_eq!(harness.position(), Position::new(1, 0));
    let goblin = harness
        .state
        .entities
        .npcs
        .iter()
        .find(|npc| npc.name == "goblin")
        .expect("corpse stays on the map");
    assert!(!goblin.is_alive());
    assert!(harness.state.entities.living_actor_at(Position::new(2, 0)).is_none());

    harness.play("l").expect("step onto the corpse");
    assert_eq!(harness.position(), Position::new(2, 0));

    let loot = harness.play("yl").expect("yank");
    assert_eq!(
        loot.messages,
        vec!["You yanked the healing potion into \"1.".to_owned()]
    );
    assert_eq!(harness.position(), Position::new(2, 0));
    assert_eq!(harness.state.turn.clock, 4);

    harness.state.entities.player.stats.hp.drain(4);
    let heal = harness.play("@1").expect("drink");
    assert_eq!(
        heal.messages,
        vec!["You consumed the healing potion, recovering 4 hp.".to_owned()]
    );
    assert!(harness.state.player().stats.hp.is_full());
    assert_eq!(harness.state.turn.clock, 4);
}

#[test]
fn colon_lines_bind_like_keystrokes() {
    let mut harness = Harness::new(&["@!.."]);
    harness.play("yl").expect("yank");

    let player = harness.state.player().clone();
    let swap = harness
        .session
        .colon_command(":swap 1 a", &player)
        .expect("valid swap line");
    assert!(swap.consumes_turn());
    let action = harness.bind(swap);
    harness.execute(&action).expect("swap");
    let inventory = &harness.state.player().inventory;
    assert!(inventory.get('1').is_none());
    assert!(inventory.get('a').is_some());
    assert_eq!(harness.state.turn.clock, 2);

    let quit = harness
        .session
        .colon_command(":q", &player)
        .expect("valid quit line");
    let action = harness.bind(quit);
    let outcome = harness.execute(&action).expect("quit");
    assert_eq!(outcome.signal, Some(Signal::Quit { force: false }));
    assert_eq!(harness.state.turn.clock, 2);
}

#[test]
fn impossible_actions_are_recoverable_notices() {
    let mut harness = Harness::new(&["@..."]);
    let error = harness.play("p").expect_err("empty inventory");
    assert!(error.is_impossible());
    assert!(error.severity().is_recoverable());
    assert_eq!(harness.state.turn.clock, 0);
    assert_eq!(harness.state.turn.action_nonce, 0);

    let player = harness.state.player().clone();
    let unknown = harness
        .session
        .colon_command(":frobnicate", &player)
        .expect_err("unknown line");
    assert_eq!(unknown.severity().as_str(), "validation");
}
