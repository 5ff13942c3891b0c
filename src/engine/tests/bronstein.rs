//! Bronstein delay.

use super::{engine, running};
use crate::control::TimeControl;
use crate::engine::TICK_LENGTH_MS;
use crate::types::Player;

fn delayed() -> TimeControl {
    TimeControl::bronstein(60_000, 3_000)
}

#[test]
fn test_opponent_delay_shown_before_first_tick() {
    let mut engine = engine(delayed());
    assert_eq!(engine.snapshot().player_one, "1:00");

    engine.player_moved(Player::Two);
    let snap = engine.snapshot();
    assert_eq!(snap.player_one, "1:00 +3.0");
    assert_eq!(snap.player_two, "1:00");
    assert_eq!(engine.clock(Player::One).pending_delay_ms(), 3_000);
    assert!(!engine.is_turn_delayed());
}

#[test]
fn test_delay_absorbs_first_ticks() {
    let mut engine = running(delayed(), Player::One);

    engine.advance(TICK_LENGTH_MS);
    assert!(engine.is_turn_delayed());
    assert_eq!(engine.clock(Player::One).pending_delay_ms(), 3_000);
    assert_eq!(engine.clock(Player::One).remaining_ms(), 60_000);

    // Thirty ticks in total are absorbed: exactly the delay amount
    engine.advance(2_900);
    assert_eq!(engine.clock(Player::One).pending_delay_ms(), 100);
    assert_eq!(engine.clock(Player::One).remaining_ms(), 60_000);

    engine.advance(TICK_LENGTH_MS);
    assert_eq!(engine.clock(Player::One).pending_delay_ms(), 0);
    assert_eq!(engine.clock(Player::One).remaining_ms(), 59_900);
}

#[test]
fn test_only_uncompensated_time_is_charged() {
    let mut engine = running(delayed(), Player::One);
    engine.advance(5_000);
    engine.player_moved(Player::One);

    let one = engine.clock(Player::One);
    assert_eq!(one.pending_delay_ms(), 0);
    assert_eq!(one.budget_ms(), 60_000 - 2_000);
    assert_eq!(engine.clock(Player::Two).pending_delay_ms(), 3_000);
}

#[test]
fn test_fast_move_costs_nothing() {
    let mut engine = running(delayed(), Player::One);
    engine.advance(2_000);
    engine.player_moved(Player::One);
    assert_eq!(engine.clock(Player::One).remaining_ms(), 60_000);
    assert_eq!(engine.snapshot().player_one, "1:00");
}

#[test]
fn test_out_of_time_counts_pending_delay() {
    let mut engine = running(TimeControl::bronstein(1_000, 500), Player::One);
    engine.advance(1_499);
    assert!(!engine.is_time_up());
    engine.advance(1);
    assert!(engine.is_time_up());
    assert_eq!(engine.clock(Player::One).budget_ms(), 0);
}

#[test]
fn test_empty_clock_survives_during_delay() {
    let mut engine = running(TimeControl::bronstein(0, 500), Player::One);
    engine.advance(500);
    assert!(!engine.is_time_up());
    assert_eq!(engine.clock(Player::One).remaining_ms(), 0);
    assert_eq!(engine.clock(Player::One).pending_delay_ms(), 100);

    engine.advance(100);
    assert!(engine.is_time_up());
}

#[test]
fn test_pause_keeps_partial_delay() {
    let mut engine = running(delayed(), Player::One);
    engine.advance(1_000);
    let before = *engine.clock(Player::One);
    assert_eq!(before.pending_delay_ms(), 2_100);

    engine.pause().unwrap();
    engine.advance(10_000);
    assert_eq!(*engine.clock(Player::One), before);

    engine.resume(Player::One).unwrap();
    assert!(engine.is_turn_delayed());
    assert_eq!(engine.clock(Player::One).pending_delay_ms(), 2_100);

    // Delay continues from where it stopped instead of being replayed
    engine.advance(TICK_LENGTH_MS);
    assert_eq!(engine.clock(Player::One).pending_delay_ms(), 2_000);
    assert_eq!(engine.clock(Player::One).remaining_ms(), 60_000);
}

#[test]
fn test_resume_other_player_starts_fresh_delay() {
    let mut engine = running(delayed(), Player::One);
    engine.advance(1_000);
    engine.pause().unwrap();

    engine.resume(Player::Two).unwrap();
    assert_eq!(engine.active_player(), Some(Player::Two));
    assert_eq!(engine.clock(Player::One).pending_delay_ms(), 0);
    assert!(!engine.clock(Player::One).delay_started());
    assert_eq!(engine.clock(Player::Two).pending_delay_ms(), 3_000);
    assert!(!engine.is_turn_delayed());
}

#[test]
fn test_each_turn_gets_a_new_delay() {
    let mut engine = running(delayed(), Player::One);
    engine.advance(4_000);
    engine.player_moved(Player::One);
    engine.advance(4_000);
    engine.player_moved(Player::Two);

    assert_eq!(engine.clock(Player::One).pending_delay_ms(), 3_000);
    assert!(!engine.is_turn_delayed());
    engine.advance(3_000);
    assert_eq!(engine.clock(Player::One).remaining_ms(), 59_000);
    assert_eq!(engine.clock(Player::Two).remaining_ms(), 59_000);
}
