//! Engine tests.
//!
//! - `countdown.rs` - Plain countdown, stale ticks, time-up
//! - `fischer.rs` - Increment on move completion
//! - `bronstein.rs` - Delay absorption and pause/resume of a delayed turn
//! - `transitions.rs` - Pause, resume, reset and reconfiguration
//! - `proptest.rs` - Property-based tests

mod bronstein;

use super::{ClockEngine, ClockListener, ClockSnapshot};
use crate::control::TimeControl;
use crate::timer::TimerQueue;
use crate::types::Player;

/// Listener that records every signal.
#[derive(Debug, Default)]
pub(super) struct Recorder {
    pub flags: Vec<Player>,
    pub reset_requests: usize,
    pub renders: Vec<ClockSnapshot>,
}

impl ClockListener for Recorder {
    fn out_of_time(&mut self, player: Player) {
        self.flags.push(player);
    }

    fn confirm_reset(&mut self) {
        self.reset_requests += 1;
    }

    fn render(&mut self, snapshot: &ClockSnapshot) {
        self.renders.push(snapshot.clone());
    }
}

pub(super) type TestEngine = ClockEngine<TimerQueue, Recorder>;

pub(super) fn engine(control: TimeControl) -> TestEngine {
    ClockEngine::with_parts(control, TimerQueue::new(), Recorder::default()).unwrap()
}

/// Engine with `player`'s clock running from time zero.
pub(super) fn running(control: TimeControl, player: Player) -> TestEngine {
    let mut engine = engine(control);
    assert!(engine.player_moved(player.opponent()));
    engine
}
