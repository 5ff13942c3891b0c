//! Outbound signals from the engine.

use super::state::ClockSnapshot;
use crate::types::Player;

/// Receives fire-and-forget notifications from the engine.
///
/// Implementations must not block; they run inside the engine's transition.
pub trait ClockListener {
    /// A player ran out of time. Fired once per game.
    fn out_of_time(&mut self, _player: Player) {}

    /// A reset was requested while the clocks were stopped. The engine does
    /// not reset on its own; the caller resets on confirmation.
    fn confirm_reset(&mut self) {}

    /// Called after every applied transition.
    fn render(&mut self, _snapshot: &ClockSnapshot) {}
}

/// Listener that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl ClockListener for Silent {}
