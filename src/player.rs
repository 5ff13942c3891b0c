//! Per-player time state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Time left for one player, plus the Bronstein delay still owed to them on
/// the current move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerClock {
    remaining_ms: u64,
    pending_delay_ms: u64,
    delay_started: bool,
}

impl PlayerClock {
    #[must_use]
    pub const fn new(initial_ms: u64) -> Self {
        PlayerClock {
            remaining_ms: initial_ms,
            pending_delay_ms: 0,
            delay_started: false,
        }
    }

    /// Main clock time left.
    #[inline]
    #[must_use]
    pub const fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    /// Bronstein delay not yet consumed on the current move.
    #[inline]
    #[must_use]
    pub const fn pending_delay_ms(&self) -> u64 {
        self.pending_delay_ms
    }

    /// Whether the first tick of the current turn has seeded the delay.
    #[inline]
    #[must_use]
    pub const fn delay_started(&self) -> bool {
        self.delay_started
    }

    /// Remaining time including any pending delay.
    #[inline]
    #[must_use]
    pub const fn budget_ms(&self) -> u64 {
        self.remaining_ms.saturating_add(self.pending_delay_ms)
    }

    pub(crate) fn add_increment(&mut self, ms: u64) {
        self.remaining_ms = self.remaining_ms.saturating_add(ms);
    }

    /// Deduct elapsed time, clamped at zero.
    pub(crate) fn deduct(&mut self, ms: u64) {
        self.remaining_ms = self.remaining_ms.saturating_sub(ms);
    }

    pub(crate) fn set_pending_delay(&mut self, ms: u64) {
        self.pending_delay_ms = ms;
    }

    /// Start the turn's delay, or consume `ms` of it if already started.
    pub(crate) fn advance_delay(&mut self, delay_ms: u64, ms: u64) {
        if self.delay_started {
            self.pending_delay_ms = self.pending_delay_ms.saturating_sub(ms);
        } else {
            self.delay_started = true;
            self.pending_delay_ms = delay_ms;
        }
    }

    pub(crate) fn set_delay_started(&mut self, started: bool) {
        self.delay_started = started;
    }
}
