//! Time control configuration.
//!
//! A [`TimeControl`] is fixed for the duration of a game: starting time for
//! each player, the delay scheme and its amount, and the display preferences
//! used when rendering the clocks.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{DelayMode, Player};

/// Deciseconds are shown below this many whole seconds unless overridden
pub const DEFAULT_SUBSECOND_THRESHOLD_SECS: u64 = 10;

/// Default starting time per player (10 minutes)
pub const DEFAULT_INITIAL_MS: u64 = 10 * 60 * 1000;

/// Immutable per-game clock configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeControl {
    /// Delay scheme applied on every move
    pub delay_mode: DelayMode,
    /// Fischer bonus or Bronstein delay, in milliseconds
    pub delay_ms: u64,
    /// Starting time for player one (and player two unless overridden)
    pub initial_ms: u64,
    /// Starting time for player two when the start is asymmetric
    pub second_initial_ms: Option<u64>,
    /// Render deciseconds for short remaining times
    pub show_subsecond: bool,
    /// Deciseconds are only rendered below this many whole seconds
    pub subsecond_threshold_secs: u64,
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::countdown(DEFAULT_INITIAL_MS)
    }
}

impl TimeControl {
    /// Plain countdown with the same starting time for both players.
    #[must_use]
    pub const fn countdown(initial_ms: u64) -> Self {
        TimeControl {
            delay_mode: DelayMode::None,
            delay_ms: 0,
            initial_ms,
            second_initial_ms: None,
            show_subsecond: true,
            subsecond_threshold_secs: DEFAULT_SUBSECOND_THRESHOLD_SECS,
        }
    }

    /// Countdown with a Fischer increment of `increment_ms` per completed move.
    #[must_use]
    pub const fn fischer(initial_ms: u64, increment_ms: u64) -> Self {
        Self::countdown(initial_ms).with_delay(DelayMode::Fischer, increment_ms)
    }

    /// Countdown with a Bronstein delay of `delay_ms` per move.
    #[must_use]
    pub const fn bronstein(initial_ms: u64, delay_ms: u64) -> Self {
        Self::countdown(initial_ms).with_delay(DelayMode::Bronstein, delay_ms)
    }

    #[must_use]
    pub const fn with_delay(mut self, mode: DelayMode, delay_ms: u64) -> Self {
        self.delay_mode = mode;
        self.delay_ms = delay_ms;
        self
    }

    /// Give player two a different starting time.
    #[must_use]
    pub const fn with_second_initial(mut self, initial_ms: u64) -> Self {
        self.second_initial_ms = Some(initial_ms);
        self
    }

    #[must_use]
    pub const fn with_subsecond(mut self, show: bool, threshold_secs: u64) -> Self {
        self.show_subsecond = show;
        self.subsecond_threshold_secs = threshold_secs;
        self
    }

    /// Starting time for `player`.
    #[inline]
    #[must_use]
    pub fn initial_ms(&self, player: Player) -> u64 {
        match (player, self.second_initial_ms) {
            (Player::Two, Some(ms)) => ms,
            _ => self.initial_ms,
        }
    }

    /// Bronstein delay granted per move, zero for other modes.
    #[inline]
    #[must_use]
    pub fn bronstein_delay_ms(&self) -> u64 {
        if self.delay_mode == DelayMode::Bronstein {
            self.delay_ms
        } else {
            0
        }
    }

    /// Check the configuration invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.delay_mode == DelayMode::None && self.delay_ms != 0 {
            return Err(ConfigError::DelayWithoutMode {
                delay_ms: self.delay_ms,
            });
        }
        Ok(())
    }

    /// True if switching from `self` to `other` changes clock values, not just
    /// how they are displayed.
    #[must_use]
    pub fn affects_clocks(&self, other: &TimeControl) -> bool {
        self.delay_mode != other.delay_mode
            || self.delay_ms != other.delay_ms
            || Player::BOTH
                .iter()
                .any(|&p| self.initial_ms(p) != other.initial_ms(p))
    }
}
