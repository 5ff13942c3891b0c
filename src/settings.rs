//! User preferences and their conversion to a [`TimeControl`].
//!
//! Preferences are stored the way a settings screen edits them: whole numbers
//! with a unit. The delay amount is kept even when no delay mode is selected,
//! so switching the mode back restores it; the conversion drops it in that case.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::control::{TimeControl, DEFAULT_SUBSECOND_THRESHOLD_SECS};
use crate::error::ConfigError;
use crate::types::DelayMode;

/// Unit for a preference value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeUnit {
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    #[must_use]
    pub const fn millis_per_unit(self) -> u64 {
        match self {
            TimeUnit::Hours => 60 * 60 * 1000,
            TimeUnit::Minutes => 60 * 1000,
            TimeUnit::Seconds => 1000,
        }
    }

    /// Convert `amount` of this unit to milliseconds.
    pub fn to_millis(self, amount: u64) -> Result<u64, ConfigError> {
        amount
            .checked_mul(self.millis_per_unit())
            .ok_or(ConfigError::TimeOverflow { amount, unit: self })
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TimeUnit::Hours => "hours",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Seconds => "seconds",
        })
    }
}

impl FromStr for TimeUnit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hours" | "hour" | "h" => Ok(TimeUnit::Hours),
            "minutes" | "minute" | "min" | "m" => Ok(TimeUnit::Minutes),
            "seconds" | "second" | "sec" | "s" => Ok(TimeUnit::Seconds),
            _ => Err(()),
        }
    }
}

/// Clock preferences as edited by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    pub initial_time: u64,
    pub initial_time_2: u64,
    /// Use `initial_time_2` for player two
    pub different_initial_time: bool,
    pub initial_unit: TimeUnit,
    pub delay_mode: DelayMode,
    pub delay_time: u64,
    pub delay_unit: TimeUnit,
    pub show_deciseconds: bool,
    pub decisecond_threshold_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            initial_time: 10,
            initial_time_2: 10,
            different_initial_time: false,
            initial_unit: TimeUnit::Minutes,
            delay_mode: DelayMode::None,
            delay_time: 0,
            delay_unit: TimeUnit::Seconds,
            show_deciseconds: true,
            decisecond_threshold_secs: DEFAULT_SUBSECOND_THRESHOLD_SECS,
        }
    }
}

impl Settings {
    /// Build the time control these preferences describe.
    pub fn to_time_control(&self) -> Result<TimeControl, ConfigError> {
        let initial_ms = self.initial_unit.to_millis(self.initial_time)?;
        let delay_ms = match self.delay_mode {
            DelayMode::None => 0,
            DelayMode::Fischer | DelayMode::Bronstein => {
                self.delay_unit.to_millis(self.delay_time)?
            }
        };

        let mut control = TimeControl::countdown(initial_ms)
            .with_delay(self.delay_mode, delay_ms)
            .with_subsecond(self.show_deciseconds, self.decisecond_threshold_secs);
        if self.different_initial_time {
            control = control.with_second_initial(self.initial_unit.to_millis(self.initial_time_2)?);
        }
        Ok(control)
    }
}
