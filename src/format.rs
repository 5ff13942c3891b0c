//! Clock face formatting.

use crate::control::TimeControl;

const MS_PER_DECISECOND: u64 = 100;
const MS_PER_SECOND: u64 = 1000;
const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * 60;

/// Renders millisecond values the way the clock face shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeFormatter {
    show_subsecond: bool,
    subsecond_threshold_secs: u64,
}

impl TimeFormatter {
    #[must_use]
    pub const fn new(show_subsecond: bool, subsecond_threshold_secs: u64) -> Self {
        TimeFormatter {
            show_subsecond,
            subsecond_threshold_secs,
        }
    }

    #[must_use]
    pub const fn from_control(control: &TimeControl) -> Self {
        Self::new(control.show_subsecond, control.subsecond_threshold_secs)
    }

    /// Format `ms` for display.
    ///
    /// Without subsecond display the value is rounded *up* to a whole second,
    /// so a clock with time left never reads zero. `compact` drops the leading
    /// `0:` below one minute; it is used for the delay annotation.
    #[must_use]
    pub fn format(&self, ms: u64, compact: bool) -> String {
        let ms = if self.show_subsecond {
            ms
        } else {
            ms.div_ceil(MS_PER_SECOND).saturating_mul(MS_PER_SECOND)
        };

        let deciseconds = (ms / MS_PER_DECISECOND) % 10;
        let total_secs = ms / MS_PER_SECOND;
        let seconds = total_secs % SECS_PER_MINUTE;
        let minutes = (total_secs / SECS_PER_MINUTE) % 60;
        let hours = total_secs / SECS_PER_HOUR;

        if hours > 0 {
            format!("{hours}:{minutes:02}:{seconds:02}")
        } else if minutes > 0 {
            format!("{minutes}:{seconds:02}")
        } else if self.show_subsecond && seconds < self.subsecond_threshold_secs {
            if compact {
                format!("{seconds}.{deciseconds}")
            } else {
                format!("0:{seconds:02}.{deciseconds}")
            }
        } else if compact {
            format!("{seconds}")
        } else {
            format!("0:{seconds:02}")
        }
    }

    /// Format a full clock face: the remaining time plus a `+D` annotation
    /// while a Bronstein delay is pending.
    #[must_use]
    pub fn format_clock(&self, remaining_ms: u64, pending_delay_ms: u64) -> String {
        let main = self.format(remaining_ms, false);
        if pending_delay_ms > 0 {
            format!("{main} +{}", self.format(pending_delay_ms, true))
        } else {
            main
        }
    }
}

impl Default for TimeFormatter {
    fn default() -> Self {
        Self::from_control(&TimeControl::default())
    }
}
