//! Error types for clock configuration and state transitions.

use std::fmt;

use crate::engine::ClockState;
use crate::settings::TimeUnit;

/// Reasons a [`TimeControl`](crate::TimeControl) is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A delay amount was given without a delay mode
    DelayWithoutMode { delay_ms: u64 },
    /// Converting a preference value to milliseconds overflowed
    TimeOverflow { amount: u64, unit: TimeUnit },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DelayWithoutMode { delay_ms } => {
                write!(f, "Delay of {delay_ms} ms requires a Fischer or Bronstein delay mode")
            }
            ConfigError::TimeOverflow { amount, unit } => {
                write!(f, "{amount} {unit} does not fit in milliseconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Error type for clock engine operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// Configuration rejected; the previous configuration stays in effect
    InvalidConfiguration(ConfigError),
    /// Operation not legal in the current state; nothing was changed
    IllegalTransition {
        operation: &'static str,
        state: ClockState,
    },
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockError::InvalidConfiguration(e) => write!(f, "Invalid configuration: {e}"),
            ClockError::IllegalTransition { operation, state } => {
                write!(f, "Cannot {operation} while {state}")
            }
        }
    }
}

impl std::error::Error for ClockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClockError::InvalidConfiguration(e) => Some(e),
            ClockError::IllegalTransition { .. } => None,
        }
    }
}

impl From<ConfigError> for ClockError {
    fn from(e: ConfigError) -> Self {
        ClockError::InvalidConfiguration(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_delay_without_mode_mentions_amount() {
        let err = ConfigError::DelayWithoutMode { delay_ms: 3000 };
        assert!(err.to_string().contains("3000"));
    }

    #[test]
    fn test_overflow_mentions_unit() {
        let err = ConfigError::TimeOverflow {
            amount: u64::MAX,
            unit: TimeUnit::Hours,
        };
        assert!(err.to_string().contains("hours"));
    }

    #[test]
    fn test_illegal_transition_names_operation_and_state() {
        let err = ClockError::IllegalTransition {
            operation: "resume",
            state: ClockState::Running(Player::Two),
        };
        let msg = err.to_string();
        assert!(msg.contains("resume"));
        assert!(msg.contains("running"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: ClockError = ConfigError::DelayWithoutMode { delay_ms: 1 }.into();
        assert!(matches!(err, ClockError::InvalidConfiguration(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
