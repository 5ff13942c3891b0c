//! Engine state and render snapshots.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::Player;

/// Where the game is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClockState {
    /// Freshly configured, no clock has started
    #[default]
    Idle,
    /// The player's clock is counting down
    Running(Player),
    /// Stopped mid-turn; the player resumes on their own turn
    Paused(Player),
    /// The player ran out of time. Terminal until reset.
    TimeUp(Player),
}

impl ClockState {
    /// The player whose clock is counting down, if any.
    #[inline]
    #[must_use]
    pub const fn active_player(self) -> Option<Player> {
        match self {
            ClockState::Running(p) => Some(p),
            _ => None,
        }
    }

    /// The player who was on turn before the last pause.
    #[inline]
    #[must_use]
    pub const fn saved_player(self) -> Option<Player> {
        match self {
            ClockState::Paused(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_time_up(self) -> bool {
        matches!(self, ClockState::TimeUp(_))
    }

    /// Player on turn, whether running or paused.
    #[must_use]
    pub(crate) const fn turn_holder(self) -> Option<Player> {
        match self {
            ClockState::Running(p) | ClockState::Paused(p) => Some(p),
            _ => None,
        }
    }
}

impl fmt::Display for ClockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockState::Idle => write!(f, "idle"),
            ClockState::Running(p) => write!(f, "running for player {p}"),
            ClockState::Paused(p) => write!(f, "paused on player {p}"),
            ClockState::TimeUp(p) => write!(f, "time up for player {p}"),
        }
    }
}

/// Everything a clock face needs after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockSnapshot {
    pub player_one: String,
    pub player_two: String,
    pub active: Option<Player>,
    pub time_up: bool,
    pub state: ClockState,
}

impl ClockSnapshot {
    #[must_use]
    pub fn display(&self, player: Player) -> &str {
        match player {
            Player::One => &self.player_one,
            Player::Two => &self.player_two,
        }
    }
}

impl fmt::Display for ClockSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clock {} | {} active ", self.player_one, self.player_two)?;
        match self.active {
            Some(p) => write!(f, "{p}")?,
            None => write!(f, "-")?,
        }
        if self.time_up {
            write!(f, " timeup")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_running_has_active_player() {
        assert_eq!(ClockState::Idle.active_player(), None);
        assert_eq!(ClockState::Running(Player::Two).active_player(), Some(Player::Two));
        assert_eq!(ClockState::Paused(Player::Two).active_player(), None);
        assert_eq!(ClockState::TimeUp(Player::Two).active_player(), None);
    }

    #[test]
    fn paused_remembers_player() {
        assert_eq!(ClockState::Paused(Player::One).saved_player(), Some(Player::One));
        assert_eq!(ClockState::Running(Player::One).saved_player(), None);
    }

    #[test]
    fn snapshot_line_format() {
        let snap = ClockSnapshot {
            player_one: "0:00.0".to_string(),
            player_two: "4:59".to_string(),
            active: None,
            time_up: true,
            state: ClockState::TimeUp(Player::One),
        };
        assert_eq!(snap.to_string(), "clock 0:00.0 | 4:59 active - timeup");
        assert_eq!(snap.display(Player::Two), "4:59");
    }
}
