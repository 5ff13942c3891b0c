//! Player and delay-mode types.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two sides of the clock.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players in index order (One=0, Two=1)
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Returns the other player
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// One-based number as printed on the clock face.
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    #[must_use]
    pub const fn from_number(n: u8) -> Option<Player> {
        match n {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl FromStr for Player {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Player::from_number)
            .ok_or(())
    }
}

/// How time is credited or deferred on each move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DelayMode {
    /// Plain countdown
    #[default]
    None,
    /// Bonus added to the mover's clock when the move is completed
    Fischer,
    /// Grace period consumed before the main clock starts running
    Bronstein,
}

impl DelayMode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DelayMode::None => "None",
            DelayMode::Fischer => "Fischer",
            DelayMode::Bronstein => "Bronstein",
        }
    }
}

impl fmt::Display for DelayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DelayMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(DelayMode::None),
            "fischer" => Ok(DelayMode::Fischer),
            "bronstein" => Ok(DelayMode::Bronstein),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_involution() {
        for p in Player::BOTH {
            assert_ne!(p, p.opponent());
            assert_eq!(p, p.opponent().opponent());
        }
    }

    #[test]
    fn player_parses_from_number() {
        assert_eq!("1".parse::<Player>(), Ok(Player::One));
        assert_eq!(" 2 ".parse::<Player>(), Ok(Player::Two));
        assert!("3".parse::<Player>().is_err());
        assert!("white".parse::<Player>().is_err());
    }

    #[test]
    fn delay_mode_parse_is_case_insensitive() {
        assert_eq!("FISCHER".parse::<DelayMode>(), Ok(DelayMode::Fischer));
        assert_eq!("bronstein".parse::<DelayMode>(), Ok(DelayMode::Bronstein));
        assert_eq!("None".parse::<DelayMode>(), Ok(DelayMode::None));
        assert!("hourglass".parse::<DelayMode>().is_err());
    }
}
