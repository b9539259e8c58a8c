//! Fantasy football position types and normalization.

use crate::error::SleeperError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical player positions used by Sleeper NFL leagues.
///
/// Position strings coming from the player directory are free-form; anything
/// that does not normalize to one of the canonical codes maps to `Unknown`.
/// `Unknown` is never eligible for a roster slot, so a bad or missing position
/// fails closed rather than open.
///
/// # Examples
///
/// ```rust
/// use sleeper_ffl::Position;
///
/// assert_eq!(Position::normalize("rb"), Position::RB);
/// assert_eq!(Position::normalize("Strong Safety"), Position::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
    Unknown,
}

impl Position {
    /// Normalize a raw position string from the Sleeper player directory.
    ///
    /// Uppercases the name and replaces spaces with underscores before
    /// matching against the canonical set. Unmatched strings become
    /// `Unknown` rather than an error.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_uppercase().replace(' ', "_").as_str() {
            "QB" => Position::QB,
            "RB" => Position::RB,
            "WR" => Position::WR,
            "TE" => Position::TE,
            "K" => Position::K,
            "DEF" => Position::DEF,
            _ => Position::Unknown,
        }
    }

    /// The roster-slot code this position occupies.
    ///
    /// Slot matching is literal: a league's FLEX or SUPER_FLEX slot is not
    /// expanded to admit RB/WR/TE here. The Sleeper data never states the
    /// expansion rule, so flex slots only match a literal "FLEX" position,
    /// which no player has.
    pub fn slot_code(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "DEF",
            Position::Unknown => "UNKNOWN",
        }
    }

    /// True when the position is one of the canonical codes.
    pub fn is_known(&self) -> bool {
        !matches!(self, Position::Unknown)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slot_code())
    }
}

impl FromStr for Position {
    type Err = SleeperError;

    /// Strict parse for CLI arguments: unlike [`Position::normalize`], an
    /// unrecognized code is an error here so typos surface immediately.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Position::normalize(s) {
            Position::Unknown => Err(SleeperError::InvalidPosition {
                position: s.to_string(),
            }),
            pos => Ok(pos),
        }
    }
}
