//! Trending-direction type for Sleeper CLI commands.

use std::fmt;

/// Which trending list to pull from the Sleeper API.
///
/// Sleeper tracks adds and drops over a sliding lookback window; the
/// direction becomes a path segment in the trending endpoint URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum TrendDirection {
    /// Players frequently added in the lookback window
    Add,
    /// Players frequently dropped in the lookback window
    Drop,
}

impl TrendDirection {
    /// URL path segment expected by `/players/nfl/trending/<type>`.
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            TrendDirection::Add => "add",
            TrendDirection::Drop => "drop",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_path_segment())
    }
}
