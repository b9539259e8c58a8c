//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::{LeagueId, Season, TrendDirection, UserId, Week};

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Look a user up by id or username and list their leagues for a season
    UserData {
        /// Sleeper user id or username
        user: String,

        /// Season year (e.g. 2026).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Force refresh from Sleeper, overwriting the cache.
        #[clap(long)]
        refresh: bool,
    },

    /// Show a league's configuration and standings
    LeagueData {
        /// League ID.
        #[clap(long, short)]
        league_id: LeagueId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Force refresh from Sleeper, overwriting the cache.
        #[clap(long)]
        refresh: bool,

        /// Print cache status while loading.
        #[clap(long)]
        verbose: bool,
    },

    /// Find trending players who are unrostered and startable in your leagues.
    ///
    /// Pulls the trending add/drop list, removes players already rostered in
    /// each league, and keeps only positions the league's slots can start.
    TrendingAvailability {
        /// User ID (or set `SLEEPER_FFL_USER_ID` env var).
        #[clap(long, short)]
        user_id: Option<UserId>,

        /// Season year (e.g. 2026).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Trending list to use: add or drop.
        #[clap(long, short, value_enum, default_value_t = TrendDirection::Add)]
        direction: TrendDirection,

        /// Trending lookback window in hours.
        #[clap(long, default_value_t = 24)]
        lookback_hours: u32,

        /// How many trending players to consider.
        #[clap(long, default_value_t = 25)]
        limit: u32,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Force refresh from Sleeper, overwriting the cache.
        #[clap(long)]
        refresh: bool,

        /// Print progress while reconciling.
        #[clap(long)]
        verbose: bool,
    },

    /// Rank a week's matchup entries by points scored
    HighestScorers {
        /// League ID.
        #[clap(long, short)]
        league_id: LeagueId,

        /// Week number.
        #[clap(long, short, default_value_t = Week::default())]
        week: Week,

        /// How many teams to show.
        #[clap(long, default_value_t = 3)]
        depth: usize,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Force refresh from Sleeper, overwriting the cache.
        #[clap(long)]
        refresh: bool,
    },

    /// Refresh the local player directory from the full Sleeper dump
    UpdatePlayers {
        /// Refresh even if the stored directory is less than a day old.
        #[clap(long)]
        force: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "sleeper-ffl", about = "Sleeper Fantasy Football CLI")]
pub struct Sleeper {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from the Sleeper API
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
