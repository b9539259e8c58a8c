//! Sleeper API integration: typed client, payload models, scoring math, and
//! roster reconciliation.

pub mod compute;
pub mod http;
pub mod reconcile;
pub mod types;

pub use compute::{exact_points, highest_scorer, top_scorers};
pub use http::SleeperClient;
pub use reconcile::{
    aggregate_rosters, filter_available, filter_eligible, reconcile_league, reconcile_leagues,
    AvailabilityReport, LeagueContext,
};
pub use types::{
    avatar_thumbnail_url, avatar_url, DirectoryPlayer, Draft, DraftPick, League, LeagueUser,
    Matchup, PlayerDirectory, PlayerRecord, PlayoffMatch, Roster, RosterSettings, SleeperUser,
    SportState, TradedPick, TrendEntry, Transaction,
};
