//! Sleeper Fantasy Football CLI Library
//!
//! A Rust library for the Sleeper fantasy football read-only API, providing
//! typed endpoint access, roster reconciliation, weekly scoring summaries,
//! and local player-directory storage.
//!
//! ## Features
//!
//! - **Typed API Client**: Users, leagues, rosters, matchups, brackets,
//!   transactions, drafts, and trending players as real structs
//! - **Trending Availability**: Reconcile the trending add/drop list against
//!   your leagues' rosters and slot configurations
//! - **Weekly Scoring**: Highest-scorer rankings with commissioner overrides
//!   honored
//! - **Player Directory Storage**: The ~5 MB player dump cached locally in
//!   SQLite and refreshed at most daily
//! - **Response Caching**: Two-tier (memory + disk) caching for league and
//!   trending responses
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sleeper_ffl::{SleeperClient, Season, UserId};
//!
//! # async fn example() -> sleeper_ffl::Result<()> {
//! let client = SleeperClient::new()?;
//! let user = client.get_user("sleeperuser").await?;
//! let leagues = client
//!     .get_leagues_for_user(&user.user_id, Season::default())
//!     .await?;
//! println!("{} is in {} leagues", user.display_name, leagues.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your Sleeper user ID to avoid passing it in every command:
//! ```bash
//! export SLEEPER_FFL_USER_ID=727977584134025216
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod sleeper;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{DraftId, LeagueId, PlayerId, Position, Season, TrendDirection, UserId, Week};
pub use error::{Result, SleeperError};
pub use sleeper::types::{League, Matchup, PlayerRecord, Roster, SleeperUser};
pub use sleeper::SleeperClient;

pub const USER_ID_ENV_VAR: &str = "SLEEPER_FFL_USER_ID";
