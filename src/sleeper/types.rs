//! Typed models for Sleeper API payloads.
//!
//! One canonical struct per entity. Required fields are plain; everything the
//! API is known to omit or null is an `Option`. Deserialization is the single
//! validating constructor: a missing required field fails with serde's
//! field-name error instead of silently defaulting.

use crate::cli::types::{DraftId, LeagueId, PlayerId, Position, UserId, Week};
use crate::sleeper::compute::exact_points;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};


/// CDN base for user and league avatar images.
pub const AVATAR_BASE_URL: &str = "https://sleepercdn.com/avatars";

/// Full-size avatar URL for an avatar ID.
pub fn avatar_url(avatar_id: &str) -> String {
    format!("{AVATAR_BASE_URL}/{avatar_id}")
}

/// Thumbnail avatar URL for an avatar ID.
pub fn avatar_thumbnail_url(avatar_id: &str) -> String {
    format!("{AVATAR_BASE_URL}/thumbs/{avatar_id}")
}

/// A Sleeper user, from `/user/<id-or-username>`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SleeperUser {
    pub user_id: UserId,
    pub display_name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub is_bot: Option<bool>,
}

impl SleeperUser {
    pub fn avatar_url(&self) -> Option<String> {
        self.avatar.as_deref().map(avatar_url)
    }

    pub fn avatar_thumbnail_url(&self) -> Option<String> {
        self.avatar.as_deref().map(avatar_thumbnail_url)
    }
}

/// A league, from `/user/<id>/leagues/nfl/<season>` or `/league/<id>`.
///
/// `roster_positions` is the ordered slot configuration; duplicates are
/// meaningful (two "RB" entries mean two RB slots).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct League {
    pub league_id: LeagueId,
    pub name: String,
    pub roster_positions: Vec<String>,
    pub season: String,
    pub status: String,
    pub total_rosters: u32,
    #[serde(default)]
    pub sport: Option<String>,
    #[serde(default)]
    pub season_type: Option<String>,
    #[serde(default)]
    pub previous_league_id: Option<LeagueId>,
    #[serde(default)]
    pub draft_id: Option<DraftId>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl League {
    pub fn avatar_url(&self) -> Option<String> {
        self.avatar.as_deref().map(avatar_url)
    }
}

/// A roster inside a league, from `/league/<id>/rosters`.
///
/// `players` is the full holding (starters + bench + reserve). Sleeper sends
/// null for empty rosters, so the field is optional end to end.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Roster {
    pub roster_id: u32,
    #[serde(default)]
    pub owner_id: Option<UserId>,
    #[serde(default)]
    pub league_id: Option<LeagueId>,
    #[serde(default)]
    pub players: Option<Vec<PlayerId>>,
    #[serde(default)]
    pub starters: Option<Vec<PlayerId>>,
    #[serde(default)]
    pub reserve: Option<Vec<PlayerId>>,
    #[serde(default)]
    pub taxi: Option<Vec<PlayerId>>,
    #[serde(default)]
    pub co_owners: Option<Vec<UserId>>,
    #[serde(default)]
    pub settings: Option<RosterSettings>,
}

impl Roster {
    /// All rostered player ids, treating a missing or null `players` field as
    /// an empty holding.
    pub fn player_ids(&self) -> &[PlayerId] {
        self.players.as_deref().unwrap_or(&[])
    }
}

/// Season record and scoring totals for a roster.
///
/// Fantasy points arrive split into an integer part and a decimal part
/// (`fpts` = 1617, `fpts_decimal` = 78 means 1617.78).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RosterSettings {
    #[serde(default)]
    pub wins: u16,
    #[serde(default)]
    pub losses: u16,
    #[serde(default)]
    pub ties: u16,
    #[serde(default)]
    pub fpts: Option<i64>,
    #[serde(default)]
    pub fpts_decimal: Option<i64>,
    #[serde(default)]
    pub fpts_against: Option<i64>,
    #[serde(default)]
    pub fpts_against_decimal: Option<i64>,
    #[serde(default)]
    pub waiver_position: Option<u32>,
    #[serde(default)]
    pub waiver_budget_used: Option<u32>,
    #[serde(default)]
    pub total_moves: Option<u32>,
}

impl RosterSettings {
    /// Total fantasy points scored this season.
    pub fn fantasy_points_scored(&self) -> Option<f64> {
        self.fpts
            .map(|whole| exact_points(whole, self.fpts_decimal.unwrap_or(0)))
    }

    /// Total fantasy points scored against this roster.
    pub fn fantasy_points_allowed(&self) -> Option<f64> {
        self.fpts_against
            .map(|whole| exact_points(whole, self.fpts_against_decimal.unwrap_or(0)))
    }
}

/// A league member, from `/league/<id>/users`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueUser {
    pub user_id: UserId,
    pub display_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub is_owner: Option<bool>,
    #[serde(default)]
    pub metadata: Option<LeagueUserMetadata>,
}

/// Per-league user metadata; usually just the custom team name.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LeagueUserMetadata {
    #[serde(default)]
    pub team_name: Option<String>,
}

/// One team's side of a weekly matchup, from `/league/<id>/matchups/<week>`.
///
/// The two entries sharing a `matchup_id` play each other; bench players are
/// `players` minus `starters`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Matchup {
    pub roster_id: u32,
    #[serde(default)]
    pub matchup_id: Option<u32>,
    #[serde(default)]
    pub points: f64,
    #[serde(default)]
    pub custom_points: Option<f64>,
    #[serde(default)]
    pub players: Option<Vec<PlayerId>>,
    #[serde(default)]
    pub starters: Option<Vec<PlayerId>>,
    #[serde(default)]
    pub players_points: Option<BTreeMap<String, f64>>,
}

impl Matchup {
    /// Points that count for the week: a commissioner override beats the
    /// computed total.
    pub fn effective_points(&self) -> f64 {
        self.custom_points.unwrap_or(self.points)
    }
}

/// Where a playoff bracket slot's team comes from (winner or loser of an
/// earlier match).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BracketSource {
    #[serde(default)]
    pub w: Option<u32>,
    #[serde(default)]
    pub l: Option<u32>,
}

/// One row of a playoff bracket, from `/league/<id>/{winners,losers}_bracket`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayoffMatch {
    /// Playoff round (1-based).
    pub r: u16,
    /// Match id, unique within the bracket.
    pub m: u32,
    #[serde(default)]
    pub t1: Option<u32>,
    #[serde(default)]
    pub t2: Option<u32>,
    #[serde(default)]
    pub t1_from: Option<BracketSource>,
    #[serde(default)]
    pub t2_from: Option<BracketSource>,
    #[serde(default)]
    pub w: Option<u32>,
    #[serde(default)]
    pub l: Option<u32>,
    /// Final placement decided by this match, when present.
    #[serde(default)]
    pub p: Option<u16>,
}

/// A waiver-budget transfer attached to a trade.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WaiverBudgetTransfer {
    pub sender: u32,
    pub receiver: u32,
    pub amount: u32,
}

/// Settings blob on waiver transactions (`{"waiver_bid": 44}` for FAAB).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TransactionSettings {
    #[serde(default)]
    pub waiver_bid: Option<u32>,
}

/// A league transaction, from `/league/<id>/transactions/<round>`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub transaction_id: String,
    pub status: String,
    #[serde(default)]
    pub status_updated: Option<i64>,
    #[serde(default)]
    pub created: Option<i64>,
    #[serde(default)]
    pub creator: Option<UserId>,
    #[serde(default)]
    pub leg: Option<u16>,
    #[serde(default)]
    pub roster_ids: Option<Vec<u32>>,
    #[serde(default)]
    pub consenter_ids: Option<Vec<u32>>,
    /// player_id -> receiving roster_id
    #[serde(default)]
    pub adds: Option<BTreeMap<String, u32>>,
    /// player_id -> dropping roster_id
    #[serde(default)]
    pub drops: Option<BTreeMap<String, u32>>,
    #[serde(default)]
    pub draft_picks: Vec<TradedPick>,
    #[serde(default)]
    pub waiver_budget: Vec<WaiverBudgetTransfer>,
    #[serde(default)]
    pub settings: Option<TransactionSettings>,
}

/// A traded draft pick, from `/league/<id>/traded_picks` or
/// `/draft/<id>/traded_picks`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TradedPick {
    pub season: String,
    pub round: u8,
    /// roster_id of the pick's original owner.
    pub roster_id: u32,
    pub previous_owner_id: u32,
    pub owner_id: u32,
}

/// Slot counts for a draft's roster configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DraftSettings {
    #[serde(default)]
    pub teams: Option<u8>,
    #[serde(default)]
    pub rounds: Option<u8>,
    #[serde(default)]
    pub pick_timer: Option<u32>,
    #[serde(default)]
    pub slots_qb: Option<u8>,
    #[serde(default)]
    pub slots_rb: Option<u8>,
    #[serde(default)]
    pub slots_wr: Option<u8>,
    #[serde(default)]
    pub slots_te: Option<u8>,
    #[serde(default)]
    pub slots_k: Option<u8>,
    #[serde(default)]
    pub slots_def: Option<u8>,
    #[serde(default)]
    pub slots_flex: Option<u8>,
    #[serde(default)]
    pub slots_super_flex: Option<u8>,
    #[serde(default)]
    pub slots_bn: Option<u8>,
}

/// Draft metadata: scoring type and display strings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DraftMetadata {
    #[serde(default)]
    pub scoring_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A draft, from `/draft/<id>` or the per-user/per-league draft listings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Draft {
    pub draft_id: DraftId,
    #[serde(rename = "type")]
    pub draft_type: String,
    pub status: String,
    #[serde(default)]
    pub sport: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub season_type: Option<String>,
    #[serde(default)]
    pub league_id: Option<LeagueId>,
    #[serde(default)]
    pub start_time: Option<i64>,
    #[serde(default)]
    pub created: Option<i64>,
    #[serde(default)]
    pub last_picked: Option<i64>,
    #[serde(default)]
    pub settings: Option<DraftSettings>,
    #[serde(default)]
    pub metadata: Option<DraftMetadata>,
    /// user_id -> draft slot.
    #[serde(default)]
    pub draft_order: Option<BTreeMap<String, u8>>,
    /// draft slot -> roster_id.
    #[serde(default)]
    pub slot_to_roster_id: Option<BTreeMap<String, u32>>,
}

/// A single pick inside a draft, from `/draft/<id>/picks`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DraftPick {
    pub round: u8,
    #[serde(default)]
    pub pick_no: Option<u32>,
    #[serde(default)]
    pub draft_slot: Option<u8>,
    #[serde(default)]
    pub player_id: Option<PlayerId>,
    #[serde(default)]
    pub picked_by: Option<UserId>,
    #[serde(default)]
    pub roster_id: Option<u32>,
    #[serde(default)]
    pub is_keeper: Option<bool>,
    #[serde(default)]
    pub draft_id: Option<DraftId>,
}

/// One trending-list entry, from `/players/nfl/trending/<add|drop>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TrendEntry {
    pub player_id: PlayerId,
    pub count: u64,
}

/// Sport calendar state, from `/state/nfl`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SportState {
    pub week: Week,
    pub season: String,
    pub season_type: String,
    #[serde(default)]
    pub display_week: Option<u16>,
    #[serde(default)]
    pub leg: Option<u16>,
    #[serde(default)]
    pub previous_season: Option<String>,
    #[serde(default)]
    pub league_season: Option<String>,
    #[serde(default)]
    pub season_start_date: Option<String>,
}

/// One entry of the `/players/nfl` directory dump (~5 MB, keyed by player id).
///
/// Team defense entries carry the team abbreviation in `player_id` and no
/// `full_name`, so display falls back through first/last name to the raw id.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectoryPlayer {
    pub player_id: PlayerId,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub fantasy_positions: Option<Vec<String>>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub years_exp: Option<u8>,
    #[serde(default)]
    pub number: Option<u16>,
    #[serde(default)]
    pub college: Option<String>,
    #[serde(default)]
    pub injury_status: Option<String>,
}

impl DirectoryPlayer {
    /// Best available display name for the player.
    pub fn display_name(&self) -> String {
        if let Some(full) = &self.full_name {
            return full.clone();
        }
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.player_id.to_string(),
        }
    }

    /// Canonical position, falling back to the first fantasy position when
    /// the primary position string is missing or unrecognized.
    pub fn normalized_position(&self) -> Position {
        let primary = self
            .position
            .as_deref()
            .map(Position::normalize)
            .unwrap_or(Position::Unknown);
        if primary.is_known() {
            return primary;
        }
        self.fantasy_positions
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(|p| Position::normalize(p))
            .find(Position::is_known)
            .unwrap_or(Position::Unknown)
    }
}

/// In-memory player directory: id -> directory entry.
pub type PlayerDirectory = HashMap<PlayerId, DirectoryPlayer>;

/// A resolved trending player, ready for display: directory identity plus
/// normalized position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
}

impl PlayerRecord {
    /// Look a candidate up in the directory. `None` when the directory has no
    /// entry for the id; callers skip those rather than abort.
    pub fn from_directory(id: &PlayerId, directory: &PlayerDirectory) -> Option<Self> {
        directory.get(id).map(|entry| PlayerRecord {
            id: id.clone(),
            name: entry.display_name(),
            position: entry.normalized_position(),
        })
    }
}
