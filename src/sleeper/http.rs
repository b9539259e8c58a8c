//! Typed HTTP client for the Sleeper read-only API.
//!
//! All endpoints are unauthenticated GETs. Non-2xx statuses surface as
//! [`crate::SleeperError::Http`] via `error_for_status`; response bodies
//! deserialize straight into the types in [`crate::sleeper::types`].

use reqwest::Client;

use crate::cli::types::{DraftId, LeagueId, TrendDirection, UserId, Week};
use crate::core::http::{default_header_map, SleeperConfig};
use crate::sleeper::types::{
    Draft, DraftPick, League, LeagueUser, Matchup, PlayerDirectory, PlayoffMatch, Roster,
    SleeperUser, SportState, TradedPick, TrendEntry, Transaction,
};
use crate::{Result, Season};

#[cfg(test)]
mod tests;

/// Client over the Sleeper API with an explicit base URL.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    client: Client,
    config: SleeperConfig,
}

impl SleeperClient {
    /// Client against the production API.
    pub fn new() -> Result<Self> {
        Self::with_config(SleeperConfig::default())
    }

    /// Client against an explicit base URL (tests point this at a mock
    /// server).
    pub fn with_config(config: SleeperConfig) -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_header_map()?)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.config.base_url, path);
        let res = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;
        Ok(res)
    }

    /// `GET /user/<id-or-username>`
    pub async fn get_user(&self, id_or_username: &str) -> Result<SleeperUser> {
        self.get_json(&format!("/user/{id_or_username}")).await
    }

    /// `GET /user/<user_id>/leagues/nfl/<season>`
    pub async fn get_leagues_for_user(
        &self,
        user_id: &UserId,
        season: Season,
    ) -> Result<Vec<League>> {
        self.get_json(&format!("/user/{user_id}/leagues/nfl/{season}"))
            .await
    }

    /// `GET /league/<league_id>`
    pub async fn get_league(&self, league_id: &LeagueId) -> Result<League> {
        self.get_json(&format!("/league/{league_id}")).await
    }

    /// `GET /league/<league_id>/rosters`
    pub async fn get_rosters(&self, league_id: &LeagueId) -> Result<Vec<Roster>> {
        self.get_json(&format!("/league/{league_id}/rosters")).await
    }

    /// `GET /league/<league_id>/users`
    pub async fn get_league_users(&self, league_id: &LeagueId) -> Result<Vec<LeagueUser>> {
        self.get_json(&format!("/league/{league_id}/users")).await
    }

    /// `GET /league/<league_id>/matchups/<week>`
    pub async fn get_matchups(&self, league_id: &LeagueId, week: Week) -> Result<Vec<Matchup>> {
        self.get_json(&format!("/league/{league_id}/matchups/{week}"))
            .await
    }

    /// `GET /league/<league_id>/winners_bracket`
    pub async fn get_winners_bracket(&self, league_id: &LeagueId) -> Result<Vec<PlayoffMatch>> {
        self.get_json(&format!("/league/{league_id}/winners_bracket"))
            .await
    }

    /// `GET /league/<league_id>/losers_bracket`
    pub async fn get_losers_bracket(&self, league_id: &LeagueId) -> Result<Vec<PlayoffMatch>> {
        self.get_json(&format!("/league/{league_id}/losers_bracket"))
            .await
    }

    /// `GET /league/<league_id>/transactions/<round>`
    ///
    /// `round` is the leg of the season (week for in-season transactions).
    pub async fn get_transactions(
        &self,
        league_id: &LeagueId,
        round: Week,
    ) -> Result<Vec<Transaction>> {
        self.get_json(&format!("/league/{league_id}/transactions/{round}"))
            .await
    }

    /// `GET /league/<league_id>/traded_picks`
    pub async fn get_traded_picks(&self, league_id: &LeagueId) -> Result<Vec<TradedPick>> {
        self.get_json(&format!("/league/{league_id}/traded_picks"))
            .await
    }

    /// `GET /state/nfl`
    pub async fn get_sport_state(&self) -> Result<SportState> {
        self.get_json("/state/nfl").await
    }

    /// `GET /user/<user_id>/drafts/nfl/<season>`
    pub async fn get_drafts_for_user(
        &self,
        user_id: &UserId,
        season: Season,
    ) -> Result<Vec<Draft>> {
        self.get_json(&format!("/user/{user_id}/drafts/nfl/{season}"))
            .await
    }

    /// `GET /league/<league_id>/drafts`
    pub async fn get_drafts_for_league(&self, league_id: &LeagueId) -> Result<Vec<Draft>> {
        self.get_json(&format!("/league/{league_id}/drafts")).await
    }

    /// `GET /draft/<draft_id>`
    pub async fn get_draft(&self, draft_id: &DraftId) -> Result<Draft> {
        self.get_json(&format!("/draft/{draft_id}")).await
    }

    /// `GET /draft/<draft_id>/picks`
    pub async fn get_draft_picks(&self, draft_id: &DraftId) -> Result<Vec<DraftPick>> {
        self.get_json(&format!("/draft/{draft_id}/picks")).await
    }

    /// `GET /draft/<draft_id>/traded_picks`
    pub async fn get_draft_traded_picks(&self, draft_id: &DraftId) -> Result<Vec<TradedPick>> {
        self.get_json(&format!("/draft/{draft_id}/traded_picks"))
            .await
    }

    /// `GET /players/nfl`
    ///
    /// The full directory dump (~5 MB). Sleeper asks clients to fetch this at
    /// most once per day; callers persist it via
    /// [`crate::storage::PlayerDatabase`] instead of re-downloading.
    pub async fn get_all_players(&self) -> Result<PlayerDirectory> {
        self.get_json("/players/nfl").await
    }

    /// `GET /players/nfl/trending/<add|drop>?lookback_hours=..&limit=..`
    ///
    /// Omitted parameters fall back to the API defaults (24 hours, 25
    /// players). Order is the API's ranking, most-moved first.
    pub async fn get_trending_players(
        &self,
        direction: TrendDirection,
        lookback_hours: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Vec<TrendEntry>> {
        let url = format!(
            "{}/players/nfl/trending/{}",
            self.config.base_url,
            direction.as_path_segment()
        );
        let mut params: Vec<(&str, u32)> = Vec::new();
        if let Some(hours) = lookback_hours {
            params.push(("lookback_hours", hours));
        }
        if let Some(limit) = limit {
            params.push(("limit", limit));
        }

        let res = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<TrendEntry>>()
            .await?;
        Ok(res)
    }
}
