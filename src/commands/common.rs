//! Common utilities and helper functions shared across commands.
//!
//! This module contains shared functionality that would otherwise be duplicated
//! across different command implementations.

use std::collections::HashMap;

use crate::{
    cli::types::{LeagueId, Season, TrendDirection, UserId, Week},
    core::cache::{LeaguesCacheKey, MatchupsCacheKey, RostersCacheKey, TrendingCacheKey, GLOBAL_CACHE},
    sleeper::{
        types::{League, LeagueUser, Matchup, Roster, TrendEntry},
        SleeperClient,
    },
    Result,
};

/// Where a response came from, for verbose reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
    Refreshed,
}

/// Load a user's leagues from cache, or fetch and cache them.
pub async fn load_or_fetch_leagues(
    client: &SleeperClient,
    user_id: &UserId,
    season: Season,
    refresh: bool,
) -> Result<(Vec<League>, CacheStatus)> {
    let key = LeaguesCacheKey {
        user_id: user_id.clone(),
        season,
    };

    if refresh {
        let _ = GLOBAL_CACHE.leagues.invalidate_disk_cache(&key);
    } else if let Some(value) = GLOBAL_CACHE.leagues.get(&key) {
        let leagues: Vec<League> = serde_json::from_value(value)?;
        return Ok((leagues, CacheStatus::Hit));
    }

    let leagues = client.get_leagues_for_user(user_id, season).await?;
    GLOBAL_CACHE
        .leagues
        .put(key, serde_json::to_value(&leagues)?);

    let status = if refresh {
        CacheStatus::Refreshed
    } else {
        CacheStatus::Miss
    };
    Ok((leagues, status))
}

/// Load a league's rosters from cache, or fetch and cache them.
pub async fn load_or_fetch_rosters(
    client: &SleeperClient,
    league_id: &LeagueId,
    refresh: bool,
) -> Result<(Vec<Roster>, CacheStatus)> {
    let key = RostersCacheKey {
        league_id: league_id.clone(),
    };

    if refresh {
        let _ = GLOBAL_CACHE.rosters.invalidate_disk_cache(&key);
    } else if let Some(value) = GLOBAL_CACHE.rosters.get(&key) {
        let rosters: Vec<Roster> = serde_json::from_value(value)?;
        return Ok((rosters, CacheStatus::Hit));
    }

    let rosters = client.get_rosters(league_id).await?;
    GLOBAL_CACHE
        .rosters
        .put(key, serde_json::to_value(&rosters)?);

    let status = if refresh {
        CacheStatus::Refreshed
    } else {
        CacheStatus::Miss
    };
    Ok((rosters, status))
}

/// Load weekly matchups from cache, or fetch and cache them.
pub async fn load_or_fetch_matchups(
    client: &SleeperClient,
    league_id: &LeagueId,
    week: Week,
    refresh: bool,
) -> Result<(Vec<Matchup>, CacheStatus)> {
    let key = MatchupsCacheKey {
        league_id: league_id.clone(),
        week,
    };

    if refresh {
        let _ = GLOBAL_CACHE.matchups.invalidate_disk_cache(&key);
    } else if let Some(value) = GLOBAL_CACHE.matchups.get(&key) {
        let matchups: Vec<Matchup> = serde_json::from_value(value)?;
        return Ok((matchups, CacheStatus::Hit));
    }

    let matchups = client.get_matchups(league_id, week).await?;
    GLOBAL_CACHE
        .matchups
        .put(key, serde_json::to_value(&matchups)?);

    let status = if refresh {
        CacheStatus::Refreshed
    } else {
        CacheStatus::Miss
    };
    Ok((matchups, status))
}

/// Load a trending list from cache, or fetch and cache it.
pub async fn load_or_fetch_trending(
    client: &SleeperClient,
    direction: TrendDirection,
    lookback_hours: u32,
    limit: u32,
    refresh: bool,
) -> Result<(Vec<TrendEntry>, CacheStatus)> {
    let key = TrendingCacheKey {
        direction,
        lookback_hours,
        limit,
    };

    if refresh {
        let _ = GLOBAL_CACHE.trending.invalidate_disk_cache(&key);
    } else if let Some(value) = GLOBAL_CACHE.trending.get(&key) {
        let trending: Vec<TrendEntry> = serde_json::from_value(value)?;
        return Ok((trending, CacheStatus::Hit));
    }

    let trending = client
        .get_trending_players(direction, Some(lookback_hours), Some(limit))
        .await?;
    GLOBAL_CACHE
        .trending
        .put(key, serde_json::to_value(&trending)?);

    let status = if refresh {
        CacheStatus::Refreshed
    } else {
        CacheStatus::Miss
    };
    Ok((trending, status))
}

/// Map roster_id to the owner's display name (custom team name when set).
///
/// Rosters without a resolvable owner fall back to "Roster <id>".
pub fn roster_display_names(rosters: &[Roster], users: &[LeagueUser]) -> HashMap<u32, String> {
    let by_user: HashMap<&str, &LeagueUser> = users
        .iter()
        .map(|user| (user.user_id.as_str(), user))
        .collect();

    rosters
        .iter()
        .map(|roster| {
            let name = roster
                .owner_id
                .as_ref()
                .and_then(|owner| by_user.get(owner.as_str()))
                .map(|user| {
                    user.metadata
                        .as_ref()
                        .and_then(|m| m.team_name.clone())
                        .unwrap_or_else(|| user.display_name.clone())
                })
                .unwrap_or_else(|| format!("Roster {}", roster.roster_id));
            (roster.roster_id, name)
        })
        .collect()
}
