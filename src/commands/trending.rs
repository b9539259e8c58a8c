//! Trending availability command implementation
//!
//! The flagship command: pull the trending add/drop list, then reconcile it
//! against every roster in every one of the user's leagues to find players
//! who are both trending and actually claimable.

use crate::{
    commands::{
        common::{load_or_fetch_leagues, load_or_fetch_rosters, load_or_fetch_trending},
        resolve_user_id,
    },
    sleeper::{
        reconcile::{reconcile_leagues, LeagueContext},
        types::PlayerDirectory,
        SleeperClient,
    },
    storage::{queries::DIRECTORY_MAX_AGE, PlayerDatabase},
    Result, Season, TrendDirection, UserId,
};

/// Parameters for the trending availability command
pub struct TrendingParams {
    pub user_id: Option<UserId>,
    pub season: Season,
    pub direction: TrendDirection,
    pub lookback_hours: u32,
    pub limit: u32,
    pub as_json: bool,
    pub refresh: bool,
    pub verbose: bool,
}

/// Handle the trending availability command
pub async fn handle_trending_availability(params: TrendingParams) -> Result<()> {
    let user_id = resolve_user_id(params.user_id)?;
    let client = SleeperClient::new()?;
    let user = client.get_user(user_id.as_str()).await?;

    let (trending, _) = load_or_fetch_trending(
        &client,
        params.direction,
        params.lookback_hours,
        params.limit,
        params.refresh,
    )
    .await?;
    let candidates: Vec<_> = trending.iter().map(|entry| entry.player_id.clone()).collect();

    let (leagues, _) =
        load_or_fetch_leagues(&client, &user_id, params.season, params.refresh).await?;
    if params.verbose {
        println!(
            "Reconciling {} trending players against {} leagues...",
            candidates.len(),
            leagues.len()
        );
    }

    let mut contexts = Vec::with_capacity(leagues.len());
    for league in leagues {
        let (rosters, _) =
            load_or_fetch_rosters(&client, &league.league_id, params.refresh).await?;
        contexts.push(LeagueContext { league, rosters });
    }

    let directory = load_directory(&client, params.verbose).await?;
    if directory.is_empty() {
        return Err(crate::SleeperError::EmptyDirectory);
    }

    let report = reconcile_leagues(&user.display_name, &contexts, &candidates, &directory);

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Trending '{}' players available for {} (last {}h, top {}):",
        params.direction, report.user, params.lookback_hours, params.limit
    );
    for (league_name, players) in &report.leagues {
        println!("\n{}:", league_name);
        if players.is_empty() {
            println!("  (none available)");
            continue;
        }
        for player in players {
            println!("  {:<4} {}", player.position, player.name);
        }
    }

    Ok(())
}

/// Load the player directory from local storage, refreshing it from the API
/// when it is missing or older than a day.
async fn load_directory(client: &SleeperClient, verbose: bool) -> Result<PlayerDirectory> {
    let mut db = PlayerDatabase::new()?;

    if db.is_stale(DIRECTORY_MAX_AGE)? {
        if verbose {
            println!("Player directory stale, downloading fresh dump...");
        }
        let directory = client.get_all_players().await?;
        let written = db.replace_directory(&directory)?;
        if verbose {
            println!("✓ Stored {} players", written);
        }
        return Ok(directory);
    }

    Ok(db.load_directory()?)
}
