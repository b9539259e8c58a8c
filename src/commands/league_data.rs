//! League data command implementation

use crate::{
    commands::common::{load_or_fetch_rosters, roster_display_names, CacheStatus},
    sleeper::SleeperClient,
    LeagueId, Result,
};

/// Handle the league data command
///
/// Prints the league's configuration and a standings table built from roster
/// records.
pub async fn handle_league_data(
    league_id: LeagueId,
    as_json: bool,
    refresh: bool,
    verbose: bool,
) -> Result<()> {
    let client = SleeperClient::new()?;

    let league = client.get_league(&league_id).await?;
    let (rosters, cache_status) = load_or_fetch_rosters(&client, &league_id, refresh).await?;
    let users = client.get_league_users(&league_id).await?;

    if as_json {
        let output = serde_json::json!({
            "league": league,
            "rosters": rosters,
            "users": users,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} ({} season, {})", league.name, league.season, league.status);
    println!(
        "{} teams, slots: {}",
        league.total_rosters,
        league.roster_positions.join(" ")
    );

    if verbose {
        match cache_status {
            CacheStatus::Hit => println!("✓ Rosters loaded (from cache)"),
            CacheStatus::Miss => println!("✓ Rosters fetched (cache miss)"),
            CacheStatus::Refreshed => println!("✓ Rosters fetched (refreshed)"),
        }
    }

    let names = roster_display_names(&rosters, &users);

    // Standings: best record first, points scored as the tiebreaker.
    let mut standings: Vec<_> = rosters.iter().collect();
    standings.sort_by(|a, b| {
        let record_a = a.settings.as_ref().map(|s| (s.wins, s.ties)).unwrap_or((0, 0));
        let record_b = b.settings.as_ref().map(|s| (s.wins, s.ties)).unwrap_or((0, 0));
        let points_a = a
            .settings
            .as_ref()
            .and_then(|s| s.fantasy_points_scored())
            .unwrap_or(0.0);
        let points_b = b
            .settings
            .as_ref()
            .and_then(|s| s.fantasy_points_scored())
            .unwrap_or(0.0);
        record_b
            .cmp(&record_a)
            .then(points_b.partial_cmp(&points_a).unwrap_or(std::cmp::Ordering::Equal))
    });

    println!("\nStandings:");
    for roster in standings {
        let record = roster
            .settings
            .as_ref()
            .map(|s| format!("{}-{}-{}", s.wins, s.losses, s.ties))
            .unwrap_or_else(|| "0-0-0".to_string());
        let points = roster
            .settings
            .as_ref()
            .and_then(|s| s.fantasy_points_scored())
            .map(|p| format!("{:.2}", p))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<24} {:>7}  {:>9} pts",
            names[&roster.roster_id], record, points
        );
    }

    Ok(())
}
