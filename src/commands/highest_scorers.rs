//! Highest scorers command implementation

use crate::{
    commands::common::{load_or_fetch_matchups, load_or_fetch_rosters, roster_display_names},
    sleeper::{compute::top_scorers, SleeperClient},
    LeagueId, Result, Week,
};

/// Handle the highest scorers command
///
/// Ranks the week's matchup entries by effective points (commissioner
/// overrides included) and prints the top of the table.
pub async fn handle_highest_scorers(
    league_id: LeagueId,
    week: Week,
    depth: usize,
    as_json: bool,
    refresh: bool,
) -> Result<()> {
    let client = SleeperClient::new()?;

    let (matchups, _) = load_or_fetch_matchups(&client, &league_id, week, refresh).await?;
    let (rosters, _) = load_or_fetch_rosters(&client, &league_id, refresh).await?;
    let users = client.get_league_users(&league_id).await?;
    let names = roster_display_names(&rosters, &users);

    let ranked = top_scorers(&matchups, depth);

    if as_json {
        let output: Vec<_> = ranked
            .iter()
            .map(|matchup| {
                serde_json::json!({
                    "roster_id": matchup.roster_id,
                    "team": names.get(&matchup.roster_id),
                    "points": matchup.effective_points(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("No matchups found for week {}", week);
        return Ok(());
    }

    println!("Top scorers, week {}:", week);
    for (rank, matchup) in ranked.iter().enumerate() {
        let fallback = format!("Roster {}", matchup.roster_id);
        let name = names.get(&matchup.roster_id).unwrap_or(&fallback);
        println!(
            "  {}. {:<24} {:>8.2} pts",
            rank + 1,
            name,
            matchup.effective_points()
        );
    }

    Ok(())
}
