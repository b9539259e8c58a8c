//! User data command implementation

use crate::{
    commands::common::{load_or_fetch_leagues, CacheStatus},
    sleeper::SleeperClient,
    Result, Season,
};

/// Handle the user data command
///
/// Looks the user up by id or username, then lists their leagues for the
/// season.
pub async fn handle_user_data(
    user: String,
    season: Season,
    as_json: bool,
    refresh: bool,
) -> Result<()> {
    let client = SleeperClient::new()?;

    let sleeper_user = client.get_user(&user).await?;
    let (leagues, cache_status) =
        load_or_fetch_leagues(&client, &sleeper_user.user_id, season, refresh).await?;

    if as_json {
        let output = serde_json::json!({
            "user": sleeper_user,
            "season": season,
            "leagues": leagues,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} (user_id {})",
        sleeper_user.display_name,
        sleeper_user.user_id.as_str()
    );
    if let Some(username) = &sleeper_user.username {
        println!("Username: {}", username);
    }
    if let Some(url) = sleeper_user.avatar_url() {
        println!("Avatar: {}", url);
    }

    if cache_status == CacheStatus::Hit {
        println!("\n{} leagues in {} (from cache):", leagues.len(), season);
    } else {
        println!("\n{} leagues in {}:", leagues.len(), season);
    }
    for league in &leagues {
        println!(
            "  {} [{}] - {} teams, {}",
            league.name,
            league.league_id.as_str(),
            league.total_rosters,
            league.status
        );
    }

    Ok(())
}
