//! Update players command implementation

use crate::{
    sleeper::SleeperClient,
    storage::{queries::DIRECTORY_MAX_AGE, PlayerDatabase},
    Result,
};

/// Handle the update players command
///
/// Downloads the full player dump and replaces the local directory. Without
/// `force`, a directory refreshed within the last day is left alone, per the
/// API's once-a-day guidance for this endpoint.
pub async fn handle_update_players(force: bool) -> Result<()> {
    let mut db = PlayerDatabase::new()?;

    if !force && !db.is_stale(DIRECTORY_MAX_AGE)? {
        println!(
            "Player directory is fresh ({} players); use --force to refresh anyway",
            db.player_count()?
        );
        return Ok(());
    }

    println!("Downloading player directory...");
    let client = SleeperClient::new()?;
    let directory = client.get_all_players().await?;

    let written = db.replace_directory(&directory)?;
    println!("✓ Stored {} players", written);

    Ok(())
}
