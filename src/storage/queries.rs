//! Basic database query operations

use super::{models::StoredPlayer, schema::PlayerDatabase};
use crate::cli::types::PlayerId;
use crate::sleeper::types::{DirectoryPlayer, PlayerDirectory};
use anyhow::Result;
use rusqlite::{params, Row};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// How long a stored directory stays fresh. Sleeper asks clients to
/// re-download the full player dump at most once per day.
pub const DIRECTORY_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

fn unix_now() -> Result<i64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64)
}

impl PlayerDatabase {
    /// Insert or update a single player row
    pub fn upsert_player(&mut self, player: &StoredPlayer) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO players
             (player_id, full_name, position, team, status, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                player.player_id.as_str(),
                player.full_name,
                player.position,
                player.team,
                player.status,
                player.updated_at
            ],
        )?;
        Ok(())
    }

    /// Replace the stored directory with a freshly fetched dump.
    ///
    /// Runs in one transaction so a failed refresh leaves the previous
    /// directory intact. Returns the number of rows written.
    pub fn replace_directory(&mut self, directory: &PlayerDirectory) -> Result<usize> {
        let now = unix_now()?;
        let tx = self.conn.transaction()?;

        tx.execute("DELETE FROM players", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO players
                 (player_id, full_name, position, team, status, updated_at)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )?;
            for entry in directory.values() {
                let stored = StoredPlayer::from_directory_entry(entry, now);
                stmt.execute(params![
                    stored.player_id.as_str(),
                    stored.full_name,
                    stored.position,
                    stored.team,
                    stored.status,
                    stored.updated_at
                ])?;
            }
        }

        tx.commit()?;
        Ok(directory.len())
    }

    /// Look a single player up by id
    pub fn get_player(&self, player_id: &PlayerId) -> Result<Option<StoredPlayer>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, full_name, position, team, status, updated_at
             FROM players WHERE player_id = ?",
        )?;

        let result = stmt.query_row(params![player_id.as_str()], Self::row_to_stored_player);

        match result {
            Ok(player) => Ok(Some(player)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Look several players up, preserving request order and skipping ids the
    /// directory does not know
    pub fn get_players_by_ids(&self, player_ids: &[PlayerId]) -> Result<Vec<StoredPlayer>> {
        let mut players = Vec::new();
        for id in player_ids {
            if let Some(player) = self.get_player(id)? {
                players.push(player);
            }
        }
        Ok(players)
    }

    /// Number of stored player rows
    pub fn player_count(&self) -> Result<u64> {
        let count: u64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Unix seconds of the most recent refresh, or `None` for an empty table
    pub fn last_refreshed(&self) -> Result<Option<i64>> {
        let newest: Option<i64> =
            self.conn
                .query_row("SELECT MAX(updated_at) FROM players", [], |row| row.get(0))?;
        Ok(newest)
    }

    /// Whether the stored directory is empty or older than `max_age`
    pub fn is_stale(&self, max_age: Duration) -> Result<bool> {
        match self.last_refreshed()? {
            None => Ok(true),
            Some(refreshed_at) => {
                let age = unix_now()? - refreshed_at;
                Ok(age >= max_age.as_secs() as i64)
            }
        }
    }

    /// Load the full stored directory into memory for reconciliation
    pub fn load_directory(&self) -> Result<PlayerDirectory> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, full_name, position, team, status, updated_at FROM players",
        )?;

        let rows = stmt.query_map([], Self::row_to_stored_player)?;

        let mut directory = PlayerDirectory::new();
        for row in rows {
            let stored = row?;
            directory.insert(
                stored.player_id.clone(),
                DirectoryPlayer {
                    player_id: stored.player_id,
                    full_name: Some(stored.full_name),
                    first_name: None,
                    last_name: None,
                    position: stored.position,
                    fantasy_positions: None,
                    team: stored.team,
                    status: stored.status,
                    age: None,
                    years_exp: None,
                    number: None,
                    college: None,
                    injury_status: None,
                },
            );
        }
        Ok(directory)
    }

    /// Delete every stored player row
    pub fn clear(&mut self) -> Result<()> {
        self.conn.execute("DELETE FROM players", [])?;
        Ok(())
    }

    fn row_to_stored_player(row: &Row) -> rusqlite::Result<StoredPlayer> {
        Ok(StoredPlayer {
            player_id: PlayerId::new(row.get::<_, String>(0)?),
            full_name: row.get(1)?,
            position: row.get(2)?,
            team: row.get(3)?,
            status: row.get(4)?,
            updated_at: row.get(5)?,
        })
    }
}
