//! Data models for the storage layer

use crate::cli::types::{PlayerId, Position};
use crate::sleeper::types::DirectoryPlayer;
use serde::{Deserialize, Serialize};

/// Player directory entry as stored in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPlayer {
    pub player_id: PlayerId,
    pub full_name: String,
    pub position: Option<String>,
    pub team: Option<String>,
    pub status: Option<String>,
    /// Unix seconds of the refresh that wrote this row
    pub updated_at: i64,
}

impl StoredPlayer {
    /// Flatten a directory entry into its stored form
    pub fn from_directory_entry(entry: &DirectoryPlayer, updated_at: i64) -> Self {
        Self {
            player_id: entry.player_id.clone(),
            full_name: entry.display_name(),
            position: entry.position.clone(),
            team: entry.team.clone(),
            status: entry.status.clone(),
            updated_at,
        }
    }

    /// Canonical position for the stored row
    pub fn normalized_position(&self) -> Position {
        self.position
            .as_deref()
            .map(Position::normalize)
            .unwrap_or(Position::Unknown)
    }
}
