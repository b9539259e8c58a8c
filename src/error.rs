//! Error types for the Sleeper Fantasy Football CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SleeperError>;

#[derive(Error, Debug)]
pub enum SleeperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("System time error: {0}")]
    SystemTime(#[from] std::time::SystemTimeError),

    #[error("User ID not provided and {env_var} environment variable not set")]
    MissingUserId { env_var: String },

    #[error("Failed to parse numeric argument: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Cache error: {message}")]
    Cache { message: String },

    #[error("Sleeper API returned no data")]
    NoData,

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Player not found in directory: {player_id}")]
    PlayerNotFound { player_id: String },

    #[error("Player directory is empty; run `sleeper-ffl get update-players` first")]
    EmptyDirectory,
}

impl From<Box<dyn std::error::Error + Send + Sync>> for SleeperError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        SleeperError::Cache {
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for SleeperError {
    fn from(err: anyhow::Error) -> Self {
        SleeperError::Cache {
            message: err.to_string(),
        }
    }
}
