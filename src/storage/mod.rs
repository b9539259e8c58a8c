//! Storage layer for the Sleeper Fantasy Football CLI
//!
//! This module provides a clean abstraction over the SQLite database that
//! holds the player directory, organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Basic CRUD operations
//!
//! Sleeper asks clients to download the full player dump at most once per
//! day, so the directory lives here between refreshes.

pub mod models;
pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::PlayerDatabase;
