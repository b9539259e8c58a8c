//! Core utilities for the Sleeper Fantasy Football CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: Two-tier (memory + file system) caching utilities
//! - `http`: Connection settings and default headers for the Sleeper API

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{try_read_to_string, write_string, CacheManager, GLOBAL_CACHE};
pub use http::{default_header_map, SleeperConfig, DEFAULT_BASE_URL};
