//! Unified caching system for both in-memory LRU cache and persistent file storage
//!
//! This module provides a two-tier caching system:
//! - L1 Cache: In-memory LRU cache for fast access
//! - L2 Cache: File system persistence for longer-term storage
//!
//! The system automatically promotes frequently accessed items to memory cache
//! and provides fallback to disk storage for larger datasets. Sleeper asks
//! clients to stay under 1000 calls per minute, so league and trending
//! responses are cached here rather than re-fetched per command.

use dirs;
use lru::LruCache;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    collections::HashMap,
    fs,
    hash::Hash,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use crate::{LeagueId, Season, TrendDirection, UserId, Week};

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Generic cache key that can be used for both memory and disk caching
pub trait CacheKey: Hash + Eq + Clone + Send + Sync {
    /// Generate a string representation for file system storage
    fn to_file_key(&self) -> String;

    /// Generate the file path for this cache entry
    fn to_file_path(&self) -> PathBuf {
        let base = dirs::cache_dir().unwrap_or_else(|| {
            let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.push(".cache");
            home
        });
        base.join("sleeper-ffl")
            .join(format!("{}.json", self.to_file_key()))
    }
}

/// Cache key for trending player lists
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrendingCacheKey {
    pub direction: TrendDirection,
    pub lookback_hours: u32,
    pub limit: u32,
}

impl CacheKey for TrendingCacheKey {
    fn to_file_key(&self) -> String {
        format!(
            "trending_{}_h{}_n{}",
            self.direction.as_path_segment(),
            self.lookback_hours,
            self.limit
        )
    }
}

/// Cache key for a user's league listing in a season
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeaguesCacheKey {
    pub user_id: UserId,
    pub season: Season,
}

impl CacheKey for LeaguesCacheKey {
    fn to_file_key(&self) -> String {
        format!("leagues_u{}_s{}", self.user_id.as_str(), self.season.as_u16())
    }
}

/// Cache key for a league's roster listing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RostersCacheKey {
    pub league_id: LeagueId,
}

impl CacheKey for RostersCacheKey {
    fn to_file_key(&self) -> String {
        format!("rosters_l{}", self.league_id.as_str())
    }
}

/// Cache key for weekly matchup data
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchupsCacheKey {
    pub league_id: LeagueId,
    pub week: Week,
}

impl CacheKey for MatchupsCacheKey {
    fn to_file_key(&self) -> String {
        format!(
            "matchups_l{}_w{}",
            self.league_id.as_str(),
            self.week.as_u16()
        )
    }
}

/// Unified cache that combines LRU memory cache with file system persistence
pub struct UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    memory_cache: Arc<Mutex<LruCache<K, V>>>,
    memory_capacity: usize,
}

impl<K, V> UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    /// Create a new unified cache with specified memory capacity
    pub fn new(memory_capacity: usize) -> Self {
        Self {
            memory_cache: Arc::new(Mutex::new(LruCache::new(
                NonZeroUsize::new(memory_capacity).unwrap(),
            ))),
            memory_capacity,
        }
    }

    /// Get an item from cache (checks memory first, then disk)
    pub fn get(&self, key: &K) -> Option<V> {
        // First check memory cache
        if let Some(value) = self.memory_cache.lock().unwrap().get(key) {
            return Some(value.clone());
        }

        // Fall back to disk cache
        if let Some(value) = self.get_from_disk(key) {
            // Promote to memory cache
            self.memory_cache
                .lock()
                .unwrap()
                .put(key.clone(), value.clone());
            return Some(value);
        }

        None
    }

    /// Put an item into cache (stores in both memory and disk)
    pub fn put(&self, key: K, value: V) {
        // Store in memory cache
        self.memory_cache
            .lock()
            .unwrap()
            .put(key.clone(), value.clone());

        // Store in disk cache for persistence
        let _ = self.put_to_disk(&key, &value);
    }

    /// Get item from disk cache only
    fn get_from_disk(&self, key: &K) -> Option<V> {
        let path = key.to_file_path();
        let content = try_read_to_string(&path)?;
        serde_json::from_str(&content).ok()
    }

    /// Put item to disk cache only
    fn put_to_disk(&self, key: &K, value: &V) -> std::io::Result<()> {
        let path = key.to_file_path();
        let content = serde_json::to_string_pretty(value)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        write_string(&path, &content)
    }

    /// Clear memory cache only (keeps disk cache)
    pub fn clear_memory(&self) {
        self.memory_cache.lock().unwrap().clear();
    }

    /// Clear disk cache for a specific key (used when a refresh is forced)
    pub fn invalidate_disk_cache(&self, key: &K) -> std::io::Result<()> {
        let path = key.to_file_path();
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Get memory cache statistics
    pub fn memory_stats(&self) -> (usize, usize) {
        let cache = self.memory_cache.lock().unwrap();
        (cache.len(), self.memory_capacity)
    }
}

/// Global cache manager for the entire application
pub struct CacheManager {
    pub trending: UnifiedCache<TrendingCacheKey, Value>,
    pub leagues: UnifiedCache<LeaguesCacheKey, Value>,
    pub rosters: UnifiedCache<RostersCacheKey, Value>,
    pub matchups: UnifiedCache<MatchupsCacheKey, Value>,
}

impl CacheManager {
    /// Create a new cache manager with reasonable defaults
    pub fn new() -> Self {
        Self {
            trending: UnifiedCache::new(10), // Few distinct trending queries per run
            leagues: UnifiedCache::new(50),  // Cache up to 50 user/season league listings
            rosters: UnifiedCache::new(100), // Cache up to 100 league roster listings
            matchups: UnifiedCache::new(100), // Cache up to 100 weekly matchup responses
        }
    }

    /// Clear all memory caches
    pub fn clear_all_memory(&self) {
        self.trending.clear_memory();
        self.leagues.clear_memory();
        self.rosters.clear_memory();
        self.matchups.clear_memory();
    }

    /// Get memory usage statistics for all caches
    pub fn memory_stats(&self) -> HashMap<String, (usize, usize)> {
        let mut stats = HashMap::new();
        stats.insert("trending".to_string(), self.trending.memory_stats());
        stats.insert("leagues".to_string(), self.leagues.memory_stats());
        stats.insert("rosters".to_string(), self.rosters.memory_stats());
        stats.insert("matchups".to_string(), self.matchups.memory_stats());
        stats
    }
}

impl Default for CacheManager {
    fn default() -> Self {
        Self::new()
    }
}

use std::sync::LazyLock;

/// Global cache manager instance for use across the application
pub static GLOBAL_CACHE: LazyLock<CacheManager> = LazyLock::new(CacheManager::new);
