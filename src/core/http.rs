//! HTTP utilities for Sleeper API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

/// Production base URL for the Sleeper read-only API.
pub const DEFAULT_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Default headers for Sleeper requests.
///
/// The API is unauthenticated; only the JSON accept header is needed.
pub fn default_header_map() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(h)
}

/// Connection settings for a Sleeper API client.
///
/// Endpoints are addressed relative to `base_url`, so tests point the client
/// at a local mock server instead of patching a global.
#[derive(Debug, Clone)]
pub struct SleeperConfig {
    pub base_url: String,
}

impl SleeperConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for SleeperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_header_map() {
        let headers = default_header_map().unwrap();
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
    }

    #[test]
    fn test_config_defaults_to_production() {
        let config = SleeperConfig::default();
        assert_eq!(config.base_url, "https://api.sleeper.app/v1");
    }

    #[test]
    fn test_config_custom_base_url() {
        let config = SleeperConfig::new("http://127.0.0.1:9999");
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
    }
}
