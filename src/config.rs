//! Configuration Module
//!
//! Handles loading gateway configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_UPSTREAM_BASE_URL: &str = "http://localhost:8112/api/v1/employee";

/// Gateway configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream employee API, including `/api/v1/employee`
    pub upstream_base_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Total attempts for a rate-limited upstream call, first attempt included
    pub retry_max_attempts: u32,
    /// Fixed wait between rate-limited attempts, in milliseconds
    pub retry_wait_ms: u64,
    /// Cache freshness window in seconds (0 = entries live until evicted)
    pub cache_ttl: u64,
    /// Maximum number of per-id entries kept in the cache
    pub max_cached_employees: usize,
    /// Background expiry sweep interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `UPSTREAM_BASE_URL` - Upstream employee API (default: `http://localhost:8112/api/v1/employee`)
    /// - `SERVER_PORT` - HTTP server port (default: 8111)
    /// - `RETRY_MAX_ATTEMPTS` - Attempts on HTTP 429 (default: 3)
    /// - `RETRY_WAIT_MS` - Wait between attempts (default: 500)
    /// - `CACHE_TTL_SECS` - Cache freshness window (default: 0, no expiry)
    /// - `CACHE_MAX_ENTRIES` - Per-id cache capacity (default: 1000)
    /// - `CLEANUP_INTERVAL` - Expiry sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.upstream_base_url),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            retry_max_attempts: parse_var::<u32>("RETRY_MAX_ATTEMPTS")
                .filter(|attempts| *attempts > 0)
                .unwrap_or(defaults.retry_max_attempts),
            retry_wait_ms: parse_var("RETRY_WAIT_MS").unwrap_or(defaults.retry_wait_ms),
            cache_ttl: parse_var("CACHE_TTL_SECS").unwrap_or(defaults.cache_ttl),
            max_cached_employees: parse_var::<usize>("CACHE_MAX_ENTRIES")
                .filter(|max| *max > 0)
                .unwrap_or(defaults.max_cached_employees),
            cleanup_interval: parse_var::<u64>("CLEANUP_INTERVAL")
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.cleanup_interval),
        }
    }

    /// Wait between rate-limited attempts.
    pub fn retry_wait(&self) -> Duration {
        Duration::from_millis(self.retry_wait_ms)
    }

    /// Cache freshness window, or None when entries never expire.
    pub fn cache_ttl(&self) -> Option<u64> {
        (self.cache_ttl > 0).then_some(self.cache_ttl)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            server_port: 8111,
            retry_max_attempts: 3,
            retry_wait_ms: 500,
            cache_ttl: 0,
            max_cached_employees: 1000,
            cleanup_interval: 60,
        }
    }
}
