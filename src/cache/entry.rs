//! Cache Entry Module
//!
//! A cached value paired with its optional freshness deadline.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached value with optional expiry.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The cached value
    pub value: T,
    /// When the value was stored
    pub cached_at: Instant,
    /// Deadline after which the value is stale, None = fresh until evicted
    pub expires_at: Option<Instant>,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Wraps `value`, expiring it after `ttl_seconds` when given.
    pub fn new(value: T, ttl_seconds: Option<u64>) -> Self {
        let now = Instant::now();
        Self {
            value,
            cached_at: now,
            expires_at: ttl_seconds.map(|ttl| now + Duration::from_secs(ttl)),
        }
    }

    // == Is Expired ==
    /// An entry is expired once the current time reaches its deadline.
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Time the entry has been held.
    pub fn age(&self) -> Duration {
        self.cached_at.elapsed()
    }
}
