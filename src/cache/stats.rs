//! Cache Statistics Module
//!
//! Tracks read-through hits, misses and evictions of the employee cache.

use serde::Serialize;

// == Cache Stats ==
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Reads served from cache
    pub hits: u64,
    /// Reads that had to go upstream (absent or expired)
    pub misses: u64,
    /// Entries dropped by invalidation, expiry or capacity
    pub evictions: u64,
    /// Current number of per-id entries
    pub cached_employees: usize,
    /// Whether the full-listing slot is filled
    pub listing_cached: bool,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_evictions(&mut self, count: usize) {
        self.evictions += count as u64;
    }
}
