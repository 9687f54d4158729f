//! Employee Cache Module
//!
//! Holds the two cache regions the service reads through: a single slot for
//! the full employee listing and a bounded map of employees keyed by id.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats, LruTracker};
use crate::models::Employee;

// == Employee Cache ==
/// Read-through cache for employee listings and per-id lookups.
///
/// Entries are only as fresh as the last upstream fetch. Staleness is
/// tolerated until a mutation evicts the affected entries or, when a TTL
/// is configured, the entry expires.
#[derive(Debug)]
pub struct EmployeeCache {
    /// Most recently fetched full listing
    all: Option<CacheEntry<Vec<Employee>>>,
    /// Lazily populated per-id entries
    by_id: HashMap<String, CacheEntry<Employee>>,
    /// Recency order of `by_id` keys
    lru: LruTracker,
    stats: CacheStats,
    /// Capacity of `by_id`
    max_entries: usize,
    /// Freshness window in seconds, None = until evicted
    ttl: Option<u64>,
    /// Bumped on every explicit eviction
    generation: u64,
}

impl EmployeeCache {
    // == Constructor ==
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of per-id entries held at once
    /// * `ttl` - Optional freshness window in seconds
    pub fn new(max_entries: usize, ttl: Option<u64>) -> Self {
        Self {
            all: None,
            by_id: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries: max_entries.max(1),
            ttl,
            generation: 0,
        }
    }

    /// Current eviction generation.
    ///
    /// A caller that fetches upstream on a miss reads this first and hands
    /// it back to `put_all`/`put_by_id`; the store is refused if an eviction
    /// happened in between.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // == Listing Slot ==
    /// Returns the cached listing if present and fresh.
    pub fn get_all(&mut self) -> Option<Vec<Employee>> {
        match self.all.take() {
            Some(entry) if !entry.is_expired() => {
                let employees = entry.value.clone();
                self.all = Some(entry);
                self.stats.record_hit();
                Some(employees)
            }
            Some(_) => {
                self.stats.record_evictions(1);
                self.stats.record_miss();
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Replaces the cached listing unless an eviction happened since
    /// `generation` was read. Returns whether the listing was stored.
    pub fn put_all(&mut self, employees: Vec<Employee>, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.all = Some(CacheEntry::new(employees, self.ttl));
        true
    }

    /// Drops the cached listing. Returns whether one was present.
    pub fn evict_all(&mut self) -> bool {
        self.generation += 1;
        let evicted = self.all.take().is_some();
        if evicted {
            self.stats.record_evictions(1);
        }
        evicted
    }

    // == Per-Id Entries ==
    /// Returns the cached employee for `id` if present and fresh.
    pub fn get_by_id(&mut self, id: &str) -> Option<Employee> {
        let expired = match self.by_id.get(id) {
            Some(entry) if !entry.is_expired() => {
                let employee = entry.value.clone();
                self.lru.touch(id);
                self.stats.record_hit();
                return Some(employee);
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.by_id.remove(id);
            self.lru.remove(id);
            self.stats.record_evictions(1);
        }
        self.stats.record_miss();
        None
    }

    /// Caches `employee` under `id`, evicting the least recently used
    /// entry when at capacity. Refused, returning false, if an eviction
    /// happened since `generation` was read.
    pub fn put_by_id(&mut self, id: &str, employee: Employee, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        if !self.by_id.contains_key(id) && self.by_id.len() >= self.max_entries {
            if let Some(oldest) = self.lru.evict_oldest() {
                self.by_id.remove(&oldest);
                self.stats.record_evictions(1);
            }
        }
        self.by_id
            .insert(id.to_string(), CacheEntry::new(employee, self.ttl));
        self.lru.touch(id);
        true
    }

    /// Drops the entry for `id`. Returns whether one was present.
    pub fn evict_by_id(&mut self, id: &str) -> bool {
        self.generation += 1;
        let evicted = self.by_id.remove(id).is_some();
        if evicted {
            self.lru.remove(id);
            self.stats.record_evictions(1);
        }
        evicted
    }

    // == Cleanup Expired ==
    /// Removes every expired entry. Returns the number removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_ids: Vec<String> = self
            .by_id
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(id, _)| id.clone())
            .collect();

        let mut removed = expired_ids.len();
        for id in expired_ids {
            self.by_id.remove(&id);
            self.lru.remove(&id);
        }

        if self.all.as_ref().is_some_and(CacheEntry::is_expired) {
            self.all = None;
            removed += 1;
        }

        self.stats.record_evictions(removed);
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.cached_employees = self.by_id.len();
        stats.listing_cached = self.all.is_some();
        stats
    }

    /// Number of per-id entries currently held.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty() && self.all.is_none()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    fn employee(id: &str, name: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: name.to_string(),
            salary: 1000,
            age: 30,
            title: "Engineer".to_string(),
            email: format!("{}@example.com", id),
        }
    }

    #[test]
    fn test_cache_new() {
        let cache = EmployeeCache::new(10, None);
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_listing_read_through() {
        let mut cache = EmployeeCache::new(10, None);
        assert!(cache.get_all().is_none());

        cache.put_all(vec![employee("1", "John Doe")], 0);
        let listing = cache.get_all().unwrap();
        assert_eq!(listing.len(), 1);

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert!(stats.listing_cached);
    }

    #[test]
    fn test_evict_all() {
        let mut cache = EmployeeCache::new(10, None);
        cache.put_all(vec![employee("1", "John Doe")], 0);
        cache.put_by_id("1", employee("1", "John Doe"), 0);

        assert!(cache.evict_all());
        assert!(!cache.evict_all());
        assert!(cache.get_all().is_none());
        // listing eviction leaves per-id entries alone
        assert!(cache.get_by_id("1").is_some());
    }

    #[test]
    fn test_by_id_read_through_and_evict() {
        let mut cache = EmployeeCache::new(10, None);
        assert!(cache.get_by_id("1").is_none());

        cache.put_by_id("1", employee("1", "John Doe"), 0);
        assert_eq!(cache.get_by_id("1").unwrap().name, "John Doe");

        assert!(cache.evict_by_id("1"));
        assert!(!cache.evict_by_id("1"));
        assert!(cache.get_by_id("1").is_none());
    }

    #[test]
    fn test_refill_after_eviction_is_refused() {
        let mut cache = EmployeeCache::new(10, None);
        let generation = cache.generation();

        // eviction lands while the caller is still fetching
        cache.evict_all();
        assert!(!cache.put_all(vec![employee("1", "Stale")], generation));
        assert!(!cache.put_by_id("1", employee("1", "Stale"), generation));
        assert!(cache.is_empty());

        let generation = cache.generation();
        assert!(cache.put_all(vec![employee("1", "Fresh")], generation));
        assert_eq!(cache.get_all().unwrap()[0].name, "Fresh");
    }

    #[test]
    fn test_evict_by_id_bumps_generation() {
        let mut cache = EmployeeCache::new(10, None);
        let generation = cache.generation();
        cache.evict_by_id("missing");
        assert_ne!(cache.generation(), generation);
        assert!(!cache.put_by_id("missing", employee("missing", "A"), generation));
    }

    #[test]
    fn test_by_id_overwrite() {
        let mut cache = EmployeeCache::new(10, None);
        cache.put_by_id("1", employee("1", "John Doe"), 0);
        cache.put_by_id("1", employee("1", "John Q. Doe"), 0);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get_by_id("1").unwrap().name, "John Q. Doe");
    }

    #[test]
    fn test_by_id_lru_capacity() {
        let mut cache = EmployeeCache::new(2, None);
        cache.put_by_id("1", employee("1", "A"), 0);
        cache.put_by_id("2", employee("2", "B"), 0);
        // touch 1 so 2 becomes the oldest
        cache.get_by_id("1").unwrap();
        cache.put_by_id("3", employee("3", "C"), 0);

        assert_eq!(cache.len(), 2);
        assert!(cache.get_by_id("2").is_none());
        assert!(cache.get_by_id("1").is_some());
        assert!(cache.get_by_id("3").is_some());
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_ttl_expiration() {
        let mut cache = EmployeeCache::new(10, Some(1));
        cache.put_all(vec![employee("1", "A")], 0);
        cache.put_by_id("1", employee("1", "A"), 0);
        assert!(cache.get_all().is_some());

        sleep(Duration::from_millis(1100));

        assert!(cache.get_all().is_none());
        assert!(cache.get_by_id("1").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cleanup_expired() {
        let mut cache = EmployeeCache::new(10, Some(1));
        cache.put_all(vec![employee("1", "A")], 0);
        cache.put_by_id("1", employee("1", "A"), 0);
        cache.put_by_id("2", employee("2", "B"), 0);

        sleep(Duration::from_millis(1100));

        assert_eq!(cache.cleanup_expired(), 3);
        assert!(cache.is_empty());
        assert_eq!(cache.stats().evictions, 3);
    }

    #[test]
    fn test_cleanup_without_ttl_keeps_entries() {
        let mut cache = EmployeeCache::new(10, None);
        cache.put_all(vec![employee("1", "A")], 0);
        cache.put_by_id("1", employee("1", "A"), 0);
        assert_eq!(cache.cleanup_expired(), 0);
        assert!(cache.stats().listing_cached);
        assert_eq!(cache.len(), 1);
    }
}
