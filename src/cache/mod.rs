//! Cache Module
//!
//! In-memory read-through cache for the employee service: one slot for the
//! full listing plus a bounded, LRU-evicted map of employees by id.

mod entry;
mod lru;
mod stats;
mod store;

// Re-export public types
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::EmployeeCache;
