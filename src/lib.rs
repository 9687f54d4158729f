//! Employee Gateway - a caching REST facade over an upstream employee API
//!
//! Serves employee listings, lookups, search and salary aggregations from a
//! read-through cache, and forwards creations and deletions upstream while
//! invalidating the affected cache entries.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use error::{EmployeeError, Result};
pub use service::EmployeeService;
pub use tasks::spawn_cleanup_task;
