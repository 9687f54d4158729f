//! Background Tasks Module
//!
//! # Tasks
//! - Cache expiry sweep: drops expired cache entries when a TTL is configured

mod cleanup;

pub use cleanup::spawn_cleanup_task;
