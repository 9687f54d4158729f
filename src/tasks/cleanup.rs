//! Cache Expiry Sweep
//!
//! Background task that periodically drops expired cache entries, so stale
//! employees do not linger in memory until their next lookup.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::EmployeeCache;

/// Spawns a task that sweeps expired entries every `cleanup_interval_secs`.
///
/// Returns the task handle so shutdown can abort it.
///
/// # Example
/// ```ignore
/// let handle = spawn_cleanup_task(service.cache(), 60);
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<EmployeeCache>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting cache expiry sweep with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.write().await.cleanup_expired();

            if removed > 0 {
                info!("Cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Cache sweep: no expired entries found");
            }
        }
    })
}
