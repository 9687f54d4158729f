//! Bounded retry for rate-limited upstream calls.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::error::Result;

/// Fixed-interval retry applied only to `RateLimited` failures.
///
/// `max_attempts` counts the first call, so `max_attempts == 1` disables
/// retrying. Any other error is returned immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub wait: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            wait: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, wait: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            wait,
        }
    }

    /// Runs `call` until it succeeds, fails with a non-retryable error, or
    /// the attempt budget is spent. The last error is returned as is.
    pub async fn run<T, F, Fut>(&self, operation: &str, mut call: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 1;
        loop {
            match call().await {
                Err(err) if err.is_rate_limited() && attempt < self.max_attempts => {
                    warn!(
                        "{}: rate limited on attempt {}/{}, retrying in {:?}",
                        operation, attempt, self.max_attempts, self.wait
                    );
                    tokio::time::sleep(self.wait).await;
                    attempt += 1;
                }
                outcome => return outcome,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EmployeeError;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio_test::{assert_err, assert_ok};

    fn policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy::new(max_attempts, Duration::from_millis(1))
    }

    #[tokio::test]
    async fn test_success_needs_one_attempt() {
        let calls = AtomicU32::new(0);
        let counter = &calls;
        let result = policy(3)
            .run("op", move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<_, EmployeeError>(7)
            })
            .await;
        assert_eq!(assert_ok!(result), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rate_limit_then_success() {
        let calls = AtomicU32::new(0);
        let counter = &calls;
        let result = policy(3)
            .run("op", move || async move {
                let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
                if n < 3 {
                    Err(EmployeeError::RateLimited("429".into()))
                } else {
                    Ok(n)
                }
            })
            .await;
        assert_eq!(assert_ok!(result), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_rate_limit_exhausts_budget() {
        let calls = AtomicU32::new(0);
        let counter = &calls;
        let result: Result<()> = policy(3)
            .run("op", move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(EmployeeError::RateLimited("429".into()))
            })
            .await;
        assert!(matches!(assert_err!(result), EmployeeError::RateLimited(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_other_errors_are_not_retried() {
        let calls = AtomicU32::new(0);
        let counter = &calls;
        let result: Result<()> = policy(5)
            .run("op", move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(EmployeeError::UpstreamUnavailable("down".into()))
            })
            .await;
        assert!(matches!(
            assert_err!(result),
            EmployeeError::UpstreamUnavailable(_)
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_zero_attempts_means_one() {
        assert_eq!(RetryPolicy::new(0, Duration::ZERO).max_attempts, 1);
    }
}
