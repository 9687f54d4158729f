//! Upstream Module
//!
//! Everything that talks to the external employee API lives here. Callers
//! depend on the [`EmployeeUpstream`] trait, so the service can be driven by
//! the real HTTP client or by an in-process fake.

mod client;
mod retry;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Employee, NewEmployee};

pub use client::EmployeeApiClient;
pub use retry::RetryPolicy;

/// Operations offered by the upstream employee API.
///
/// Implementations convert every failure into an [`EmployeeError`](crate::error::EmployeeError)
/// kind; rate limiting is retried before it is surfaced.
#[async_trait]
pub trait EmployeeUpstream: Send + Sync {
    /// Fetches every employee. An absent payload is an empty listing.
    async fn fetch_all(&self) -> Result<Vec<Employee>>;

    /// Fetches one employee, failing with `NotFound` when upstream has no such id.
    async fn fetch_by_id(&self, id: &str) -> Result<Employee>;

    /// Creates an employee and returns the record with its assigned id and email.
    async fn create(&self, employee: &NewEmployee) -> Result<Employee>;

    /// Deletes the employee called `name` and echoes the name back.
    async fn delete_by_name(&self, name: &str) -> Result<String>;
}
