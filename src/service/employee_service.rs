//! Employee Service
//!
//! Read-through caching and cache invalidation over the upstream API, plus
//! the derived queries (search, highest salary, top earners).

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::{CacheStats, EmployeeCache};
use crate::config::Config;
use crate::error::Result;
use crate::models::{Employee, NewEmployee};
use crate::service::aggregate;
use crate::upstream::{EmployeeApiClient, EmployeeUpstream};

/// Query and mutation operations over employees.
///
/// The cache lock is never held across an upstream call. Two concurrent
/// misses may both fetch; the later result simply replaces the earlier one.
/// A fetch that overlaps an eviction is returned but not cached.
#[derive(Clone)]
pub struct EmployeeService {
    upstream: Arc<dyn EmployeeUpstream>,
    cache: Arc<RwLock<EmployeeCache>>,
}

impl EmployeeService {
    /// Creates a service over `upstream` using `cache` as its initial cache.
    pub fn new(upstream: Arc<dyn EmployeeUpstream>, cache: EmployeeCache) -> Self {
        Self {
            upstream,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a service backed by the HTTP client described by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = EmployeeApiClient::from_config(config)?;
        let cache = EmployeeCache::new(config.max_cached_employees, config.cache_ttl());
        Ok(Self::new(Arc::new(client), cache))
    }

    /// Shared handle to the cache, for the expiry sweep.
    pub fn cache(&self) -> Arc<RwLock<EmployeeCache>> {
        Arc::clone(&self.cache)
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    // == Queries ==

    /// Full listing, served from cache when present.
    pub async fn list_all(&self) -> Result<Vec<Employee>> {
        info!("Service: Getting all employees");
        let generation = {
            let mut cache = self.cache.write().await;
            if let Some(employees) = cache.get_all() {
                debug!("Serving {} employees from cache", employees.len());
                return Ok(employees);
            }
            cache.generation()
        };

        let employees = self.upstream.fetch_all().await?;
        if !self.cache.write().await.put_all(employees.clone(), generation) {
            debug!("Listing changed during fetch, not caching it");
        }
        Ok(employees)
    }

    /// Employees whose name contains `fragment`, ignoring case.
    pub async fn search_by_name(&self, fragment: &str) -> Result<Vec<Employee>> {
        info!("Service: Searching employees by name fragment: {}", fragment);
        aggregate::validate_fragment(fragment)?;
        let employees = self.list_all().await?;
        aggregate::search_by_name(&employees, fragment)
    }

    /// One employee, served from cache when present.
    pub async fn get_by_id(&self, id: &str) -> Result<Employee> {
        info!("Service: Getting employee by id: {}", id);
        let generation = {
            let mut cache = self.cache.write().await;
            if let Some(employee) = cache.get_by_id(id) {
                debug!("Serving employee {} from cache", id);
                return Ok(employee);
            }
            cache.generation()
        };

        let employee = self.upstream.fetch_by_id(id).await?;
        if !self.cache.write().await.put_by_id(id, employee.clone(), generation) {
            debug!("Employee {} changed during fetch, not caching it", id);
        }
        Ok(employee)
    }

    pub async fn highest_salary(&self) -> Result<u32> {
        info!("Service: Getting highest salary");
        let employees = self.list_all().await?;
        Ok(aggregate::highest_salary(&employees))
    }

    pub async fn top_earner_names(&self) -> Result<Vec<String>> {
        info!("Service: Getting top 10 highest earning employees");
        let employees = self.list_all().await?;
        Ok(aggregate::top_earner_names(&employees))
    }

    // == Mutations ==

    /// Creates an employee upstream and drops the cached listing.
    pub async fn create(&self, employee: &NewEmployee) -> Result<Employee> {
        info!("Service: Creating employee: {}", employee.name);
        let created = self.upstream.create(employee).await?;
        self.cache.write().await.evict_all();
        Ok(created)
    }

    /// Deletes the employee with `id` and returns its name.
    ///
    /// Upstream deletes by name, so the id is resolved first; an unknown id
    /// fails with `NotFound` before any delete is attempted. On success both
    /// the per-id entry and the listing are evicted.
    pub async fn delete_by_id(&self, id: &str) -> Result<String> {
        info!("Service: Deleting employee by id: {}", id);
        let employee = self.get_by_id(id).await?;
        let deleted = self.upstream.delete_by_name(&employee.name).await?;

        let mut cache = self.cache.write().await;
        cache.evict_by_id(id);
        cache.evict_all();
        Ok(deleted)
    }
}
