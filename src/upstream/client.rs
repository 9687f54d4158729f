//! Upstream HTTP Client
//!
//! reqwest-backed client for the external employee API. Sole owner of the
//! network; converts transport and status failures into domain errors.

use async_trait::async_trait;
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{error, info, warn};

use super::{EmployeeUpstream, RetryPolicy};
use crate::config::Config;
use crate::error::{EmployeeError, Result};
use crate::models::{ApiResponse, DeleteEmployeeInput, Employee, NewEmployee};

/// Client for the upstream `/api/v1/employee` resource.
#[derive(Debug, Clone)]
pub struct EmployeeApiClient {
    http: reqwest::Client,
    base_url: Url,
    retry: RetryPolicy,
}

impl EmployeeApiClient {
    /// Creates a client for `base_url` (e.g. `http://localhost:8112/api/v1/employee`).
    pub fn new(base_url: impl Into<String>, retry: RetryPolicy) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|err| EmployeeError::Internal(format!("Failed to build HTTP client: {}", err)))?;
        let base_url = base_url.into();
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| EmployeeError::Internal(format!("Invalid upstream base URL: {}", base_url)))?;

        Ok(Self {
            http,
            base_url,
            retry,
        })
    }

    /// Creates a client from the gateway configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.upstream_base_url.clone(),
            RetryPolicy::new(config.retry_max_attempts, config.retry_wait()),
        )
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// URL of a single employee. The id becomes one percent-encoded path
    /// segment; ids that would not name a segment cannot exist upstream.
    fn employee_url(&self, id: &str) -> Result<Url> {
        if matches!(id, "" | "." | "..") {
            return Err(not_found_by_id(id));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| EmployeeError::Internal(format!("Invalid upstream base URL: {}", self.base_url)))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    /// Sends one attempt, turning transport errors into `on_failure` and a
    /// 429 into `RateLimited`.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        action: &str,
        on_failure: fn(String) -> EmployeeError,
    ) -> Result<Response> {
        let response = request.send().await.map_err(|err| {
            error!("Error calling employee API to {}: {}", action, err);
            on_failure(format!("Failed to {}", action))
        })?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            warn!("Too many requests (429) while trying to {}, will retry", action);
            return Err(EmployeeError::RateLimited(format!(
                "Too many requests while trying to {}",
                action
            )));
        }

        Ok(response)
    }
}

/// Reads the `{data, status}` envelope and returns `data`.
///
/// An empty body or a null `data` yields `Ok(None)`; an unreadable or
/// malformed body yields the underlying message.
async fn read_data<T: DeserializeOwned>(response: Response) -> std::result::Result<Option<T>, String> {
    let bytes = response.bytes().await.map_err(|err| err.to_string())?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    let envelope: ApiResponse<T> = serde_json::from_slice(&bytes).map_err(|err| err.to_string())?;
    Ok(envelope.data)
}

#[async_trait]
impl EmployeeUpstream for EmployeeApiClient {
    async fn fetch_all(&self) -> Result<Vec<Employee>> {
        self.retry
            .run("fetch_all", move || async move {
                info!("Fetching all employees from external API");
                let response = self
                    .send(
                        self.http.get(self.base_url.clone()),
                        "fetch employees",
                        EmployeeError::UpstreamUnavailable,
                    )
                    .await?;

                let status = response.status();
                if !status.is_success() {
                    error!("Unexpected status fetching employees: {}", status);
                    return Err(EmployeeError::UpstreamUnavailable(
                        "Error while fetching employees".to_string(),
                    ));
                }

                match read_data::<Vec<Employee>>(response).await {
                    Ok(Some(employees)) => {
                        info!("Successfully fetched {} employees", employees.len());
                        Ok(employees)
                    }
                    Ok(None) => {
                        warn!("API returned empty response");
                        Ok(Vec::new())
                    }
                    Err(err) => {
                        error!("Unreadable employee listing: {}", err);
                        Err(EmployeeError::UpstreamUnavailable(
                            "Error while fetching employees".to_string(),
                        ))
                    }
                }
            })
            .await
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Employee> {
        let url = &self.employee_url(id)?;
        self.retry
            .run("fetch_by_id", move || async move {
                info!("Fetching employee with id: {}", id);
                let response = self
                    .send(
                        self.http.get(url.clone()),
                        "fetch employee",
                        EmployeeError::UpstreamUnavailable,
                    )
                    .await?;

                let status = response.status();
                if status == StatusCode::NOT_FOUND {
                    warn!("Employee not found (404) for id: {}", id);
                    return Err(not_found_by_id(id));
                }
                if !status.is_success() {
                    error!("Unexpected status fetching employee {}: {}", id, status);
                    return Err(EmployeeError::UpstreamUnavailable(
                        "Failed to fetch employee from external API".to_string(),
                    ));
                }

                match read_data::<Employee>(response).await {
                    Ok(Some(employee)) => {
                        info!("Successfully fetched employee: {}", employee.id);
                        Ok(employee)
                    }
                    Ok(None) => {
                        warn!("No employee found in API response for id: {}", id);
                        Err(not_found_by_id(id))
                    }
                    Err(err) => {
                        error!("Unreadable employee payload for id {}: {}", id, err);
                        Err(EmployeeError::UpstreamUnavailable(
                            "Failed to fetch employee from external API".to_string(),
                        ))
                    }
                }
            })
            .await
    }

    async fn create(&self, employee: &NewEmployee) -> Result<Employee> {
        self.retry
            .run("create", move || async move {
                info!("Creating employee: {}", employee.name);
                let response = self
                    .send(
                        self.http.post(self.base_url.clone()).json(employee),
                        "create employee",
                        EmployeeError::UpstreamUnavailable,
                    )
                    .await?;

                let status = response.status();
                if !status.is_success() {
                    error!("Unexpected status creating employee: {}", status);
                    return Err(create_failed());
                }

                match read_data::<Employee>(response).await {
                    Ok(Some(created)) => {
                        info!("Successfully created employee: {}", created.name);
                        Ok(created)
                    }
                    Ok(None) => {
                        error!("API returned no employee for a successful create");
                        Err(create_failed())
                    }
                    Err(err) => {
                        error!("Unreadable create response: {}", err);
                        Err(create_failed())
                    }
                }
            })
            .await
    }

    async fn delete_by_name(&self, name: &str) -> Result<String> {
        self.retry
            .run("delete_by_name", move || async move {
                info!("Deleting employee: {}", name);
                let response = self
                    .send(
                        self.http
                            .delete(self.base_url.clone())
                            .json(&DeleteEmployeeInput { name }),
                        "delete employee",
                        EmployeeError::Internal,
                    )
                    .await?;

                let status = response.status();
                if !status.is_success() {
                    error!("Unexpected status deleting employee {}: {}", name, status);
                    return Err(EmployeeError::Internal("Failed to delete employee".to_string()));
                }

                match read_data::<bool>(response).await {
                    Ok(Some(true)) => {
                        info!("Successfully deleted employee: {}", name);
                        Ok(name.to_string())
                    }
                    Ok(Some(false)) => {
                        warn!("Employee with name {} doesn't exist", name);
                        Err(EmployeeError::NotFound(format!("Employee not found: {}", name)))
                    }
                    Ok(None) => {
                        error!("API returned no deletion result for {}", name);
                        Err(EmployeeError::Internal("Failed to delete employee".to_string()))
                    }
                    Err(err) => {
                        error!("Unreadable delete response for {}: {}", name, err);
                        Err(EmployeeError::Internal("Failed to delete employee".to_string()))
                    }
                }
            })
            .await
    }
}

fn not_found_by_id(id: &str) -> EmployeeError {
    EmployeeError::NotFound(format!("Employee not found with id: {}", id))
}

fn create_failed() -> EmployeeError {
    EmployeeError::UpstreamUnavailable("Failed to create employee".to_string())
}
