//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint. Handlers only bind
//! requests to [`EmployeeService`] calls; errors map to statuses through
//! [`EmployeeError`]'s `IntoResponse`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::info;

use crate::config::Config;
use crate::error::{EmployeeError, Result};
use crate::models::{CreateEmployeeRequest, Employee, HealthResponse, StatsResponse};
use crate::service::EmployeeService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: EmployeeService,
}

impl AppState {
    pub fn new(service: EmployeeService) -> Self {
        Self { service }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the upstream client and an empty cache sized by the Config.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(EmployeeService::from_config(config)?))
    }
}

/// Handler for GET /api/v1/employee
pub async fn list_employees_handler(State(state): State<AppState>) -> Result<Json<Vec<Employee>>> {
    info!("Controller: Getting all employees");
    Ok(Json(state.service.list_all().await?))
}

/// Handler for GET /api/v1/employee/search/:fragment
pub async fn search_employees_handler(
    State(state): State<AppState>,
    Path(fragment): Path<String>,
) -> Result<Json<Vec<Employee>>> {
    info!("Controller: Searching employees by name: {}", fragment);
    Ok(Json(state.service.search_by_name(&fragment).await?))
}

/// Handler for GET /api/v1/employee/:id
pub async fn get_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>> {
    info!("Controller: Getting employee by id {}", id);
    Ok(Json(state.service.get_by_id(&id).await?))
}

/// Handler for GET /api/v1/employee/highestSalary
pub async fn highest_salary_handler(State(state): State<AppState>) -> Result<Json<u32>> {
    info!("Controller: Getting highest salary");
    Ok(Json(state.service.highest_salary().await?))
}

/// Handler for GET /api/v1/employee/topTenHighestEarningEmployeeNames
pub async fn top_earners_handler(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    info!("Controller: Getting top ten employees with highest salary");
    Ok(Json(state.service.top_earner_names().await?))
}

/// Handler for POST /api/v1/employee
///
/// Unparseable bodies are rejected as invalid input, field problems as a
/// per-field validation map.
pub async fn create_employee_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Result<Json<Employee>> {
    let Json(req) = payload.map_err(|rejection| EmployeeError::InvalidArgument(rejection.body_text()))?;
    let new_employee = req.validate()?;

    info!("Controller: Creating employee: {}", new_employee.name);
    Ok(Json(state.service.create(&new_employee).await?))
}

/// Handler for DELETE /api/v1/employee/:id
///
/// Responds with the deleted employee's name as plain text.
pub async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String> {
    info!("Controller: Deleting employee by id: {}", id);
    state.service.delete_by_id(&id).await
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.service.cache_stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
