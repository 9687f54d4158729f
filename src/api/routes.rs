//! API Routes
//!
//! Configures the Axum router with all gateway endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_employee_handler, delete_employee_handler, get_employee_handler, health_handler,
    highest_salary_handler, list_employees_handler, search_employees_handler, stats_handler,
    top_earners_handler, AppState,
};

/// Base path of the employee resource
pub const EMPLOYEE_BASE_PATH: &str = "/api/v1/employee";

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/v1/employee` - All employees
/// - `POST /api/v1/employee` - Create an employee
/// - `GET /api/v1/employee/search/:fragment` - Name search
/// - `GET /api/v1/employee/highestSalary` - Highest salary
/// - `GET /api/v1/employee/topTenHighestEarningEmployeeNames` - Top earners
/// - `GET /api/v1/employee/:id` - One employee
/// - `DELETE /api/v1/employee/:id` - Delete, responds with the name
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let employees = Router::new()
        .route("/", get(list_employees_handler).post(create_employee_handler))
        .route("/search/:fragment", get(search_employees_handler))
        .route("/highestSalary", get(highest_salary_handler))
        .route(
            "/topTenHighestEarningEmployeeNames",
            get(top_earners_handler),
        )
        .route(
            "/:id",
            get(get_employee_handler).delete(delete_employee_handler),
        );

    Router::new()
        .nest(EMPLOYEE_BASE_PATH, employees)
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
