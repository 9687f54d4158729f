//! API Module
//!
//! HTTP handlers and routing for the employee gateway REST API.

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{create_router, EMPLOYEE_BASE_PATH};
