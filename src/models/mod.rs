//! Data models for the employee gateway
//!
//! This module defines the employee record, the DTOs used for
//! serializing/deserializing HTTP bodies, and the upstream API envelope.

pub mod employee;
pub mod requests;
pub mod responses;
pub mod upstream;

// Re-export commonly used types
pub use employee::Employee;
pub use requests::{CreateEmployeeRequest, NewEmployee};
pub use responses::{HealthResponse, StatsResponse};
pub use upstream::{ApiResponse, DeleteEmployeeInput};
