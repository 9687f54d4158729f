//! Service Module
//!
//! The employee service and the pure aggregation functions it builds on.

pub mod aggregate;
mod employee_service;


pub use employee_service::EmployeeService;
