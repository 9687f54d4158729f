//! Request DTOs for the employee gateway
//!
//! Defines the structure of incoming HTTP request bodies.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{EmployeeError, Result};

/// Minimum accepted employee age
pub const MIN_AGE: i64 = 16;
/// Maximum accepted employee age
pub const MAX_AGE: i64 = 75;

/// Request body for creating an employee (POST /api/v1/employee)
///
/// Every field is optional at the wire level so that a missing field
/// produces a field-level validation message instead of a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateEmployeeRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub salary: Option<i64>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
}

/// A create request that passed validation; also the upstream POST body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEmployee {
    pub name: String,
    pub salary: u32,
    pub age: u32,
    pub title: String,
}

impl CreateEmployeeRequest {
    /// Validates the request data.
    ///
    /// Collects every failing field before returning, so callers see all
    /// problems in a single response.
    pub fn validate(&self) -> Result<NewEmployee> {
        let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut reject = |field: &str, msg: &str| {
            errors
                .entry(field.to_string())
                .or_default()
                .push(msg.to_string());
        };

        let name = non_blank(&self.name);
        if name.is_none() {
            reject("name", "Name cannot be blank");
        }

        let salary = match self.salary {
            None => {
                reject("salary", "Salary is required");
                None
            }
            Some(s) if s < 1 => {
                reject("salary", "Salary must be greater than zero");
                None
            }
            Some(s) => match u32::try_from(s) {
                Ok(s) => Some(s),
                Err(_) => {
                    reject("salary", "Salary is out of range");
                    None
                }
            },
        };

        let age = match self.age {
            None => {
                reject("age", "Age is required");
                None
            }
            Some(a) if a < MIN_AGE => {
                reject("age", "Age must be at least 16");
                None
            }
            Some(a) if a > MAX_AGE => {
                reject("age", "Age must be at most 75");
                None
            }
            Some(a) => u32::try_from(a).ok(),
        };

        let title = non_blank(&self.title);
        if title.is_none() {
            reject("title", "Title cannot be blank");
        }

        match (name, salary, age, title) {
            (Some(name), Some(salary), Some(age), Some(title)) if errors.is_empty() => {
                Ok(NewEmployee {
                    name,
                    salary,
                    age,
                    title,
                })
            }
            _ => Err(EmployeeError::Validation(errors)),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}
