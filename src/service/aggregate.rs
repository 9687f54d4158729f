//! Derived queries over an employee listing.
//!
//! Pure functions; the service feeds them its (possibly cached) listing.

use crate::error::{EmployeeError, Result};
use crate::models::Employee;

/// Number of names returned by [`top_earner_names`].
pub const TOP_EARNERS_LIMIT: usize = 10;

/// Employees whose name contains `fragment`, ignoring case, in listing order.
///
/// Fails with `InvalidArgument` when `fragment` is empty or whitespace.
pub fn search_by_name(employees: &[Employee], fragment: &str) -> Result<Vec<Employee>> {
    validate_fragment(fragment)?;

    let needle = fragment.to_lowercase();
    Ok(employees
        .iter()
        .filter(|employee| employee.name_contains(&needle))
        .cloned()
        .collect())
}

/// Rejects an empty or whitespace-only search fragment.
pub fn validate_fragment(fragment: &str) -> Result<()> {
    if fragment.trim().is_empty() {
        return Err(EmployeeError::InvalidArgument(
            "Search term cannot be null or empty".to_string(),
        ));
    }
    Ok(())
}

/// Highest salary in the listing, 0 when it is empty.
pub fn highest_salary(employees: &[Employee]) -> u32 {
    employees.iter().map(|e| e.salary).max().unwrap_or(0)
}

/// Names of the best-paid employees, highest salary first.
///
/// Equal salaries keep their listing order.
pub fn top_earner_names(employees: &[Employee]) -> Vec<String> {
    let mut ranked: Vec<&Employee> = employees.iter().collect();
    ranked.sort_by(|a, b| b.salary.cmp(&a.salary));
    ranked
        .into_iter()
        .take(TOP_EARNERS_LIMIT)
        .map(|e| e.name.clone())
        .collect()
}
