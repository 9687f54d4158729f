//! Employee record as served by the upstream API.

use serde::{Deserialize, Deserializer, Serialize};

/// An employee, identified by its upstream-assigned `id`.
///
/// Field names follow the upstream wire format; the bare names are accepted
/// on input as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    /// Empty when the upstream record carries no name or a null one
    #[serde(rename = "employee_name", alias = "name", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "employee_salary", alias = "salary", default, deserialize_with = "null_as_default")]
    pub salary: u32,
    #[serde(rename = "employee_age", alias = "age", default, deserialize_with = "null_as_default")]
    pub age: u32,
    #[serde(rename = "employee_title", alias = "title", default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "employee_email", alias = "email", default, deserialize_with = "null_as_default")]
    pub email: String,
}

/// Reads a field that upstream may send as `null`, using the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Employee {
    /// Case-insensitive substring match against the employee name.
    ///
    /// `needle` must already be lowercase.
    pub fn name_contains(&self, needle: &str) -> bool {
        !self.name.is_empty() && self.name.to_lowercase().contains(needle)
    }
}
