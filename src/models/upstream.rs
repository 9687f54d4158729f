//! Wire types of the upstream employee API.

use serde::{Deserialize, Serialize};

/// Envelope every upstream response is wrapped in: `{data, status}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Body of the upstream DELETE call, which targets employees by name.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteEmployeeInput<'a> {
    pub name: &'a str,
}
