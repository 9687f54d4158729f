//! Error types for the employee gateway
//!
//! Every failure the facade can surface is one of these kinds. The upstream
//! client converts transport and status detail into them; the service layer
//! passes them through unchanged.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

// == Employee Error Enum ==
/// Unified error type for the employee gateway.
#[derive(Error, Debug)]
pub enum EmployeeError {
    /// Subject id or name is absent upstream
    #[error("{0}")]
    NotFound(String),

    /// Malformed caller input
    #[error("{0}")]
    InvalidArgument(String),

    /// Field-level validation failures, keyed by field name
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(BTreeMap<String, Vec<String>>),

    /// Upstream unreachable or returned an unusable payload
    #[error("{0}")]
    UpstreamUnavailable(String),

    /// Upstream kept answering 429 after every retry attempt
    #[error("{0}")]
    RateLimited(String),

    /// Anything else
    #[error("{0}")]
    Internal(String),
}

impl EmployeeError {
    /// True for the only kind the retry policy acts on.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, EmployeeError::RateLimited(_))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for EmployeeError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            EmployeeError::NotFound(msg) => {
                warn!("Employee not found: {}", msg);
                (StatusCode::NOT_FOUND, json!({ "error": msg }))
            }
            EmployeeError::InvalidArgument(msg) => {
                warn!("Input not valid: {}", msg);
                (StatusCode::BAD_REQUEST, json!({ "error": msg }))
            }
            EmployeeError::Validation(fields) => {
                warn!("Request validation failed: {:?}", fields);
                (StatusCode::BAD_REQUEST, json!(fields))
            }
            EmployeeError::UpstreamUnavailable(msg) => {
                error!("External API error: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    json!({ "error": "Service temporarily unavailable" }),
                )
            }
            EmployeeError::RateLimited(msg) => {
                error!("External API rate limit not cleared by retries: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg }))
            }
            EmployeeError::Internal(msg) => {
                error!("Unexpected error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg }))
            }
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the employee gateway.
pub type Result<T> = std::result::Result<T, EmployeeError>;
