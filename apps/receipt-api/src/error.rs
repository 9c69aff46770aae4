//! # API Error Types
//!
//! Errors returned by HTTP handlers, and configuration errors.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Receipt API                            │
//! │                                                                         │
//! │  Handler: ApiResult<Json<T>>                                           │
//! │       │                                                                 │
//! │       ├── body is not JSON ─────────► ApiError::BadRequest   → 400     │
//! │       ├── ValidationError ──────────► ApiError::Validation   → 400     │
//! │       ├── store returns None ───────► ApiError::NotFound     → 404     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  IntoResponse: { "code": "VALIDATION_ERROR", "message": "..." }        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use receipt_core::ValidationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// API Errors
// =============================================================================

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned from a handler.
///
/// ## Serialization
/// This is what the client receives when a request fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "No receipt found for that id"
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The receipt was well-formed JSON but failed a check.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The body could not be read as a receipt at all.
    #[error("{0}")]
    BadRequest(String),

    /// No receipt has that id.
    #[error("No receipt found for that id")]
    NotFound,
}

/// Machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Receipt failed validation (400)
    ValidationError,

    /// Body was not a JSON receipt (400)
    BadRequest,

    /// Unknown receipt id (404)
    NotFound,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    /// HTTP status and code for this error.
    pub fn status_and_code(&self) -> (StatusCode, ErrorCode) {
        match self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, ErrorCode::ValidationError),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, ErrorCode::BadRequest),
            ApiError::NotFound => (StatusCode::NOT_FOUND, ErrorCode::NotFound),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = ErrorResponse {
            code,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Any body the JSON extractor refuses (bad syntax, wrong shape, missing
/// content type) is reported as a bad request.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Why the server configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for [`ApiConfig`](crate::config::ApiConfig).
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// An environment override has an unusable value.
    #[error("Invalid value for {var}: '{value}'")]
    InvalidEnv { var: &'static str, value: String },

    /// A setting is out of range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// =============================================================================
// Tests
// =============================================================================
