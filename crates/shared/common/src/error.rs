//! Centralized error handling.
//!
//! Handlers raise an [`AppError`] at the point of failure; the single
//! `IntoResponse` impl below maps every variant to a status code and the
//! serialized error body shared by all services:
//!
//! ```json
//! { "errors": [ { "message": "Email must be valid", "field": "email" } ] }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One entry of the serialized error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub field: Option<String>,
}

impl ErrorEntry {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }

    pub fn for_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errors: Vec<ErrorEntry>,
}

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid request parameters")]
    RequestValidation(Vec<ErrorEntry>),

    #[error("Not authorized")]
    NotAuthorized,

    #[error("Not Found")]
    NotFound,

    #[cfg(feature = "jwt")]
    #[error("Authentication error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Error connecting to database")]
    DatabaseConnection,

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::RequestValidation(_) => StatusCode::BAD_REQUEST,
            AppError::NotAuthorized => StatusCode::UNAUTHORIZED,
            #[cfg(feature = "jwt")]
            AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::DatabaseConnection | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Serialize into client-facing entries (hides internal details)
    pub fn serialize_errors(&self) -> Vec<ErrorEntry> {
        match self {
            AppError::BadRequest(msg) => vec![ErrorEntry::new(msg.clone())],
            AppError::RequestValidation(entries) => entries.clone(),
            #[cfg(feature = "jwt")]
            AppError::Jwt(e) => {
                tracing::error!("JWT error: {:?}", e);
                vec![ErrorEntry::new("Invalid or expired token")]
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                vec![ErrorEntry::new("Something went wrong")]
            }
            _ => vec![ErrorEntry::new(self.to_string())],
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            errors: self.serialize_errors(),
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Password(msg) => {
                AppError::RequestValidation(vec![ErrorEntry::for_field("password", msg)])
            }
            DomainError::InvalidCredentials => {
                AppError::BadRequest(domain::INVALID_CREDENTIALS_MESSAGE.to_string())
            }
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
