//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Request payload failed a validation rule (422). The message is the rule's own
    /// text, e.g. "displayName is required".
    #[error("{0}")]
    Validation(String),
    /// Uniqueness violation (409), e.g. "Account already exists with this UID".
    #[error("{0}")]
    Conflict(String),
    /// Missing resource (404), e.g. "User not found".
    #[error("{0}")]
    NotFound(String),
    /// Malformed request outside the validators' scope (400).
    #[error("{0}")]
    BadRequest(String),
    /// Any store failure (500).
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

/// Error body on the wire: always a `message`, plus the underlying error text for 500s.
#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, ErrorBody { message: msg.clone(), error: None }),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, ErrorBody { message: msg.clone(), error: None }),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorBody { message: msg.clone(), error: None }),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorBody { message: msg.clone(), error: None }),
            AppError::Db(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    message: "Internal Server Error".to_string(),
                    error: Some(e.to_string()),
                },
            ),
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(body)).into_response()
    }
}

/// True when the error is a PostgreSQL unique-constraint violation (SQLSTATE 23505).
/// Inserts rely on this instead of a pre-read, so a concurrent duplicate still maps to 409.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .and_then(|db| db.code())
        .map(|code| code == "23505")
        .unwrap_or(false)
}
