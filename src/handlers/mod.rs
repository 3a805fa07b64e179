//! HTTP handlers for users, memes, and service health.

pub mod common;
pub mod memes;
pub mod users;

use crate::error::AppError;
use serde_json::{Map, Value};

/// POST bodies must be JSON objects; anything else is a 400 before validation runs.
pub(crate) fn body_object(body: &Value) -> Result<&Map<String, Value>, AppError> {
    body.as_object()
        .ok_or_else(|| AppError::BadRequest("body must be a JSON object".to_string()))
}
