//! Root greeting and the database connectivity probe.

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello, World!" }))
}

/// GET /test-db-connection: one trivial query; any failure surfaces as 500.
pub async fn test_db_connection(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    sqlx::query("SELECT 1").fetch_one(&state.pool).await?;
    Ok(Json(json!({ "message": "Database connection successful!" })))
}
