//! User route handlers.

use crate::error::AppError;
use crate::handlers::body_object;
use crate::models::{NewUser, User};
use crate::service::{validate_user, UserService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use uuid::Uuid;

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::list(&state.pool).await?;
    tracing::debug!(count = users.len(), "listed users");
    Ok(Json(users))
}

/// GET /api/users/:id. A malformed id matches no user and yields the same 404.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<User>, AppError> {
    let not_found = || AppError::NotFound("User not found".to_string());
    let id = Uuid::parse_str(&id_str).map_err(|_| not_found())?;
    let user = UserService::find(&state.pool, id).await?.ok_or_else(not_found)?;
    Ok(Json(user))
}

/// POST /api/users: validate, insert, echo the submitted fields with 201.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let map = body_object(&body)?;
    validate_user(map)?;
    let new: NewUser = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("invalid user payload: {}", e)))?;
    UserService::create(&state.pool, &new).await?;
    tracing::info!(uid = %new.uid, "user created");
    Ok((StatusCode::CREATED, Json(new)))
}
