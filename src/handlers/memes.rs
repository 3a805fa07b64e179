//! Meme route handlers: hot-meme list/create and the like toggle.

use crate::error::AppError;
use crate::handlers::body_object;
use crate::models::{Meme, NewMeme};
use crate::service::{validate_meme, MemeService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct MemeList {
    pub data: Vec<Meme>,
}

pub async fn list_memes(State(state): State<AppState>) -> Result<Json<MemeList>, AppError> {
    let data = MemeService::list(&state.pool).await?;
    tracing::debug!(count = data.len(), "listed memes");
    Ok(Json(MemeList { data }))
}

/// POST /api/hot-meme: validate, insert meme plus nested comments, echo the
/// input meme with 201 (tags stay unserialized in the response).
pub async fn create_meme(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let map = body_object(&body)?;
    validate_meme(map)?;
    let new: NewMeme = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("invalid meme payload: {}", e)))?;
    MemeService::create(&state.pool, &new).await?;
    tracing::info!(meme_id = new.meme_id, "meme created");
    Ok((StatusCode::CREATED, Json(new)))
}

/// PUT /api/meme/:memeId/like. A non-numeric id matches no meme and yields 404;
/// the body must carry the liking user's uid.
pub async fn toggle_like(
    State(state): State<AppState>,
    Path(meme_id_str): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Meme>, AppError> {
    let not_found = || AppError::NotFound("Meme not found".to_string());
    let meme_id: i64 = meme_id_str.parse().map_err(|_| not_found())?;
    let uid = body
        .get("uid")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::Validation("uid is required".to_string()))?;
    let meme = MemeService::toggle_like(&state.pool, meme_id, uid)
        .await?
        .ok_or_else(not_found)?;
    tracing::debug!(meme_id, uid = %uid, likes = meme.liked_user.len(), "like toggled");
    Ok(Json(meme))
}
