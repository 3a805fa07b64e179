//! Shared application state for all routes.

use sqlx::PgPool;

/// Constructed once at startup and injected into handlers via axum's `State`
/// extractor; the pool is the only cross-request state.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
