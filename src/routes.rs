//! Router assembly: route table, cross-origin policy, request tracing.

use crate::config::Config;
use crate::handlers::{common, memes, users};
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn app(state: AppState, config: &Config) -> Router {
    let api = Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/:id", get(users::get_user))
        .route("/hot-meme", get(memes::list_memes).post(memes::create_meme))
        .route("/meme/:meme_id/like", put(memes::toggle_like));

    Router::new()
        .route("/", get(common::root))
        .route("/test-db-connection", get(common::test_db_connection))
        .nest("/api", api)
        .layer(cors_layer(config.cors_origin.as_deref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Cross-origin access is limited to the single configured origin; with no
/// origin configured (or an unparseable one) no cross-origin request is granted.
fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE]);
    match origin {
        Some(o) => match o.parse::<HeaderValue>() {
            Ok(value) => layer.allow_origin(value),
            Err(_) => {
                tracing::warn!(origin = %o, "unparseable CORS_ORIGIN, cross-origin requests disabled");
                layer
            }
        },
        None => layer,
    }
}
