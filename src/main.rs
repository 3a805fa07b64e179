//! Server entrypoint: tracing, .env, config, pool, bootstrap DDL, serve.

use meme_board::{app, ensure_database_exists, ensure_tables, AppState, Config};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("meme_board=info".parse()?))
        .init();

    match dotenvy::dotenv() {
        Ok(path) => tracing::info!(".env loaded from {}", path.display()),
        Err(_) => tracing::info!("no .env file, relying on environment variables"),
    }

    let config = Config::from_env();
    ensure_database_exists(&config.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    ensure_tables(&pool).await?;

    let state = AppState::new(pool);
    let app = app(state, &config);

    let listener = TcpListener::bind(config.listen_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
