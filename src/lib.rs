//! Meme board REST backend: users, memes, comments, and likes over PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::AppError;
pub use routes::app;
pub use service::{MemeService, UserService};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables};
