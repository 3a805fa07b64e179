//! Typed services over the PostgreSQL pool, plus request payload validation.

mod memes;
mod users;
mod validation;

pub use memes::MemeService;
pub use users::UserService;
pub use validation::{validate_meme, validate_user};
