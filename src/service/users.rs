//! User queries: list, find by id, constraint-backed create.

use crate::error::{is_unique_violation, AppError};
use crate::models::{NewUser, User};
use sqlx::PgPool;
use uuid::Uuid;

pub struct UserService;

impl UserService {
    /// All users, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            r"
            SELECT id, display_name, photo_url, uid, email, created_at
            FROM users
            ORDER BY created_at ASC
            ",
        )
        .fetch_all(pool)
        .await?;
        Ok(users)
    }

    pub async fn find(pool: &PgPool, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r"
            SELECT id, display_name, photo_url, uid, email, created_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(user)
    }

    /// Insert a user with a server-assigned id. The UNIQUE constraint on `uid` is
    /// the only duplicate check, so a concurrent duplicate still maps to 409.
    pub async fn create(pool: &PgPool, new: &NewUser) -> Result<User, AppError> {
        let result = sqlx::query_as::<_, User>(
            r"
            INSERT INTO users (id, display_name, photo_url, uid, email)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, display_name, photo_url, uid, email, created_at
            ",
        )
        .bind(Uuid::new_v4())
        .bind(&new.display_name)
        .bind(&new.photo_url)
        .bind(&new.uid)
        .bind(&new.email)
        .fetch_one(pool)
        .await;
        match result {
            Ok(user) => Ok(user),
            Err(e) if is_unique_violation(&e) => Err(AppError::Conflict(
                "Account already exists with this UID".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }
}
