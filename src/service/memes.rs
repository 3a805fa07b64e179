//! Meme queries: list with comments, nested create, atomic like toggle.

use crate::error::{is_unique_violation, AppError};
use crate::models::{Comment, Meme, MemeRow, NewMeme};
use crate::store::encode_tags;
use sqlx::PgPool;
use std::collections::HashMap;

const MEME_COLUMNS: &str =
    "meme_id, title, src, url, created_date, pageview, total_like_count, liked_user, tags, hashtag, created_at";

pub struct MemeService;

impl MemeService {
    /// All memes, oldest first, with their comments attached. Comments are
    /// batch-loaded in a single `meme_id = ANY($1)` query and grouped per meme.
    pub async fn list(pool: &PgPool) -> Result<Vec<Meme>, AppError> {
        let rows = sqlx::query_as::<_, MemeRow>(&format!(
            "SELECT {} FROM memes ORDER BY created_at ASC",
            MEME_COLUMNS
        ))
        .fetch_all(pool)
        .await?;

        let ids: Vec<i64> = rows.iter().map(|r| r.meme_id).collect();
        let mut by_meme = Self::comments_for(pool, &ids).await?;
        Ok(rows
            .into_iter()
            .map(|r| {
                let comments = by_meme.remove(&r.meme_id).unwrap_or_default();
                r.into_meme(comments)
            })
            .collect())
    }

    /// Insert the meme and any supplied comments in one transaction; comments
    /// inherit the parent meme_id. The PRIMARY KEY on meme_id is the only
    /// duplicate check; a violation leaves the original row and its comments
    /// untouched and maps to 409.
    pub async fn create(pool: &PgPool, new: &NewMeme) -> Result<(), AppError> {
        let mut tx = pool.begin().await?;
        let inserted = sqlx::query(
            r"
            INSERT INTO memes (meme_id, title, src, url, created_date, pageview,
                               total_like_count, liked_user, tags, hashtag)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(new.meme_id)
        .bind(&new.title)
        .bind(&new.src)
        .bind(&new.url)
        .bind(&new.created_date)
        .bind(new.pageview)
        .bind(new.total_like_count)
        .bind(&new.liked_user)
        .bind(encode_tags(&new.tags))
        .bind(&new.hashtag)
        .execute(&mut *tx)
        .await;

        if let Err(e) = inserted {
            if is_unique_violation(&e) {
                return Err(AppError::Conflict(
                    "Meme already exists with this memeId".to_string(),
                ));
            }
            return Err(e.into());
        }

        for comment in &new.comments {
            sqlx::query(
                r"
                INSERT INTO comments (meme_id, name, content, avatar)
                VALUES ($1, $2, $3, $4)
                ",
            )
            .bind(new.meme_id)
            .bind(&comment.name)
            .bind(&comment.content)
            .bind(&comment.avatar)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Flip `uid` membership in liked_user with one conditional UPDATE, so two
    /// concurrent toggles on the same meme cannot lose each other's writes.
    /// total_like_count is a separately maintained counter and is left alone.
    /// Returns None when no meme has this id.
    pub async fn toggle_like(pool: &PgPool, meme_id: i64, uid: &str) -> Result<Option<Meme>, AppError> {
        let row = sqlx::query_as::<_, MemeRow>(&format!(
            r"
            UPDATE memes
            SET liked_user = CASE
                WHEN $2 = ANY(liked_user) THEN array_remove(liked_user, $2)
                ELSE array_append(liked_user, $2)
            END
            WHERE meme_id = $1
            RETURNING {}
            ",
            MEME_COLUMNS
        ))
        .bind(meme_id)
        .bind(uid)
        .fetch_optional(pool)
        .await?;

        match row {
            Some(row) => {
                let mut by_meme = Self::comments_for(pool, &[meme_id]).await?;
                let comments = by_meme.remove(&meme_id).unwrap_or_default();
                Ok(Some(row.into_meme(comments)))
            }
            None => Ok(None),
        }
    }

    async fn comments_for(pool: &PgPool, meme_ids: &[i64]) -> Result<HashMap<i64, Vec<Comment>>, AppError> {
        if meme_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let comments = sqlx::query_as::<_, Comment>(
            r"
            SELECT id, meme_id, name, content, avatar
            FROM comments
            WHERE meme_id = ANY($1)
            ORDER BY id ASC
            ",
        )
        .bind(meme_ids)
        .fetch_all(pool)
        .await?;

        let mut by_meme: HashMap<i64, Vec<Comment>> = HashMap::new();
        for c in comments {
            by_meme.entry(c.meme_id).or_default().push(c);
        }
        Ok(by_meme)
    }
}
