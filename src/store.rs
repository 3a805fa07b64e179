//! Database bootstrap (CREATE DATABASE, table DDL) and the tags text codec.
//!
//! `tags` is persisted as serialized JSON text; the encode/decode boundary lives
//! here so nothing above the persistence layer ever sees the raw column.

use crate::error::AppError;
use serde_json::Value;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Idempotent DDL for the three tables. `uid` and `meme_id` uniqueness is enforced
/// by the database, not by pre-read checks; comments are owned by their meme and
/// go away with it.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY,
            display_name TEXT NOT NULL,
            photo_url TEXT NOT NULL,
            uid TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS memes (
            meme_id BIGINT PRIMARY KEY,
            title TEXT NOT NULL,
            src TEXT NOT NULL,
            url TEXT NOT NULL,
            created_date TEXT NOT NULL,
            pageview BIGINT NOT NULL DEFAULT 0,
            total_like_count BIGINT NOT NULL DEFAULT 0,
            liked_user TEXT[] NOT NULL DEFAULT '{}',
            tags TEXT NOT NULL DEFAULT '[]',
            hashtag TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS comments (
            id BIGSERIAL PRIMARY KEY,
            meme_id BIGINT NOT NULL REFERENCES memes(meme_id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            content TEXT NOT NULL,
            avatar TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await
        .map_err(AppError::Db)?;
    if !exists.0 {
        let quoted = quote_ident(&db_name);
        sqlx::query(&format!("CREATE DATABASE {}", quoted))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url.rfind('/').ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))? + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Serialize tags for storage: arrays and objects become JSON text, anything else
/// is stored as an empty array.
pub fn encode_tags(tags: &Value) -> String {
    match tags {
        Value::Array(_) | Value::Object(_) => tags.to_string(),
        _ => "[]".to_string(),
    }
}

/// Parse stored tags text back into structure. Malformed text, an absent value, or
/// a non-container result all normalize to `[]`; a bad row must never fail a request.
pub fn decode_tags(raw: Option<&str>) -> Value {
    raw.and_then(|s| serde_json::from_str::<Value>(s).ok())
        .filter(|v| v.is_array() || v.is_object())
        .unwrap_or_else(|| Value::Array(Vec::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_empty_array_text() {
        assert_eq!(decode_tags(Some("[]")), json!([]));
    }

    #[test]
    fn decode_malformed_text_yields_empty_list() {
        assert_eq!(decode_tags(Some("{not json")), json!([]));
    }

    #[test]
    fn decode_absent_yields_empty_list() {
        assert_eq!(decode_tags(None), json!([]));
    }

    #[test]
    fn decode_scalar_text_yields_empty_list() {
        assert_eq!(decode_tags(Some("5")), json!([]));
        assert_eq!(decode_tags(Some("\"tag\"")), json!([]));
    }

    #[test]
    fn structured_tags_round_trip() {
        let tags = json!([{"id": 1, "title": "cats"}, {"id": 2, "title": "dogs"}]);
        let stored = encode_tags(&tags);
        assert_eq!(decode_tags(Some(&stored)), tags);
    }

    #[test]
    fn encode_non_container_stores_empty_array() {
        assert_eq!(encode_tags(&json!(null)), "[]");
        assert_eq!(encode_tags(&json!("hashtaggy")), "[]");
    }

    #[test]
    fn parse_db_name() {
        let (admin, name) = parse_db_name_from_url("postgres://localhost:5432/memeboard").unwrap();
        assert_eq!(admin, "postgres://localhost:5432/postgres");
        assert_eq!(name, "memeboard");
    }
}
