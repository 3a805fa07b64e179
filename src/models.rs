//! Wire and row types for users, memes, and comments.
//!
//! Wire field names are pinned by serde renames: the frontend contract mixes
//! camelCase (`displayName`, `photoURL`, `memeId`) and snake_case
//! (`created_date`, `total_like_count`, `liked_user`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    pub uid: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Fields accepted by POST /api/users; id and createdAt are server-assigned.
/// Serialized back as the 201 response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    pub uid: String,
    pub email: String,
}

/// A meme as returned by the API: tags already decoded into structure and
/// comments attached (empty list when there are none).
#[derive(Debug, Clone, Serialize)]
pub struct Meme {
    #[serde(rename = "memeId")]
    pub meme_id: i64,
    pub title: String,
    pub src: String,
    pub url: String,
    pub created_date: String,
    pub pageview: i64,
    pub total_like_count: i64,
    pub liked_user: Vec<String>,
    pub tags: Value,
    pub hashtag: Option<String>,
    pub comments: Vec<Comment>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Raw memes row; `tags` is still serialized text here.
#[derive(Debug, Clone, FromRow)]
pub struct MemeRow {
    pub meme_id: i64,
    pub title: String,
    pub src: String,
    pub url: String,
    pub created_date: String,
    pub pageview: i64,
    pub total_like_count: i64,
    pub liked_user: Vec<String>,
    pub tags: Option<String>,
    pub hashtag: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MemeRow {
    pub fn into_meme(self, comments: Vec<Comment>) -> Meme {
        Meme {
            meme_id: self.meme_id,
            title: self.title,
            src: self.src,
            url: self.url,
            created_date: self.created_date,
            pageview: self.pageview,
            total_like_count: self.total_like_count,
            liked_user: self.liked_user,
            tags: crate::store::decode_tags(self.tags.as_deref()),
            hashtag: self.hashtag,
            comments,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub id: i64,
    #[serde(rename = "memeId")]
    pub meme_id: i64,
    pub name: String,
    pub content: String,
    pub avatar: Option<String>,
}

/// Fields accepted by POST /api/hot-meme. Counters and the liked-by set default
/// to empty; the 201 response echoes this object with tags left unserialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMeme {
    #[serde(rename = "memeId")]
    pub meme_id: i64,
    pub title: String,
    pub src: String,
    pub url: String,
    pub created_date: String,
    #[serde(default)]
    pub pageview: i64,
    #[serde(default)]
    pub total_like_count: i64,
    #[serde(default)]
    pub liked_user: Vec<String>,
    #[serde(default)]
    pub tags: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtag: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<NewComment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    pub name: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
