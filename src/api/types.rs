//! Wire types for the posts API.
//!
//! Server payloads are decoded into loose `Wire*` shapes first and then
//! validated into [`Post`], so a malformed response never reaches the view.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;

/// Publication state of a post. Only ever moves `Draft` -> `Published`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "DRAFT",
            PostStatus::Published => "PUBLISHED",
        }
    }

    /// Whether the publish action applies to a post in this state.
    pub fn can_publish(&self) -> bool {
        *self != PostStatus::Published
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server-assigned post identifier. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Returns `None` for an empty (never persisted) id.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted post as returned by `GET /api`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub status: PostStatus,
}

/// Ids arrive as strings from document stores and as integers from SQL
/// backends; both are normalized to text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Number(i64),
}

impl WireId {
    fn into_string(self) -> String {
        match self {
            WireId::Text(text) => text,
            WireId::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WirePost {
    #[serde(alias = "_id")]
    id: Option<WireId>,
    title: String,
    content: String,
    status: PostStatus,
}

impl TryFrom<(usize, WirePost)> for Post {
    type Error = ApiError;

    fn try_from((index, wire): (usize, WirePost)) -> Result<Self, Self::Error> {
        let id = wire
            .id
            .map(WireId::into_string)
            .and_then(PostId::new)
            .ok_or(ApiError::InvalidPost {
                index,
                reason: "missing or empty id",
            })?;
        Ok(Post {
            id,
            title: wire.title,
            content: wire.content,
            status: wire.status,
        })
    }
}

/// Decode and validate a post listing body.
pub fn decode_post_list(bytes: &[u8]) -> Result<Vec<Post>, ApiError> {
    let wire: Vec<WirePost> = serde_json::from_slice(bytes).map_err(ApiError::Decode)?;
    wire.into_iter().enumerate().map(Post::try_from).collect()
}

/// Body of `POST /api`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub status: PostStatus,
}

/// Body of `PUT /api/{id}` for a full edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub status: PostStatus,
}

/// Partial `PUT /api/{id}` body for publishing. The server merges it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusPatch {
    pub status: PostStatus,
}

impl StatusPatch {
    pub fn published() -> Self {
        Self {
            status: PostStatus::Published,
        }
    }
}
