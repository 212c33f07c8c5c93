//! Comment representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::CommentId;
use super::issue::DEFAULT_AUTHOR_ASSOCIATION;
use super::user::User;

/// A comment attached to an issue. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub body: String,
    pub user: User,
    pub node_id: String,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
    pub html_url: String,
    #[serde(with = "super::timestamp")]
    pub updated_at: DateTime<Utc>,
    pub url: String,
    pub issue_url: String,
    pub author_association: String,
}

impl Comment {
    /// Build a comment with placeholder defaults.
    #[must_use]
    pub fn new(id: CommentId, body: String, user: User, now: DateTime<Utc>) -> Self {
        Self {
            id,
            body,
            user,
            node_id: String::new(),
            created_at: now,
            html_url: String::new(),
            updated_at: now,
            url: String::new(),
            issue_url: String::new(),
            author_association: DEFAULT_AUTHOR_ASSOCIATION.to_string(),
        }
    }
}
