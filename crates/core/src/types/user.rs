//! The synthetic current user.

use serde::{Deserialize, Serialize};

use super::id::UserId;

/// An account as returned by `GET /user` and embedded in issues and comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub id: UserId,
    pub avatar_url: String,
    pub name: String,
    pub email: String,
}

impl User {
    /// The single actor every issue and comment is attributed to.
    #[must_use]
    pub fn mock() -> Self {
        Self {
            login: "test".to_string(),
            id: UserId::new(1),
            avatar_url: "https://i.pravatar.cc/128".to_string(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        }
    }
}
