//! Request parameters accepted by the issue operations.
//!
//! Nothing here is validated beyond what serde needs to build the struct;
//! bodies are accepted as given.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::status::IssueState;
use super::user::User;

/// Body of `POST /repos/{owner}/{repo}/issues`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIssue {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
}

/// Query string of `GET /repos/{owner}/{repo}/issues`.
///
/// Values are kept as the raw strings the client sent and interpreted by
/// the store, so a bad value narrows the listing instead of failing the
/// request. `page` is 1-indexed and only honored when `limit` is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IssueListQuery {
    pub state: Option<String>,
    #[serde(alias = "per_page")]
    pub limit: Option<String>,
    pub page: Option<String>,
}

impl IssueListQuery {
    /// Only issues in `state`.
    #[must_use]
    pub fn with_state(state: IssueState) -> Self {
        Self {
            state: Some(state.to_string()),
            ..Self::default()
        }
    }

    /// Page `page` of `limit` issues.
    #[must_use]
    pub fn paged(limit: usize, page: usize) -> Self {
        Self {
            state: None,
            limit: Some(limit.to_string()),
            page: Some(page.to_string()),
        }
    }
}

/// Body of `PATCH /repos/{owner}/{repo}/issues/{issue_number}`.
///
/// Every field is optional. Nullable fields use `Option<Option<_>>` so an
/// explicit `null` can be told apart from an absent key. On the remaining
/// fields `null` reads the same as an absent key and leaves the value alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IssuePatch {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub body: Option<Option<String>>,
    pub state: Option<IssueState>,
    pub node_id: Option<String>,
    pub url: Option<String>,
    pub repository_url: Option<String>,
    pub labels_url: Option<String>,
    pub comments_url: Option<String>,
    pub events_url: Option<String>,
    pub html_url: Option<String>,
    pub user: Option<User>,
    pub labels: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "present")]
    pub assignee: Option<Option<Value>>,
    #[serde(default, deserialize_with = "present")]
    pub milestone: Option<Option<Value>>,
    #[serde(default, deserialize_with = "present_timestamp")]
    pub closed_at: Option<Option<DateTime<Utc>>>,
    #[serde(default, with = "super::timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    pub locked: Option<bool>,
    #[serde(default, with = "super::timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "present")]
    pub closed_by: Option<Option<Value>>,
    pub comments: Option<i64>,
    pub author_association: Option<String>,
}

/// Body returned instead of an issue when a lookup misses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotFoundMessage {
    pub message: String,
}

impl NotFoundMessage {
    /// The message the real service uses for a missing issue.
    #[must_use]
    pub fn issue() -> Self {
        Self {
            message: "Issue not found".to_string(),
        }
    }
}

/// Called only when the key is present, so `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn present_timestamp<'de, D>(deserializer: D) -> Result<Option<Option<DateTime<Utc>>>, D::Error>
where
    D: Deserializer<'de>,
{
    super::timestamp::option::deserialize(deserializer).map(Some)
}
