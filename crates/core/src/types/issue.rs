//! Issue representation and shallow patch application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::id::{IssueId, IssueNumber};
use super::request::{IssuePatch, NewIssue};
use super::status::IssueState;
use super::user::User;

/// Author association reported for everything the mock user creates.
pub const DEFAULT_AUTHOR_ASSOCIATION: &str = "CONTRIBUTOR";

/// An issue shaped like the real service's issue representation.
///
/// Only `id`, `number`, `title`, `body`, `state` and the timestamps carry
/// behavior; the remaining fields are placeholders that keep clients'
/// deserializers happy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub title: String,
    pub body: Option<String>,
    pub id: IssueId,
    pub number: IssueNumber,
    pub node_id: String,
    pub url: String,
    pub repository_url: String,
    pub labels_url: String,
    pub comments_url: String,
    pub events_url: String,
    pub html_url: String,
    pub user: User,
    pub state: IssueState,
    pub labels: Vec<Value>,
    pub assignee: Option<Value>,
    pub milestone: Option<Value>,
    #[serde(with = "super::timestamp::option")]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
    pub locked: bool,
    #[serde(with = "super::timestamp")]
    pub updated_at: DateTime<Utc>,
    pub closed_by: Option<Value>,
    pub comments: i64,
    pub author_association: String,
}

impl Issue {
    /// Build a freshly opened issue with placeholder defaults.
    #[must_use]
    pub fn new(
        id: IssueId,
        number: IssueNumber,
        new_issue: NewIssue,
        user: User,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            title: new_issue.title,
            body: new_issue.body,
            id,
            number,
            node_id: String::new(),
            url: String::new(),
            repository_url: String::new(),
            labels_url: String::new(),
            comments_url: String::new(),
            events_url: String::new(),
            html_url: String::new(),
            user,
            state: IssueState::Open,
            labels: Vec::new(),
            assignee: None,
            milestone: None,
            closed_at: None,
            created_at: now,
            locked: false,
            updated_at: now,
            closed_by: None,
            comments: 0,
            author_association: DEFAULT_AUTHOR_ASSOCIATION.to_string(),
        }
    }

    /// Overwrite every field present in `patch`.
    ///
    /// Nested values (`user`, `labels`, `assignee`, ...) replace the stored
    /// value wholesale. `id` and `number` are never touched.
    pub fn apply(&mut self, patch: IssuePatch) {
        let IssuePatch {
            title,
            body,
            state,
            node_id,
            url,
            repository_url,
            labels_url,
            comments_url,
            events_url,
            html_url,
            user,
            labels,
            assignee,
            milestone,
            closed_at,
            created_at,
            locked,
            updated_at,
            closed_by,
            comments,
            author_association,
        } = patch;

        replace(&mut self.title, title);
        replace(&mut self.body, body);
        replace(&mut self.state, state);
        replace(&mut self.node_id, node_id);
        replace(&mut self.url, url);
        replace(&mut self.repository_url, repository_url);
        replace(&mut self.labels_url, labels_url);
        replace(&mut self.comments_url, comments_url);
        replace(&mut self.events_url, events_url);
        replace(&mut self.html_url, html_url);
        replace(&mut self.user, user);
        replace(&mut self.labels, labels);
        replace(&mut self.assignee, assignee);
        replace(&mut self.milestone, milestone);
        replace(&mut self.closed_at, closed_at);
        replace(&mut self.created_at, created_at);
        replace(&mut self.locked, locked);
        replace(&mut self.updated_at, updated_at);
        replace(&mut self.closed_by, closed_by);
        replace(&mut self.comments, comments);
        replace(&mut self.author_association, author_association);
    }
}

fn replace<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn sample() -> Issue {
        Issue::new(
            IssueId::new(1),
            IssueNumber::new(2),
            NewIssue {
                title: "Bug".to_string(),
                body: Some("Steps...".to_string()),
            },
            User::mock(),
            Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap(),
        )
    }

    #[test]
    fn test_new_issue_defaults() {
        let issue = sample();
        assert_eq!(issue.state, IssueState::Open);
        assert_eq!(issue.comments, 0);
        assert!(!issue.locked);
        assert!(issue.labels.is_empty());
        assert_eq!(issue.author_association, "CONTRIBUTOR");
        assert_eq!(issue.created_at, issue.updated_at);
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["id"], json!(1));
        assert_eq!(value["number"], json!(2));
        assert_eq!(value["state"], json!("open"));
        assert_eq!(value["assignee"], Value::Null);
        assert_eq!(value["closed_at"], Value::Null);
        assert_eq!(value["created_at"], json!("2026-03-04T05:06:07.000Z"));
        assert_eq!(value["user"]["login"], json!("test"));
    }

    #[test]
    fn test_apply_only_overwrites_present_fields() {
        let mut issue = sample();
        let before = issue.clone();
        let patch: IssuePatch = serde_json::from_value(json!({ "title": "X" })).unwrap();

        issue.apply(patch);

        assert_eq!(issue.title, "X");
        assert_eq!(issue.body, before.body);
        assert_eq!(issue.state, before.state);
        assert_eq!(issue.updated_at, before.updated_at);
    }

    #[test]
    fn test_apply_replaces_nested_values_wholesale() {
        let mut issue = sample();
        issue.assignee = Some(json!({ "login": "a", "id": 5 }));

        let patch: IssuePatch =
            serde_json::from_value(json!({ "assignee": { "login": "b" } })).unwrap();
        issue.apply(patch);

        assert_eq!(issue.assignee, Some(json!({ "login": "b" })));
    }

    #[test]
    fn test_apply_explicit_null_clears_nullable_field() {
        let mut issue = sample();
        let patch: IssuePatch = serde_json::from_value(json!({ "body": null })).unwrap();
        issue.apply(patch);
        assert_eq!(issue.body, None);
    }

    #[test]
    fn test_apply_explicit_null_keeps_non_nullable_fields() {
        let mut issue = sample();
        let before = issue.clone();
        let patch: IssuePatch = serde_json::from_value(json!({
            "title": null,
            "state": null,
            "labels": null,
            "locked": null,
            "comments": null,
            "html_url": null,
        }))
        .unwrap();

        issue.apply(patch);

        assert_eq!(issue, before);
    }

    #[test]
    fn test_apply_ignores_identity_fields() {
        let mut issue = sample();
        let patch: IssuePatch =
            serde_json::from_value(json!({ "id": 99, "number": 100, "state": "closed" })).unwrap();
        issue.apply(patch);

        assert_eq!(issue.id, IssueId::new(1));
        assert_eq!(issue.number, IssueNumber::new(2));
        assert_eq!(issue.state, IssueState::Closed);
    }
}
