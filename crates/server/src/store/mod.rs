//! In-memory issue store.
//!
//! Owns every issue and comment plus the counter that hands out their
//! identifiers. One store lives for the lifetime of the process; tests get
//! isolation by creating fresh instances.
//!
//! # Identifiers
//!
//! A single counter starting at 1 backs issue ids, issue numbers and
//! comment ids. Creating an issue consumes two values (`id`, then
//! `number`), creating a comment consumes one, so no two entities ever
//! share a value.
//!
//! # Keys
//!
//! Issues are looked up by `number`. The comment index is keyed by
//! whatever id the caller passes, and issue creation seeds it under the
//! issue's `id`, not its `number`.

mod query;

use std::collections::HashMap;

use chrono::Utc;
use mock_github_core::{
    Comment, CommentId, Issue, IssueId, IssueListQuery, IssueNumber, IssuePatch, NewIssue,
    NotFoundMessage, User,
};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by store lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No issue carries the requested number.
    #[error("Issue not found")]
    IssueNotFound(IssueNumber),
}

/// Result of `update_issue`.
///
/// A miss is reported in-band as a message body rather than as an error,
/// unlike `get_issue`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UpdateOutcome {
    Updated(Box<Issue>),
    NotFound(NotFoundMessage),
}

/// Process-local state behind the mock API.
#[derive(Debug)]
pub struct IssueStore {
    counter: i64,
    issues: Vec<Issue>,
    comments: HashMap<IssueId, Vec<Comment>>,
    current_user: User,
}

impl Default for IssueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueStore {
    /// Create an empty store with the counter at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counter: 1,
            issues: Vec::new(),
            comments: HashMap::new(),
            current_user: User::mock(),
        }
    }

    /// Take the current counter value, then increment.
    fn allocate(&mut self) -> i64 {
        let value = self.counter;
        self.counter += 1;
        value
    }

    /// The synthetic user every entity is attributed to.
    #[must_use]
    pub const fn current_user(&self) -> &User {
        &self.current_user
    }

    /// List issues in creation order, filtered by state and paginated.
    #[must_use]
    pub fn list_issues(&self, query: &IssueListQuery) -> Vec<Issue> {
        query::select(&self.issues, query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Find the first issue with the given number.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IssueNotFound` if no issue has that number.
    pub fn get_issue(&self, number: IssueNumber) -> Result<Issue, StoreError> {
        self.issues
            .iter()
            .find(|issue| issue.number == number)
            .cloned()
            .ok_or_else(|| {
                debug!(%number, "issue lookup missed");
                StoreError::IssueNotFound(number)
            })
    }

    /// Open a new issue and seed its (empty) comment list under its id.
    pub fn create_issue(&mut self, new_issue: NewIssue) -> Issue {
        let id = IssueId::new(self.allocate());
        let number = IssueNumber::new(self.allocate());
        let issue = Issue::new(id, number, new_issue, self.current_user.clone(), Utc::now());

        self.issues.push(issue.clone());
        self.comments.insert(id, Vec::new());

        debug!(%id, %number, "issue created");
        issue
    }

    /// Shallow-merge `patch` into the issue with the given number, in place.
    pub fn update_issue(&mut self, number: IssueNumber, patch: IssuePatch) -> UpdateOutcome {
        let Some(issue) = self.issues.iter_mut().find(|issue| issue.number == number) else {
            debug!(%number, "update target missing");
            return UpdateOutcome::NotFound(NotFoundMessage::issue());
        };

        issue.apply(patch);
        debug!(%number, state = %issue.state, "issue updated");
        UpdateOutcome::Updated(Box::new(issue.clone()))
    }

    /// Comments stored under `issue_id`, empty if there are none.
    #[must_use]
    pub fn list_comments(&self, issue_id: IssueId) -> Vec<Comment> {
        self.comments.get(&issue_id).cloned().unwrap_or_default()
    }

    /// Append a comment under `issue_id`, creating the list if needed.
    pub fn add_comment(&mut self, issue_id: IssueId, body: String) -> Comment {
        let id = CommentId::new(self.allocate());
        let comment = Comment::new(id, body, self.current_user.clone(), Utc::now());

        self.comments
            .entry(issue_id)
            .or_default()
            .push(comment.clone());

        debug!(%issue_id, comment_id = %id, "comment added");
        comment
    }
}
