//! Path parameter extraction for issue-scoped routes.

use std::collections::HashMap;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use mock_github_core::{IssueId, IssueNumber};

use crate::error::AppError;

/// The `{issue_number}` path segment, parsed.
///
/// The segment may carry several comma-separated values; only the first is
/// used. `{owner}` and `{repo}` are accepted but never inspected.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(issue: IssuePath) -> String {
///     issue.number().to_string()
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssuePath(i64);

impl IssuePath {
    /// Interpret the segment as an issue number (issue lookups).
    #[must_use]
    pub const fn number(self) -> IssueNumber {
        IssueNumber::new(self.0)
    }

    /// Interpret the segment as an issue id (comment index lookups).
    #[must_use]
    pub const fn issue_id(self) -> IssueId {
        IssueId::new(self.0)
    }
}

impl<S> FromRequestParts<S> for IssuePath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::MalformedIdentifier(rejection.body_text()))?;

        let raw = params.get("issue_number").map_or("", String::as_str);
        parse_issue_number(raw).map(Self)
    }
}

/// Parse the first comma-separated value of an issue number segment.
///
/// # Errors
///
/// Returns `AppError::MalformedIdentifier` if the first value is empty or
/// not an integer.
pub fn parse_issue_number(raw: &str) -> Result<i64, AppError> {
    let first = raw.split(',').next().unwrap_or_default().trim();
    if first.is_empty() {
        return Err(AppError::MalformedIdentifier(
            "Issue number not found".to_string(),
        ));
    }

    first
        .parse::<i64>()
        .map_err(|_| AppError::MalformedIdentifier(format!("invalid issue number '{first}'")))
}
