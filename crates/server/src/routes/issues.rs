//! Issue route handlers.
//!
//! Each handler locks the store once and runs exactly one store operation.

use axum::{
    Json,
    extract::{Query, State},
};
use mock_github_core::{Issue, IssueListQuery, IssuePatch, NewIssue};
use tracing::instrument;

use super::params::IssuePath;
use crate::error::Result;
use crate::state::AppState;
use crate::store::UpdateOutcome;

/// List issues, optionally filtered by state and paginated.
///
/// GET /repos/{owner}/{repo}/issues?state=&limit=&page=
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IssueListQuery>,
) -> Json<Vec<Issue>> {
    Json(state.store().await.list_issues(&query))
}

/// Fetch a single issue by number.
///
/// GET /repos/{owner}/{repo}/issues/{issue_number}
///
/// # Errors
///
/// Returns 404 with `{"message": "Issue not found"}` on a miss.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, issue: IssuePath) -> Result<Json<Issue>> {
    let issue = state.store().await.get_issue(issue.number())?;
    Ok(Json(issue))
}

/// Open a new issue.
///
/// POST /repos/{owner}/{repo}/issues
#[instrument(skip(state, new_issue), fields(title = %new_issue.title))]
pub async fn create(
    State(state): State<AppState>,
    Json(new_issue): Json<NewIssue>,
) -> Json<Issue> {
    let issue = state.store().await.create_issue(new_issue);
    tracing::info!(id = %issue.id, number = %issue.number, "Issue created");
    Json(issue)
}

/// Shallow-merge the body into an existing issue.
///
/// PATCH /repos/{owner}/{repo}/issues/{issue_number}
///
/// A miss answers 200 with `{"message": "Issue not found"}`, not 404.
#[instrument(skip(state, patch))]
pub async fn update(
    State(state): State<AppState>,
    issue: IssuePath,
    Json(patch): Json<IssuePatch>,
) -> Json<UpdateOutcome> {
    Json(state.store().await.update_issue(issue.number(), patch))
}
