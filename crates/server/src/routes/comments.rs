//! Comment route handlers.
//!
//! The `{issue_number}` segment is used as the comment index key as-is.
//! Issues seed that index under their `id`, so listing by an issue's
//! number only finds comments that were posted under that number.

use axum::{Json, extract::State};
use mock_github_core::Comment;
use tracing::instrument;

use super::params::IssuePath;
use crate::state::AppState;

/// List comments stored under the path value.
///
/// GET /repos/{owner}/{repo}/issues/{issue_number}/comments
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>, issue: IssuePath) -> Json<Vec<Comment>> {
    Json(state.store().await.list_comments(issue.issue_id()))
}

/// Append a comment; the raw request body is the comment text.
///
/// POST /repos/{owner}/{repo}/issues/{issue_number}/comments
#[instrument(skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    issue: IssuePath,
    body: String,
) -> Json<Comment> {
    let comment = state.store().await.add_comment(issue.issue_id(), body);
    tracing::info!(id = %comment.id, "Comment created");
    Json(comment)
}
