//! Current user route handler.

use axum::{Json, extract::State};
use mock_github_core::User;

use crate::state::AppState;

/// The synthetic authenticated user.
///
/// GET /user
pub async fn current(State(state): State<AppState>) -> Json<User> {
    Json(state.store().await.current_user().clone())
}
