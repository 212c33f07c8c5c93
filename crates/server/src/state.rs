//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::store::IssueStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Every store operation runs
/// under the single mutex, so requests never observe a half-applied
/// create or update.
#[derive(Clone, Default)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Default)]
struct AppStateInner {
    store: Mutex<IssueStore>,
}

impl AppState {
    /// Create a new application state around an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the issue store for the duration of one operation.
    pub async fn store(&self) -> MutexGuard<'_, IssueStore> {
        self.inner.store.lock().await
    }
}
