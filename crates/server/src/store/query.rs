//! Filtering and pagination for issue listings.
//!
//! Query values arrive as raw strings. A value that does not parse narrows
//! the listing to nothing instead of rejecting the request.

use mock_github_core::{Issue, IssueListQuery, IssueState};

/// Apply the state filter and the page window to `issues`, keeping order.
pub fn select<'a>(issues: &'a [Issue], query: &IssueListQuery) -> Vec<&'a Issue> {
    let filtered = issues
        .iter()
        .filter(|issue| matches_state(issue, query.state.as_deref()))
        .collect();
    paginate(filtered, query.limit.as_deref(), query.page.as_deref())
}

/// No state keeps everything; an unknown state keeps nothing.
fn matches_state(issue: &Issue, state: Option<&str>) -> bool {
    state.is_none_or(|raw| raw.parse::<IssueState>().is_ok_and(|state| issue.state == state))
}

/// Slice out `[(page - 1) * limit, page * limit)`.
///
/// Without a limit the input is returned untouched and `page` is ignored.
/// An unparseable limit, an unparseable or non-positive page, and pages past
/// the end are all empty.
pub fn paginate<T>(items: Vec<T>, limit: Option<&str>, page: Option<&str>) -> Vec<T> {
    let Some(limit) = limit else {
        return items;
    };
    let Ok(limit) = limit.trim().parse::<usize>() else {
        return Vec::new();
    };
    let page = match page.map(|raw| raw.trim().parse::<usize>()) {
        None => 1,
        Some(Ok(page)) if page > 0 => page,
        Some(_) => return Vec::new(),
    };

    let start = (page - 1).saturating_mul(limit);
    items.into_iter().skip(start).take(limit).collect()
}
