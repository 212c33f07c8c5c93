//! Core types for the mock issues API.
//!
//! This module provides type-safe wrappers and the JSON representations
//! returned by every route.

pub mod comment;
pub mod id;
pub mod issue;
pub mod request;
pub mod status;
pub mod timestamp;
pub mod user;

pub use comment::Comment;
pub use id::*;
pub use issue::Issue;
pub use request::{IssueListQuery, IssuePatch, NewIssue, NotFoundMessage};
pub use status::IssueState;
pub use user::User;
