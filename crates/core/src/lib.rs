//! Mock GitHub Core - Domain types for the in-memory issues API.
//!
//! This crate provides the shapes shared by the mock server and its tests:
//! - Issues, comments and the synthetic current user
//! - Request parameters for creating, listing and patching issues
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no store, no HTTP. The
//! stateful behavior lives in `mock-github-server`.
//!
//! # Modules
//!
//! - [`types`] - Newtype ids, issue state, entity representations and request parameters

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
