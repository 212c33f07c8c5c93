//! HTTP middleware stack.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (outermost, added by the binary)
//! 2. `TraceLayer` (request span with method, uri, status, latency)
//! 3. Request ID (propagate or generate `x-request-id`)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
