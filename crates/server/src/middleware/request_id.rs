//! Request ID middleware for request tracing and correlation.
//!
//! Clients under test can send `x-request-id` to line their own logs up
//! with the mock's; otherwise a UUID v4 is generated. The id is recorded on
//! the `http_request` span, tagged in the Sentry scope and echoed back.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest client-supplied id that is echoed; longer ones are replaced.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Middleware that gives every request an id and echoes it on the response.
///
/// A generated id is also written into the request headers, so anything
/// further down the stack sees the same value the client will get back.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let header = match incoming_request_id(request.headers()) {
        Some(value) => value,
        None => {
            let generated = HeaderValue::from_str(&Uuid::new_v4().to_string())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"));
            request
                .headers_mut()
                .insert(REQUEST_ID_HEADER, generated.clone());
            generated
        }
    };
    let request_id = header.to_str().unwrap_or_default();

    Span::current().record("request_id", request_id);
    sentry::configure_scope(|scope| scope.set_tag("request_id", request_id));

    let mut response = next.run(request).await;
    response.headers_mut().insert(REQUEST_ID_HEADER, header);
    response
}

/// The client's id, if it sent a usable one.
///
/// Blank, non-visible-ASCII and overlong values are treated as absent.
fn incoming_request_id(headers: &HeaderMap) -> Option<HeaderValue> {
    let value = headers.get(REQUEST_ID_HEADER)?;
    let text = value.to_str().ok()?.trim();
    if text.is_empty() || text.len() > MAX_REQUEST_ID_LEN {
        return None;
    }
    HeaderValue::from_str(text).ok()
}
