//! HTTP route handlers for the mock API.
//!
//! # Route Structure
//!
//! ```text
//! GET   /                                                   - Static greeting
//! GET   /health                                             - Health check
//! GET   /user                                               - Current user
//!
//! # Issues ({owner} and {repo} are ignored)
//! GET   /repos/{owner}/{repo}/issues                        - List (state, limit, page)
//! POST  /repos/{owner}/{repo}/issues                        - Create
//! GET   /repos/{owner}/{repo}/issues/{issue_number}         - Show (404 on miss)
//! PATCH /repos/{owner}/{repo}/issues/{issue_number}         - Update (200 + message on miss)
//!
//! # Comments (keyed by the raw path value)
//! GET   /repos/{owner}/{repo}/issues/{issue_number}/comments - List
//! POST  /repos/{owner}/{repo}/issues/{issue_number}/comments - Create (raw text body)
//! ```

pub mod comments;
pub mod issues;
pub mod params;
pub mod user;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the issue and comment routes router.
pub fn issue_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/repos/{owner}/{repo}/issues",
            get(issues::index).post(issues::create),
        )
        .route(
            "/repos/{owner}/{repo}/issues/{issue_number}",
            get(issues::show).patch(issues::update),
        )
        .route(
            "/repos/{owner}/{repo}/issues/{issue_number}/comments",
            get(comments::index).post(comments::create),
        )
}

/// Create all routes for the mock API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(hello))
        .route("/user", get(user::current))
        .merge(issue_routes())
}

async fn hello() -> &'static str {
    "Hello, world!"
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode, header},
        response::Response,
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::middleware::REQUEST_ID_HEADER;
    use crate::state::AppState;

    fn test_router() -> Router {
        crate::app(AppState::new())
    }

    async fn response_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }

    async fn create_issue(app: &Router, title: &str) -> Value {
        let response = send(
            app,
            Method::POST,
            "/repos/acme/widgets/issues",
            Some(json!({ "title": title, "body": "Steps..." })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        response_json(response).await
    }

    #[tokio::test]
    async fn test_root_and_health() {
        let app = test_router();

        let root = send(&app, Method::GET, "/", None).await;
        assert_eq!(root.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(root.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Hello, world!");

        let health = send(&app, Method::GET, "/health", None).await;
        assert_eq!(health.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_current_user() {
        let app = test_router();
        let response = send(&app, Method::GET, "/user", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response_json(response).await,
            json!({
                "login": "test",
                "id": 1,
                "avatar_url": "https://i.pravatar.cc/128",
                "name": "Test User",
                "email": "test@example.com",
            })
        );
    }

    #[tokio::test]
    async fn test_create_then_show() {
        let app = test_router();
        let created = create_issue(&app, "Bug").await;

        assert_eq!(created["state"], "open");
        assert_eq!(created["id"], 1);
        assert_eq!(created["number"], 2);
        assert_eq!(created["labels"], json!([]));
        assert_eq!(created["user"]["login"], "test");

        let response = send(&app, Method::GET, "/repos/other/repo/issues/2", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response_json(response).await, created);
    }

    #[tokio::test]
    async fn test_show_missing_is_404_with_message() {
        let app = test_router();
        create_issue(&app, "Bug").await;

        // id 1 exists but is not a number
        let response = send(&app, Method::GET, "/repos/acme/widgets/issues/1", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response_json(response).await,
            json!({ "message": "Issue not found" })
        );
    }

    #[tokio::test]
    async fn test_update_missing_is_200_with_message() {
        let app = test_router();
        let response = send(
            &app,
            Method::PATCH,
            "/repos/acme/widgets/issues/99",
            Some(json!({ "title": "X" })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response_json(response).await,
            json!({ "message": "Issue not found" })
        );

        let list = send(&app, Method::GET, "/repos/acme/widgets/issues", None).await;
        assert_eq!(response_json(list).await, json!([]));
    }

    #[tokio::test]
    async fn test_close_issue() {
        let app = test_router();
        let created = create_issue(&app, "Bug").await;

        let response = send(
            &app,
            Method::PATCH,
            "/repos/acme/widgets/issues/2",
            Some(json!({ "state": "closed" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response_json(response).await["state"], "closed");

        let fetched =
            response_json(send(&app, Method::GET, "/repos/acme/widgets/issues/2", None).await)
                .await;
        assert_eq!(fetched["state"], "closed");
        assert_eq!(fetched["title"], created["title"]);
        assert_eq!(fetched["body"], created["body"]);
    }

    #[tokio::test]
    async fn test_list_filters_and_pages() {
        let app = test_router();
        for title in ["i1", "i2", "i3", "i4", "i5"] {
            create_issue(&app, title).await;
        }
        // i2 has number 4
        send(
            &app,
            Method::PATCH,
            "/repos/acme/widgets/issues/4",
            Some(json!({ "state": "closed" })),
        )
        .await;

        let titles = |value: Value| -> Vec<String> {
            value
                .as_array()
                .unwrap()
                .iter()
                .map(|issue| issue["title"].as_str().unwrap().to_string())
                .collect()
        };

        let page2 = send(&app, Method::GET, "/repos/a/b/issues?limit=2&page=2", None).await;
        assert_eq!(titles(response_json(page2).await), ["i3", "i4"]);

        let page4 = send(&app, Method::GET, "/repos/a/b/issues?limit=2&page=4", None).await;
        assert_eq!(response_json(page4).await, json!([]));

        let open = send(&app, Method::GET, "/repos/a/b/issues?state=open", None).await;
        assert_eq!(titles(response_json(open).await), ["i1", "i3", "i4", "i5"]);

        let closed = send(&app, Method::GET, "/repos/a/b/issues?state=closed", None).await;
        assert_eq!(titles(response_json(closed).await), ["i2"]);
    }

    #[tokio::test]
    async fn test_list_tolerates_unparseable_query_values() {
        let app = test_router();
        for title in ["a", "b", "c"] {
            create_issue(&app, title).await;
        }

        let ignored_page = send(&app, Method::GET, "/repos/a/b/issues?page=abc", None).await;
        assert_eq!(ignored_page.status(), StatusCode::OK);
        assert_eq!(response_json(ignored_page).await.as_array().unwrap().len(), 3);

        for uri in [
            "/repos/a/b/issues?state=all",
            "/repos/a/b/issues?limit=x",
            "/repos/a/b/issues?limit=2&page=-1",
            "/repos/a/b/issues?per_page=2&page=0",
        ] {
            let response = send(&app, Method::GET, uri, None).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert_eq!(response_json(response).await, json!([]), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_handler_panic_is_500() {
        async fn boom() -> &'static str {
            panic!("boom")
        }

        let app = crate::with_layers(Router::new().route("/boom", axum::routing::get(boom)))
            .with_state(AppState::new());
        let response = send(&app, Method::GET, "/boom", None).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Internal server error");
    }

    #[tokio::test]
    async fn test_comments_round_trip_under_issue_id() {
        let app = test_router();
        let issue = create_issue(&app, "Bug").await;
        let id = issue["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(format!("/repos/acme/widgets/issues/{id}/comments"))
                    .header(header::CONTENT_TYPE, "text/plain")
                    .body(Body::from("hello"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let comment = response_json(response).await;
        assert_eq!(comment["body"], "hello");
        assert_eq!(comment["id"], 3);

        let listed = send(
            &app,
            Method::GET,
            &format!("/repos/acme/widgets/issues/{id}/comments"),
            None,
        )
        .await;
        assert_eq!(response_json(listed).await, json!([comment]));

        let by_number = send(&app, Method::GET, "/repos/acme/widgets/issues/2/comments", None).await;
        assert_eq!(response_json(by_number).await, json!([]));
    }

    #[tokio::test]
    async fn test_multi_segment_issue_number_uses_first() {
        let app = test_router();
        create_issue(&app, "Bug").await;

        let response = send(&app, Method::GET, "/repos/acme/widgets/issues/2,9", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response_json(response).await["number"], 2);
    }

    #[tokio::test]
    async fn test_malformed_issue_number_is_rejected() {
        let app = test_router();

        let missing = send(&app, Method::GET, "/repos/acme/widgets/issues/,2", None).await;
        assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

        let garbage = send(&app, Method::GET, "/repos/acme/widgets/issues/abc/comments", None).await;
        assert_eq!(garbage.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_request_id_is_echoed_or_generated() {
        let app = test_router();

        let echoed = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(REQUEST_ID_HEADER, "req-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(echoed.headers()[REQUEST_ID_HEADER], "req-123");

        let generated = send(&app, Method::GET, "/health", None).await;
        assert!(generated.headers().contains_key(REQUEST_ID_HEADER));
    }
}
