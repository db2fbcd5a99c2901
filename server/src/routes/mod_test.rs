use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt as _;

use super::*;
use crate::state::test_helpers::{StubValidator, test_app_state};

fn pages() -> Router {
    Router::new()
        .route("/", get(|| async { "events" }))
        .route("/dashboard/registrations", get(|| async { "registrations" }))
}

#[tokio::test]
async fn healthz_reports_ok() {
    let resp = healthz().await;
    assert_eq!(resp.0, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn routes_added_after_the_guard_stay_public() {
    let stub = Arc::new(StubValidator::accepting("good"));
    let router = guarded(pages(), test_app_state(stub.clone())).route("/healthz", get(healthz));
    let resp = router
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn guarded_pages_redirect_anonymous_admins() {
    let stub = Arc::new(StubValidator::accepting("good"));
    let resp = guarded(pages(), test_app_state(stub))
        .oneshot(Request::builder().uri("/dashboard/registrations").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()), Some("/login"));
}
