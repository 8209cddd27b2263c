//! Cross-origin access to the contact endpoint

use std::sync::Arc;

use axum::{body::Body, Router};
use contact_relay::{
    config::ServerSettings, server::router, state::AppState, testing::RecordingEmailSender,
};
use http::{header, Method, Request, StatusCode};
use tower::ServiceExt;

fn test_app() -> Router {
    let state = AppState::with_sender(
        Arc::new(RecordingEmailSender::new()),
        "relay@example.com",
        "owner@example.com",
    );
    router(state, &ServerSettings::default()).unwrap()
}

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/contact")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type,x-requested-with")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_preflight_from_allowed_origin() {
    let response = test_app()
        .oneshot(preflight("http://localhost:5173"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:5173"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
        "POST"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
        "content-type,x-requested-with"
    );
}

#[tokio::test]
async fn test_preflight_from_unknown_origin() {
    let response = test_app()
        .oneshot(preflight("https://evil.example.com"))
        .await
        .unwrap();

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_custom_origin_list() {
    let settings = ServerSettings {
        cors_origins: vec!["https://www.example.com".to_string()],
        ..ServerSettings::default()
    };
    let state = AppState::with_sender(
        Arc::new(RecordingEmailSender::new()),
        "relay@example.com",
        "owner@example.com",
    );
    let app = router(state, &settings).unwrap();

    let allowed = app
        .clone()
        .oneshot(preflight("https://www.example.com"))
        .await
        .unwrap();
    assert!(allowed
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_some());

    let localhost = app.oneshot(preflight("http://localhost:5173")).await.unwrap();
    assert!(localhost
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
