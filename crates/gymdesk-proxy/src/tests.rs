//! Proxy Route Tests
//!
//! Exercise the route surface against an unreachable backend so the
//! fallback path is deterministic.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

use crate::{app, fallback, upstream::Upstream, AppState};

fn test_state(dev_fallback: bool) -> AppState {
    // Nothing listens on port 1; every forward fails fast.
    AppState {
        upstream: Upstream::new("http://127.0.0.1:1".to_string()),
        dev_fallback,
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body read failed");
    serde_json::from_slice(&bytes).expect("body was not JSON")
}

#[tokio::test]
async fn employee_list_falls_back_when_backend_is_down() {
    let response = app(test_state(true))
        .oneshot(
            Request::builder()
                .uri("/api/employees?page=1&limit=10")
                .header(header::AUTHORIZATION, "Bearer test")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["items"].as_array().is_some_and(|a| !a.is_empty()));
    assert_eq!(json["page"], 1);
}

#[tokio::test]
async fn payment_create_falls_back_when_backend_is_down() {
    let response = app(test_state(true))
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/payments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"member_name":"x","amount":10.0}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "pending");
}

#[tokio::test]
async fn theme_css_fallback_keeps_css_content_type() {
    let response = app(test_state(true))
        .oneshot(
            Request::builder()
                .uri("/api/theme/custom.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("text/css")
    );
}

#[tokio::test]
async fn disabled_fallback_surfaces_bad_gateway() {
    let response = app(test_state(false))
        .oneshot(
            Request::builder()
                .uri("/api/reports/charts")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn logo_routes_fall_back_per_method() {
    for (method, uri) in [
        ("GET", "/api/logos"),
        ("POST", "/api/logos"),
        ("PUT", "/api/logos/1"),
        ("DELETE", "/api/logos/1"),
    ] {
        let response = app(test_state(true))
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{method} {uri}");
    }
}

#[test]
fn fallback_pages_keep_pagination_consistent() {
    for page in [fallback::employees_page(), fallback::payments_page()] {
        let total = page["total"].as_u64().unwrap();
        let limit = page["limit"].as_u64().unwrap();
        let pages = page["pages"].as_u64().unwrap();
        assert_eq!(pages, total.div_ceil(limit));
        assert_eq!(page["items"].as_array().unwrap().len() as u64, total);
    }
}
