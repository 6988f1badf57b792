//! Integration tests for the `/api/ask` passthrough.

#![allow(clippy::unwrap_used)]

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use orderbook_client::{AskProxyState, create_router};

async fn read_body(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn forwards_method_body_and_query() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .and(query_param("lang", "pt"))
        .and(body_string(r#"{"question":"preço?"}"#))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("content-type", "application/json")
                .set_body_string(r#"{"answer":"42"}"#),
        )
        .expect(1)
        .mount(&upstream)
        .await;

    let state = AskProxyState::new(&format!("{}/ask", upstream.uri())).unwrap();
    let app = create_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/ask?lang=pt")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"question":"preço?"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(read_body(response).await, br#"{"answer":"42"}"#);
}

#[tokio::test]
async fn forwards_end_to_end_headers_both_ways() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ask"))
        .and(header("authorization", "Bearer secret"))
        .and(header("accept", "text/plain"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("cache-control", "no-store")
                .insert_header("x-request-id", "abc123")
                .set_body_string("ok"),
        )
        .expect(1)
        .mount(&upstream)
        .await;

    let state = AskProxyState::new(&format!("{}/ask", upstream.uri())).unwrap();
    let response = create_router(state)
        .oneshot(
            Request::builder()
                .uri("/api/ask")
                .header("authorization", "Bearer secret")
                .header("accept", "text/plain")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("cache-control").unwrap(), "no-store");
    assert_eq!(response.headers().get("x-request-id").unwrap(), "abc123");
    assert_eq!(read_body(response).await, b"ok");
}

#[tokio::test]
async fn relays_upstream_error_status_unchanged() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
        .mount(&upstream)
        .await;

    let state = AskProxyState::new(&format!("{}/ask", upstream.uri())).unwrap();
    let response = create_router(state)
        .oneshot(Request::builder().uri("/api/ask").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_body(response).await, b"missing");
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let upstream = MockServer::start().await;
    let target = format!("{}/ask", upstream.uri());
    drop(upstream);

    let state = AskProxyState::new(&target).unwrap();
    let response = create_router(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/ask")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = serde_json::from_slice(&read_body(response).await).unwrap();
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn other_paths_are_not_served() {
    let state = AskProxyState::new("http://127.0.0.1:9/ask").unwrap();
    let response = create_router(state)
        .oneshot(Request::builder().uri("/api/other").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
