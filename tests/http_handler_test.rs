#![cfg(feature = "cli")]

use airvisual_adapter::handlers::http::{HttpServer, ServerConfig};
use airvisual_adapter::{build_adapter, AdapterConfig};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use httpmock::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

fn server_for(mock: &MockServer) -> HttpServer {
    let config = AdapterConfig {
        base_url: mock.url("/v2/"),
        api_key: Some("http-key".to_string()),
        ..AdapterConfig::default()
    };
    HttpServer::new(ServerConfig::default(), build_adapter(&config).unwrap())
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_post_returns_upstream_status_and_payload() {
    let mock = MockServer::start_async().await;
    let api_mock = mock
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/nearest_city")
                .query_param("key", "http-key");
            then.status(200).json_body(json!({"status": "success"}));
        })
        .await;

    let router = server_for(&mock).build_router();
    let response = router
        .oneshot(post_json("/", r#"{"id":"gcp-1","data":{"lat":"","lon":""}}"#))
        .await
        .unwrap();

    api_mock.assert_async().await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"jobRunID": "gcp-1", "data": {"status": "success"}, "statusCode": 200})
    );
}

#[tokio::test]
async fn test_upstream_failure_sets_response_status() {
    let mock = MockServer::start_async().await;
    mock.mock_async(|when, then| {
        when.method(GET).path("/v2/nearest_city");
        then.status(403).json_body(json!({"status": "fail", "data": {"message": "permission_denied"}}));
    })
    .await;

    let router = server_for(&mock).build_router();
    let response = router
        .oneshot(post_json("/nearest_city", r#"{"id":"gcp-2"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let payload = body_json(response).await;
    assert_eq!(payload["status"], "errored");
    assert_eq!(payload["statusCode"], 403);
    assert_eq!(payload["error"]["data"]["message"], "permission_denied");
}

#[tokio::test]
async fn test_invalid_json_is_bad_request() {
    let mock = MockServer::start_async().await;
    let api_mock = mock
        .mock_async(|when, then| {
            when.method(GET).path("/v2/nearest_city");
            then.status(200);
        })
        .await;

    let router = server_for(&mock).build_router();
    let response = router.oneshot(post_json("/", "{oops")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = body_json(response).await;
    assert_eq!(payload["status"], "errored");
    assert_eq!(payload["jobRunID"], Value::Null);
    api_mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_ping() {
    let mock = MockServer::start_async().await;
    let router = server_for(&mock).build_router();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/ping")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}
