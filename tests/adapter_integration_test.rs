use airvisual_adapter::core::Coordinate;
use airvisual_adapter::{build_adapter, AdapterConfig, AdapterRequest, RequestData};
use httpmock::prelude::*;
use serde_json::json;

fn config_for(server: &MockServer, api_key: Option<&str>) -> AdapterConfig {
    AdapterConfig {
        base_url: server.url("/v2/"),
        api_key: api_key.map(str::to_string),
        timeout_seconds: 5,
        ..AdapterConfig::default()
    }
}

fn sample_city() -> serde_json::Value {
    json!({
        "status": "success",
        "data": {
            "city": "Los Angeles",
            "state": "California",
            "country": "USA",
            "current": {
                "pollution": {"ts": "2019-08-04T01:00:00.000Z", "aqius": 55, "mainus": "p2"}
            }
        }
    })
}

#[tokio::test]
async fn test_default_coordinates_are_sent() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/nearest_city")
                .query_param("lat", "34.0669")
                .query_param("lon", "-118.2417")
                .query_param("key", "test-key");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(sample_city());
        })
        .await;

    let adapter = build_adapter(&config_for(&server, Some("test-key"))).unwrap();
    let (status, response) = adapter
        .create_request(AdapterRequest::new("job-42", RequestData::default()))
        .await;

    api_mock.assert_async().await;
    assert_eq!(status, 200);
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"jobRunID": "job-42", "data": sample_city(), "statusCode": 200})
    );
}

#[tokio::test]
async fn test_requested_coordinates_are_forwarded() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/nearest_city")
                .query_param("lat", "35.6895")
                .query_param("lon", "139.6917");
            then.status(200).json_body(json!({"status": "success", "data": {"city": "Tokyo"}}));
        })
        .await;

    let adapter = build_adapter(&config_for(&server, Some("k"))).unwrap();
    let request = AdapterRequest::new(
        1,
        RequestData {
            lat: Some(Coordinate::from(35.6895)),
            lon: Some(Coordinate::from("139.6917")),
        },
    );
    let (status, response) = adapter.create_request(request).await;

    api_mock.assert_async().await;
    assert_eq!(status, 200);
    assert_eq!(response.data().unwrap()["data"]["city"], "Tokyo");
}

#[tokio::test]
async fn test_missing_api_key_is_not_sent() {
    let server = MockServer::start_async().await;
    let with_key = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/nearest_city")
                .query_param_exists("key");
            then.status(500);
        })
        .await;
    let without_key = server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/nearest_city");
            then.status(200).json_body(sample_city());
        })
        .await;

    let adapter = build_adapter(&config_for(&server, Some(""))).unwrap();
    let (status, response) = adapter.create_request(AdapterRequest::default()).await;

    with_key.assert_hits_async(0).await;
    without_key.assert_async().await;
    assert_eq!(status, 200);
    assert!(!response.is_errored());
}

#[tokio::test]
async fn test_upstream_error_keeps_body_and_status() {
    let server = MockServer::start_async().await;
    let error_body = json!({"status": "fail", "data": {"message": "incorrect_api_key"}});
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/nearest_city");
            then.status(401).json_body(error_body.clone());
        })
        .await;

    let adapter = build_adapter(&config_for(&server, Some("wrong"))).unwrap();
    let (status, response) = adapter
        .create_request(AdapterRequest::new("job-7", RequestData::default()))
        .await;

    api_mock.assert_async().await;
    assert_eq!(status, 401);
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "jobRunID": "job-7",
            "status": "errored",
            "error": error_body,
            "statusCode": 401
        })
    );
}

#[tokio::test]
async fn test_plain_text_error_body_is_kept_as_string() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/nearest_city");
            then.status(429).body("Too Many Requests");
        })
        .await;

    let adapter = build_adapter(&config_for(&server, Some("k"))).unwrap();
    let (status, response) = adapter.create_request(AdapterRequest::default()).await;

    assert_eq!(status, 429);
    assert_eq!(response.error(), Some(&json!("Too Many Requests")));
}

#[tokio::test]
async fn test_status_just_below_400_is_success() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/nearest_city");
            then.status(399).json_body(json!({"note": "odd but fine"}));
        })
        .await;

    let adapter = build_adapter(&config_for(&server, Some("k"))).unwrap();
    let (status, response) = adapter.create_request(AdapterRequest::default()).await;

    assert_eq!(status, 399);
    assert!(!response.is_errored());
}

#[tokio::test]
async fn test_unreachable_upstream_is_error_shaped() {
    let config = AdapterConfig {
        base_url: "http://127.0.0.1:1/v2/".to_string(),
        timeout_seconds: 2,
        ..AdapterConfig::default()
    };

    let adapter = build_adapter(&config).unwrap();
    let (status, response) = adapter
        .create_request(AdapterRequest::new("job-x", RequestData::default()))
        .await;

    assert_eq!(status, 500);
    assert!(response.is_errored());
    assert_eq!(response.job_run_id, json!("job-x"));
    assert_eq!(response.status_code, 500);
}
