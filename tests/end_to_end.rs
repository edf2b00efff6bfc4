use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use serde_json::{json, Value};
use warp::http::StatusCode;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use chalkx::server::analyze_server::routes;
use chalkx::services::ai_providers::gemini::GeminiProvider;
use chalkx::services::image_analyzer::ImageAnalyzer;
use crate::support::PNG_10X10;

fn gemini_routes(
    mock_server: &MockServer,
    timeout: Duration,
) -> impl warp::Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    let provider = GeminiProvider::new(Some("test-key".to_string()), timeout)
        .unwrap()
        .with_base_url(mock_server.uri());

    routes(Arc::new(ImageAnalyzer::new(Arc::new(provider))))
}

#[tokio::test]
async fn greeting_on_the_board_round_trips_through_gemini() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": "Hello! How can I help?" }] } }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let filter = gemini_routes(&mock_server, Duration::from_secs(5));
    let response = warp::test::request()
        .method("POST")
        .path("/api/analyze")
        .json(&json!({ "image": PNG_10X10 }))
        .reply(&filter)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body, json!({ "result": "Hello! How can I help?" }));

    let sent: Value = serde_json::from_slice(&mock_server.received_requests().await.unwrap()[0].body).unwrap();
    assert_eq!(sent["contents"][0]["parts"][1]["inlineData"]["data"], PNG_10X10);
}

#[tokio::test]
async fn gemini_timeout_becomes_internal_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&mock_server)
        .await;

    let filter = gemini_routes(&mock_server, Duration::from_millis(100));
    let response = warp::test::request()
        .method("POST")
        .path("/api/analyze")
        .json(&json!({ "image": PNG_10X10 }))
        .reply(&filter)
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert!(body["detail"].as_str().unwrap().contains("timed out"), "body was {}", body);
}

#[tokio::test]
async fn missing_credential_fails_on_first_call() {
    let mock_server = MockServer::start().await;
    let provider = GeminiProvider::new(None, Duration::from_secs(5))
        .unwrap()
        .with_base_url(mock_server.uri());
    let filter = routes(Arc::new(ImageAnalyzer::new(Arc::new(provider))));

    let response = warp::test::request()
        .method("POST")
        .path("/api/analyze")
        .json(&json!({ "image": PNG_10X10 }))
        .reply(&filter)
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}
