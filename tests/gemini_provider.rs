use std::time::Duration;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use chalkx::enums::ai_provider_error::AiProviderError;
use chalkx::enums::part::Part;
use chalkx::services::ai_providers::gemini::GeminiProvider;
use chalkx::structs::generation::generation_config::GenerationConfig;
use chalkx::structs::generation::generation_request::GenerationRequest;
use chalkx::structs::generation::turn::Turn;
use chalkx::traits::ai_provider::AiProvider;

const GENERATE_PATH: &str = "/models/gemini-2.5-flash:generateContent";

fn provider_for(server: &MockServer, timeout: Duration) -> GeminiProvider {
    GeminiProvider::new(Some("test-key".to_string()), timeout)
        .unwrap()
        .with_base_url(server.uri())
}

fn image_request() -> GenerationRequest {
    GenerationRequest {
        model: "gemini-2.5-flash".to_string(),
        turns: vec![Turn {
            role: "user".to_string(),
            parts: vec![Part::text("What is on the board?"), Part::bytes("image/png", b"png-bytes".to_vec())],
        }],
        config: GenerationConfig::default(),
    }
}

fn candidate_response(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn posts_generate_content_with_key_and_returns_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_response("$$x = 2$$")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let text = provider_for(&mock_server, Duration::from_secs(5))
        .generate(image_request())
        .await
        .unwrap();

    assert_eq!(text, "$$x = 2$$");
}

#[tokio::test]
async fn wire_body_has_inline_png_and_generation_config() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_response("ok")))
        .mount(&mock_server)
        .await;

    provider_for(&mock_server, Duration::from_secs(5))
        .generate(image_request())
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        body,
        json!({
            "contents": [{
                "role": "user",
                "parts": [
                    { "text": "What is on the board?" },
                    { "inlineData": { "mimeType": "image/png", "data": "cG5nLWJ5dGVz" } }
                ]
            }],
            "generationConfig": {
                "temperature": 0.5,
                "topP": 0.95,
                "topK": 40,
                "maxOutputTokens": 8192,
                "responseMimeType": "text/plain"
            }
        })
    );
}

#[tokio::test]
async fn provider_error_body_message_is_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT" }
        })))
        .mount(&mock_server)
        .await;

    let error = provider_for(&mock_server, Duration::from_secs(5))
        .generate(image_request())
        .await
        .unwrap_err();

    assert_eq!(
        error,
        AiProviderError::ApiError("Bad request: API key not valid. Please pass a valid API key. (INVALID_ARGUMENT)".to_string())
    );
}

#[tokio::test]
async fn unauthorized_maps_to_authentication_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&mock_server)
        .await;

    let error = provider_for(&mock_server, Duration::from_secs(5))
        .generate(image_request())
        .await
        .unwrap_err();

    assert_eq!(error, AiProviderError::AuthenticationError("unauthorized".to_string()));
}

#[tokio::test]
async fn slow_provider_hits_the_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(candidate_response("too late"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let error = provider_for(&mock_server, Duration::from_millis(100))
        .generate(image_request())
        .await
        .unwrap_err();

    assert!(matches!(error, AiProviderError::Timeout(_)), "got {:?}", error);
}

#[tokio::test]
async fn unparseable_success_body_is_a_serialization_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let error = provider_for(&mock_server, Duration::from_secs(5))
        .generate(image_request())
        .await
        .unwrap_err();

    assert!(matches!(error, AiProviderError::SerializationError(_)), "got {:?}", error);
}
