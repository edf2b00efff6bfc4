use std::time::Duration;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Client, StatusCode};
use crate::config::constants::GEMINI_BASE_URL;
use crate::enums::ai_provider_error::AiProviderError;
use crate::enums::part::Part;
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_error_response::GeminiErrorResponse;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_inline_data::GeminiInlineData;
use crate::structs::ai::gemini::gemini_part::GeminiPart;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::ai::gemini::gemini_response::GeminiResponse;
use crate::structs::generation::generation_request::GenerationRequest;
use crate::structs::generation::turn::Turn;
use crate::traits::ai_provider::AiProvider;

/// Client for the Gemini `generateContent` REST endpoint.
///
/// Built once at startup and shared between requests. Every call is bounded by
/// the timeout given to [`GeminiProvider::new`].
#[derive(Clone)]
pub struct GeminiProvider {
    api_key: Option<String>,
    base_url: String,
    client: Client,
}

impl GeminiProvider {
    pub fn new(api_key: Option<String>, timeout: Duration) -> Result<Self, AiProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AiProviderError::NetworkError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
            client,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn get_gemini_parts(parts: &[Part]) -> Vec<GeminiPart> {
        parts
            .iter()
            .map(|part| match part {
                Part::Text(text) => GeminiPart {
                    text: Some(text.clone()),
                    inline_data: None,
                },
                Part::Bytes { mime_type, data } => GeminiPart {
                    text: None,
                    inline_data: Some(GeminiInlineData {
                        mime_type: mime_type.clone(),
                        data: STANDARD.encode(data),
                    }),
                },
            })
            .collect()
    }

    fn get_gemini_contents(turns: &[Turn]) -> Vec<GeminiContent> {
        turns
            .iter()
            .map(|turn| GeminiContent {
                role: turn.role.clone(),
                parts: Self::get_gemini_parts(&turn.parts),
            })
            .collect()
    }

    fn get_request(request: &GenerationRequest) -> GeminiRequest {
        let config = &request.config;

        GeminiRequest {
            contents: Self::get_gemini_contents(&request.turns),
            generation_config: Some(GeminiGenerationConfig {
                temperature: Some(config.temperature),
                top_p: Some(config.top_p),
                top_k: Some(config.top_k),
                max_output_tokens: Some(config.max_output_tokens),
                response_mime_type: Some(config.response_mime_type.clone()),
            }),
        }
    }

    async fn make_request(&self, url: &str, api_key: &str, request_body: &GeminiRequest) -> Result<reqwest::Response, AiProviderError> {
        self.client
            .post(url)
            .query(&[("key", api_key)])
            .header("Content-Type", "application/json")
            .json(request_body)
            .send()
            .await
            .map_err(AiProviderError::from)
    }

    fn error_from_status(status: StatusCode, error_text: &str) -> AiProviderError {
        let message = serde_json::from_str::<GeminiErrorResponse>(error_text)
            .map(|e| match e.error.status {
                Some(status) => format!("{} ({})", e.error.message, status),
                None => e.error.message,
            })
            .unwrap_or_else(|_| error_text.to_string());

        match status.as_u16() {
            400 => AiProviderError::ApiError(format!("Bad request: {}", message)),
            401 => AiProviderError::AuthenticationError(message),
            403 => AiProviderError::ApiError(format!("Forbidden: {}", message)),
            429 => AiProviderError::ApiError(format!("Rate limit exceeded: {}", message)),
            _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, message)),
        }
    }

    fn extract_text(response: &GeminiResponse) -> Result<String, AiProviderError> {
        if let Some(text) = response.text() {
            return Ok(text);
        }

        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
        {
            return Err(AiProviderError::EmptyResponse(format!("Prompt blocked: {}", reason)));
        }

        let finish_reason = response
            .candidates
            .first()
            .and_then(|candidate| candidate.finish_reason.as_deref())
            .unwrap_or("UNKNOWN");

        Err(AiProviderError::EmptyResponse(format!(
            "No content in response (finish reason: {})",
            finish_reason
        )))
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn generate(&self, request: GenerationRequest) -> Result<String, AiProviderError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AiProviderError::AuthenticationError("Gemini API key is not configured".to_string())
        })?;

        log::debug!("📦 Request model: {}", request.model);

        let url = format!("{}/models/{}:generateContent", self.base_url, request.model);
        let request_body = Self::get_request(&request);

        let response = self.make_request(&url, api_key, &request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::debug!("❌ Gemini API Error Response: {}", error_text);
            return Err(Self::error_from_status(status, &error_text));
        }

        let json: GeminiResponse = response.json().await?;
        Self::extract_text(&json)
    }
}
