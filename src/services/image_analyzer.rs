use std::sync::Arc;
use crate::config::constants::{DEFAULT_MODEL, IMAGE_MIME_TYPE, USER_ROLE};
use crate::enums::analyze_error::AnalyzeError;
use crate::enums::part::Part;
use crate::helpers::image_decoder::decode_image;
use crate::prompts::blackboard_prompt::BLACKBOARD_SYSTEM_PROMPT;
use crate::structs::analyze_request::AnalyzeRequest;
use crate::structs::analyze_result::AnalyzeResult;
use crate::structs::generation::generation_config::GenerationConfig;
use crate::structs::generation::generation_request::GenerationRequest;
use crate::structs::generation::turn::Turn;
use crate::traits::ai_provider::AiProvider;

/// Turns a blackboard snapshot into the model's Markdown answer.
///
/// Holds no per-request state: each call decodes, submits exactly one
/// generation request and hands back whatever text the provider produced.
pub struct ImageAnalyzer {
    provider: Arc<dyn AiProvider>,
    model: String,
    prompt: String,
}

impl ImageAnalyzer {
    pub fn new(provider: Arc<dyn AiProvider>) -> Self {
        Self {
            provider,
            model: DEFAULT_MODEL.to_string(),
            prompt: BLACKBOARD_SYSTEM_PROMPT.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn build_request(&self, image_bytes: Vec<u8>) -> GenerationRequest {
        GenerationRequest {
            model: self.model.clone(),
            turns: vec![Turn {
                role: USER_ROLE.to_string(),
                parts: vec![
                    Part::text(self.prompt.clone()),
                    Part::bytes(IMAGE_MIME_TYPE, image_bytes),
                ],
            }],
            config: GenerationConfig::default(),
        }
    }

    pub async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResult, AnalyzeError> {
        let outcome = self.run(&request).await;

        match &outcome {
            Err(e) if e.is_client_error() => log::warn!("⚠️ Rejected analysis request: {}", e),
            Err(e) => log::error!("❌ Error: {}", e),
            Ok(_) => {}
        }

        outcome
    }

    async fn run(&self, request: &AnalyzeRequest) -> Result<AnalyzeResult, AnalyzeError> {
        let image_data = request.image_data();
        if image_data.is_empty() {
            return Err(AnalyzeError::NoImageData);
        }

        let image_bytes = decode_image(image_data)?;
        let generation_request = self.build_request(image_bytes);

        let result = self.provider.generate(generation_request).await?;

        Ok(AnalyzeResult { result })
    }
}
