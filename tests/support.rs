use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use chalkx::enums::ai_provider_error::AiProviderError;
use chalkx::services::image_analyzer::ImageAnalyzer;
use chalkx::structs::generation::generation_request::GenerationRequest;
use chalkx::traits::ai_provider::AiProvider;

/// 10x10 white RGB PNG.
pub const PNG_10X10: &str = "iVBORw0KGgoAAAANSUhEUgAAAAoAAAAKCAIAAAACUFjqAAAAEElEQVR42mP4jxcwjEpjAwD6Hirkf4B3HgAAAABJRU5ErkJggg==";

/// Provider double that answers every call with the same outcome and keeps
/// the requests it was given.
pub struct StubProvider {
    reply: Result<String, AiProviderError>,
    calls: Mutex<Vec<GenerationRequest>>,
}

impl StubProvider {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(error: AiProviderError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(error),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<GenerationRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for StubProvider {
    async fn generate(&self, request: GenerationRequest) -> Result<String, AiProviderError> {
        self.calls.lock().unwrap().push(request);
        self.reply.clone()
    }
}

pub fn analyzer_for(provider: &Arc<StubProvider>) -> Arc<ImageAnalyzer> {
    Arc::new(ImageAnalyzer::new(Arc::clone(provider) as Arc<dyn AiProvider>))
}
