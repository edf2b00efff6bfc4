use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::generation::generation_request::GenerationRequest;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {

    /// Submits one generation call and returns the model's text answer.
    async fn generate(&self, request: GenerationRequest) -> Result<String, AiProviderError>;
}
