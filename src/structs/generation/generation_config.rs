use crate::config::constants::{
    GENERATION_MAX_OUTPUT_TOKENS, GENERATION_RESPONSE_MIME_TYPE, GENERATION_TEMPERATURE,
    GENERATION_TOP_K, GENERATION_TOP_P,
};

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub response_mime_type: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: GENERATION_TEMPERATURE,
            top_p: GENERATION_TOP_P,
            top_k: GENERATION_TOP_K,
            max_output_tokens: GENERATION_MAX_OUTPUT_TOKENS,
            response_mime_type: GENERATION_RESPONSE_MIME_TYPE.to_string(),
        }
    }
}
