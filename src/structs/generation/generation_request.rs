use crate::structs::generation::generation_config::GenerationConfig;
use crate::structs::generation::turn::Turn;

/// Provider-neutral description of one generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub turns: Vec<Turn>,
    pub config: GenerationConfig,
}
