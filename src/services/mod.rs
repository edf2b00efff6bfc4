pub mod ai_providers;
pub mod image_analyzer;
