pub mod commands;
pub mod ai_provider_error;
pub mod analyze_error;
pub mod part;
