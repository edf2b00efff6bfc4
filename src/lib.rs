//! ChalkX: a single-endpoint relay that sends blackboard snapshots to Gemini
//! and returns the model's Markdown answer.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod prompts;
pub mod server;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
