pub mod ai;
pub mod analyze_request;
pub mod analyze_result;
pub mod cli;
pub mod config;
pub mod error_detail;
pub mod generation;
