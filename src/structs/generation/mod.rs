pub mod generation_config;
pub mod generation_request;
pub mod turn;
