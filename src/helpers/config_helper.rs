use crate::config::constants::{
    DEFAULT_HOST, DEFAULT_MODEL, DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT_SECS, GEMINI_API_KEY_ENV,
    GEMINI_BASE_URL,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    pub const fn default_port() -> u16 {
        DEFAULT_PORT
    }

    pub fn default_model() -> String {
        DEFAULT_MODEL.to_string()
    }

    pub fn default_base_url() -> String {
        GEMINI_BASE_URL.to_string()
    }

    pub fn default_api_key_env() -> String {
        GEMINI_API_KEY_ENV.to_string()
    }

    pub const fn default_request_timeout_secs() -> u64 {
        DEFAULT_REQUEST_TIMEOUT_SECS
    }
}
