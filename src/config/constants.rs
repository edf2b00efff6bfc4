pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const CONFIG_RELATIVE_PATH: &str = "chalkx/config.toml";

pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

pub const ANALYZE_LOG_TARGET: &str = "chalkx::api";

// Generation parameters sent with every analysis call
pub const GENERATION_TEMPERATURE: f64 = 0.5;
pub const GENERATION_TOP_P: f64 = 0.95;
pub const GENERATION_TOP_K: u32 = 40;
pub const GENERATION_MAX_OUTPUT_TOKENS: u32 = 8192;
pub const GENERATION_RESPONSE_MIME_TYPE: &str = "text/plain";

pub const USER_ROLE: &str = "user";
pub const IMAGE_MIME_TYPE: &str = "image/png";

pub const CORS_ANY: &str = "*";
pub const CORS_DEFAULT_ALLOW_METHODS: &str = "GET, HEAD, POST, PUT, PATCH, DELETE, OPTIONS";
pub const CORS_MAX_AGE_SECS: u64 = 600;
