use thiserror::Error;
use crate::enums::ai_provider_error::AiProviderError;

pub type ChalkxResult<T> = Result<T, ChalkxError>;

#[derive(Debug, Error)]
pub enum ChalkxError {
    // Configuration errors
    #[error("Configuration Error: {message}{}", field_suffix(.field))]
    ConfigurationError {
        message: String,
        field: Option<String>,
    },
    #[error("Configuration file error at {path}: {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },
    #[error("Missing credential: {env_var} is not set")]
    MissingCredential {
        env_var: String,
    },

    // Server errors
    #[error("Server error during {operation}: {reason}")]
    ServerError {
        operation: String,
        reason: String,
    },

    // System errors
    #[error("System error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },

    #[error(transparent)]
    Provider(#[from] AiProviderError),
}

impl ChalkxError {
    pub fn config_error(message: &str, field: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn server_error(operation: &str, reason: &str) -> Self {
        Self::ServerError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }
}

fn field_suffix(field: &Option<String>) -> String {
    field
        .as_ref()
        .map(|f| format!(" (field: {})", f))
        .unwrap_or_default()
}

/// Convert from standard library errors
impl From<std::io::Error> for ChalkxError {
    fn from(error: std::io::Error) -> Self {
        Self::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for ChalkxError {
    fn from(error: toml::de::Error) -> Self {
        Self::ConfigurationError {
            message: error.message().to_string(),
            field: None,
        }
    }
}

impl From<toml::ser::Error> for ChalkxError {
    fn from(error: toml::ser::Error) -> Self {
        Self::SystemError {
            operation: "serialize configuration".to_string(),
            reason: error.to_string(),
        }
    }
}
