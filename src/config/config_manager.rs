use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::CONFIG_RELATIVE_PATH;
use crate::errors::{ChalkxError, ChalkxResult};
use crate::prompts::blackboard_prompt::BLACKBOARD_SYSTEM_PROMPT;
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_RELATIVE_PATH))
    }

    /// Loads `path` when given (it must exist), otherwise the default location,
    /// falling back to built-in defaults when no file is present there.
    pub fn load(path: Option<&Path>) -> ChalkxResult<Config> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(default_path) if default_path.exists() => Self::load_from(&default_path),
            _ => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> ChalkxResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| {
            ChalkxError::config_file_error(&path.display().to_string(), &e.to_string())
        })?;
        let config: Config = toml::from_str(&content)?;

        Ok(config)
    }

    /// Writes a commented sample configuration and returns where it went.
    pub fn create_sample_config(path: Option<&Path>) -> ChalkxResult<PathBuf> {
        let target = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path().ok_or_else(|| {
                ChalkxError::system_error("locate config", "Could not determine home directory")
            })?,
        };

        if target.exists() {
            return Err(ChalkxError::config_file_error(
                &target.display().to_string(),
                "File already exists",
            ));
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        let sample_config = format!(
            "# ChalkX configuration\n\n{}",
            toml::to_string_pretty(&Config::default())?
        );
        fs::write(&target, sample_config)?;

        Ok(target)
    }

    pub fn validate_config(config: &Config) -> ChalkxResult<()> {
        if config.server.host.trim().is_empty() {
            return Err(ChalkxError::config_error("host must not be empty", Some("server.host")));
        }

        if config.server.port == 0 {
            return Err(ChalkxError::config_error("port must be non-zero", Some("server.port")));
        }

        if config.ai.model.trim().is_empty() {
            return Err(ChalkxError::config_error("model must not be empty", Some("ai.model")));
        }

        if !(config.ai.base_url.starts_with("http://") || config.ai.base_url.starts_with("https://")) {
            return Err(ChalkxError::config_error(
                "base_url must start with http:// or https://",
                Some("ai.base_url"),
            ));
        }

        if config.ai.request_timeout_secs == 0 {
            return Err(ChalkxError::config_error(
                "request timeout must be at least one second",
                Some("ai.request_timeout_secs"),
            ));
        }

        if config.ai.api_key_env.trim().is_empty() {
            return Err(ChalkxError::config_error("api_key_env must not be empty", Some("ai.api_key_env")));
        }

        if let Some(prompt_file) = &config.ai.prompt_file {
            if !Path::new(prompt_file).is_file() {
                return Err(ChalkxError::config_file_error(prompt_file, "Prompt file not found"));
            }
        }

        Ok(())
    }

    /// Reads the credential named by `ai.api_key_env`; blank values count as unset.
    pub fn resolve_api_key(ai: &AiConfig) -> Option<String> {
        std::env::var(&ai.api_key_env)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }

    pub fn load_prompt(ai: &AiConfig) -> ChalkxResult<String> {
        match &ai.prompt_file {
            Some(prompt_file) => {
                let prompt = fs::read_to_string(prompt_file)
                    .map_err(|e| ChalkxError::config_file_error(prompt_file, &e.to_string()))?;

                if prompt.trim().is_empty() {
                    return Err(ChalkxError::config_file_error(prompt_file, "Prompt file is empty"));
                }

                Ok(prompt)
            }
            None => Ok(BLACKBOARD_SYSTEM_PROMPT.to_string()),
        }
    }
}
