use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{ChalkxError, ChalkxResult};
use crate::server::analyze_server::AnalyzeServer;
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::services::image_analyzer::ImageAnalyzer;
use crate::structs::config::config::Config;
use crate::structs::config::server_config::ServerConfig;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub const fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> ChalkxResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Serve { host, port, config, require_api_key } => {
                self.serve_command(host, port, config, require_api_key).await
            }
            Commands::Init { config } => self.init_command(config.as_deref()),
            Commands::Validate { config } => self.validate_command(config.as_deref()),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn serve_command(
        &self,
        host: Option<String>,
        port: Option<u16>,
        config_path: Option<PathBuf>,
        require_api_key: bool,
    ) -> ChalkxResult<()> {
        log::info!("🚀 Starting ChalkX analysis server...");

        let config = Self::resolve_config(config_path.as_deref(), host, port, require_api_key)?;
        let analyzer = Self::build_analyzer(&config)?;
        let addr = Self::bind_address(&config.server)?;

        log::info!("🧠 Using model: {}", analyzer.model());

        AnalyzeServer::new(Arc::new(analyzer), addr).run().await
    }

    fn init_command(&self, config_path: Option<&Path>) -> ChalkxResult<()> {
        log::info!("🚀 Initializing chalkx configuration...");

        match ConfigManager::create_sample_config(config_path) {
            Ok(path) => {
                log::info!("✅ Configuration file created at {}", path.display());
                log::info!("🔧 Run 'chalkx validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    fn validate_command(&self, config_path: Option<&Path>) -> ChalkxResult<()> {
        log::info!("🔍 Validating configuration...");

        let config = ConfigManager::load(config_path)?;
        ConfigManager::validate_config(&config)?;

        if ConfigManager::resolve_api_key(&config.ai).is_some() {
            log::info!("🔑 {} is set", config.ai.api_key_env);
        } else {
            log::warn!("⚠️ {} not found in environment variables.", config.ai.api_key_env);
        }

        log::info!("✅ Configuration is valid");
        Ok(())
    }

    /// Loads the configuration and applies command-line overrides on top.
    pub fn resolve_config(
        config_path: Option<&Path>,
        host: Option<String>,
        port: Option<u16>,
        require_api_key: bool,
    ) -> ChalkxResult<Config> {
        let mut config = ConfigManager::load(config_path)?;

        if let Some(host) = host {
            config.server.host = host;
        }
        if let Some(port) = port {
            config.server.port = port;
        }
        config.server.require_api_key |= require_api_key;

        ConfigManager::validate_config(&config)?;
        Ok(config)
    }

    /// Builds the process-wide analyzer. A missing key only warns unless
    /// `server.require_api_key` is set.
    pub fn build_analyzer(config: &Config) -> ChalkxResult<ImageAnalyzer> {
        let api_key = ConfigManager::resolve_api_key(&config.ai);

        if api_key.is_none() {
            if config.server.require_api_key {
                return Err(ChalkxError::MissingCredential {
                    env_var: config.ai.api_key_env.clone(),
                });
            }
            log::warn!("⚠️ Warning: {} not found in environment variables.", config.ai.api_key_env);
        }

        let prompt = ConfigManager::load_prompt(&config.ai)?;
        let provider = GeminiProvider::new(api_key, Duration::from_secs(config.ai.request_timeout_secs))?
            .with_base_url(config.ai.base_url.as_str());

        Ok(ImageAnalyzer::new(Arc::new(provider))
            .with_model(config.ai.model.as_str())
            .with_prompt(prompt))
    }

    pub fn bind_address(server: &ServerConfig) -> ChalkxResult<SocketAddr> {
        (server.host.as_str(), server.port)
            .to_socket_addrs()
            .map_err(|e| ChalkxError::config_error(&e.to_string(), Some("server.host")))?
            .next()
            .ok_or_else(|| ChalkxError::config_error("host did not resolve to an address", Some("server.host")))
    }
}
