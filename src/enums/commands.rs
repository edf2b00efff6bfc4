use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the analysis server
    Serve {
        #[clap(long)]
        host: Option<String>,
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(short, long)]
        config: Option<PathBuf>,
        /// Refuse to start when the Gemini API key is missing
        #[clap(long)]
        require_api_key: bool,
    },
    /// Write a sample configuration file
    Init {
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
    /// Check the configuration and credential without serving
    Validate {
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Serve {
            host: None,
            port: None,
            config: None,
            require_api_key: false,
        }
    }
}
