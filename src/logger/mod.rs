use env_logger::Env;
use crate::config::constants::DEFAULT_LOG_FILTER;

/// Routes `log` records to stderr. `RUST_LOG` overrides the default `info` filter.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .format_timestamp_millis()
        .init();
}
