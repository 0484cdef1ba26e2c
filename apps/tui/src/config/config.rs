use color_eyre::eyre::eyre;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

const SEED_VAR: &str = "USER_MANAGER_SEED";
const LOG_FILE_VAR: &str = "USER_MANAGER_LOG_FILE";
const LOG_FILTER_VAR: &str = "RUST_LOG";

pub const DEFAULT_LOG_FILE: &str = "user_manager.log";
pub const DEFAULT_LOG_FILTER: &str = "user_manager_tui=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Start with the sample user in the table
    pub seed_sample_user: bool,
    /// Where logs go while the TUI owns the terminal
    pub log_file: PathBuf,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_sample_user: true,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Initializes the application configuration from `.env` and the process
/// environment
pub fn init_app_config() -> color_eyre::eyre::Result<AppConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    config_from_lookup(|key| env::var(key).ok())
}

/// Builds the configuration from any key lookup, so tests need not touch
/// the process environment.
pub fn config_from_lookup<F>(lookup: F) -> color_eyre::eyre::Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = AppConfig::default();

    if let Some(value) = lookup(SEED_VAR) {
        config.seed_sample_user = parse_bool(SEED_VAR, &value)?;
    }

    if let Some(path) = lookup(LOG_FILE_VAR).filter(|path| !path.trim().is_empty()) {
        config.log_file = PathBuf::from(path.trim());
    }

    if let Some(filter) = lookup(LOG_FILTER_VAR).filter(|filter| !filter.trim().is_empty()) {
        config.log_filter = filter.trim().to_string();
    }

    Ok(config)
}

pub fn parse_bool(key: &str, value: &str) -> color_eyre::eyre::Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(eyre!("Invalid boolean for {key}: {other:?}")),
    }
}
