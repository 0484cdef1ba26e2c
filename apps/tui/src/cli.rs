use crate::config::AppConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(name = "user_manager-tui", version, about = "User Manager TUI")]
pub struct CliArgs {
    /// Print the user list and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless user list as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Start with an empty user list
    #[arg(long)]
    pub empty: bool,

    /// Override the log file path
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl CliArgs {
    /// Command line flags win over `.env` and environment values.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if self.empty {
            config.seed_sample_user = false;
        }
        if let Some(path) = &self.log_file {
            config.log_file.clone_from(path);
        }
        if self.debug {
            config.log_filter = "user_manager_tui=debug".to_string();
        }
    }
}
