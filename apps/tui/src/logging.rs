use crate::config::AppConfig;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, EnvFilter};

/// Where log lines should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// The TUI owns the screen, so write to the configured file
    File,
    Stderr,
}

pub fn init_logging(config: &AppConfig, target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|e| eyre!("Invalid log filter {:?}: {e}", config.log_filter))?;

    let result = match target {
        LogTarget::File => {
            let (directory, file_name) = split_log_path(&config.log_file)?;
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file_name.to_string_lossy())
                .build(directory)
                .map_err(|e| eyre!("Cannot open log file {}: {e}", config.log_file.display()))?;
            fmt()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_env_filter(filter)
                .try_init()
        }
        LogTarget::Stderr => fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .try_init(),
    };

    result.map_err(|e| eyre!("Failed to initialize logging: {e}"))
}

fn split_log_path(path: &Path) -> Result<(&Path, &std::ffi::OsStr)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| eyre!("Log file path has no file name: {}", path.display()))?;
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok((directory, file_name))
}
