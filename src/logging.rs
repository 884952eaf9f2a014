//! Logger setup for the binary.

use std::fs::OpenOptions;

use anyhow::{Context, Result};

use crate::config::{AppConfig, FrontendMode};

/// Logs go to the configured file, or to stderr in line mode.
///
/// The full-screen menu owns the terminal, so without a log file it runs unlogged.
/// Installing a second logger in the same process is an error.
pub fn init_logging(config: &AppConfig) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    match &config.log_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None if config.mode == FrontendMode::Tui => return Ok(()),
        None => {
            builder.format_timestamp(None);
        }
    }

    builder.try_init().context("installing logger")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tui_without_log_file_installs_nothing() {
        assert!(init_logging(&AppConfig::default()).is_ok());
    }

    #[test]
    fn second_logger_is_reported() {
        let cfg = AppConfig {
            mode: FrontendMode::Plain,
            ..AppConfig::default()
        };
        let err = init_logging(&cfg)
            .and_then(|_| init_logging(&cfg))
            .unwrap_err();
        assert!(err.to_string().contains("installing logger"));
    }

    #[test]
    fn unopenable_log_file_is_an_error() {
        let cfg = AppConfig {
            log_path: Some("/nonexistent-dir/tetris-stack.log".to_string()),
            ..AppConfig::default()
        };
        let err = init_logging(&cfg).unwrap_err();
        assert!(err.to_string().contains("opening log file"));
    }
}
