//! Logging setup.
//!
//! Human-readable events go to stderr. When a log file or directory is
//! configured, events are also written there as JSON lines.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_PATH_ENV: &str = "TEXTFILTER_LOG_PATH";
const LOG_DIR_ENV: &str = "TEXTFILTER_LOG_DIR";
const LOG_FILE_NAME: &str = "textfilter.jsonl";

/// Where file logs go, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact log file path. Wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory receiving `textfilter.jsonl`.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read `TEXTFILTER_LOG_PATH` / `TEXTFILTER_LOG_DIR`, falling back to the
    /// configured directory when the environment names none.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self {
            log_path: std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            log_dir: std::env::var_os(LOG_DIR_ENV)
                .map(PathBuf::from)
                .or(config_log_dir),
        }
    }

    /// Directory and file name of the log file, if file logging is on.
    fn file_target(&self) -> Option<(PathBuf, PathBuf)> {
        if let Some(ref path) = self.log_path {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), PathBuf::from);
            let name = path.file_name()?;
            return Some((dir, PathBuf::from(name)));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), PathBuf::from(LOG_FILE_NAME)))
    }
}

/// Build the event filter. `RUST_LOG` wins; otherwise `-q` means errors
/// only, `-v` debug, `-vv` trace, and the configured level applies.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => default_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global subscriber. Keep the returned guard alive until exit so
/// buffered file logs are flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let Some((dir, name)) = config.file_target() else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init()?;
        return Ok(None);
    };

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let appender = tracing_appender::rolling::never(&dir, &name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file_layer = fmt::layer()
        .json()
        .with_writer(writer)
        .with_ansi(false)
        .with_current_span(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;
    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_target_without_paths() {
        assert_eq!(ObservabilityConfig::default().file_target(), None);
    }

    #[test]
    fn dir_uses_default_file_name() {
        let config = ObservabilityConfig {
            log_path: None,
            log_dir: Some(PathBuf::from("/tmp/logs")),
        };
        assert_eq!(
            config.file_target(),
            Some((PathBuf::from("/tmp/logs"), PathBuf::from("textfilter.jsonl")))
        );
    }

    #[test]
    fn explicit_path_wins() {
        let config = ObservabilityConfig {
            log_path: Some(PathBuf::from("/var/log/tf/run.jsonl")),
            log_dir: Some(PathBuf::from("/tmp/logs")),
        };
        assert_eq!(
            config.file_target(),
            Some((PathBuf::from("/var/log/tf"), PathBuf::from("run.jsonl")))
        );
    }

    #[test]
    fn bare_file_name_logs_to_cwd() {
        let config = ObservabilityConfig {
            log_path: Some(PathBuf::from("run.jsonl")),
            log_dir: None,
        };
        assert_eq!(
            config.file_target(),
            Some((PathBuf::from("."), PathBuf::from("run.jsonl")))
        );
    }
}
