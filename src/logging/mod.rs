// SPDX-License-Identifier: MPL-2.0
//! Logging setup.
//!
//! Installs a `tracing` subscriber with a formatted console layer and a
//! [`BroadcastLayer`] that feeds in-process listeners (the preview app's log
//! panel). `RUST_LOG` takes precedence over the configured level for the
//! console output.

mod broadcast;
mod buffer;

pub use broadcast::{BroadcastLayer, LogBroadcaster, LogRecord, Subscription};
pub use buffer::{CircularBuffer, DEFAULT_HISTORY, MAX_HISTORY, MIN_HISTORY};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

/// `[logging]` section of the settings file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default = "default_history")]
    pub history: usize,
}

fn default_history() -> usize {
    DEFAULT_HISTORY
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            format: LogFormat::default(),
            history: DEFAULT_HISTORY,
        }
    }
}

/// Installs the global subscriber and returns the broadcaster it feeds.
///
/// # Errors
///
/// Returns [`Error::Config`] if the `RUST_LOG` filter is malformed or a
/// global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<LogBroadcaster> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.level.as_str())
            .map_err(|e| Error::Config(format!("invalid log level: {e}")))?,
    };

    let console: Box<dyn Layer<Registry> + Send + Sync> = match config.format {
        LogFormat::Pretty => fmt::layer().pretty().with_filter(filter).boxed(),
        LogFormat::Compact => fmt::layer().compact().with_filter(filter).boxed(),
        LogFormat::Json => fmt::layer().json().with_filter(filter).boxed(),
    };

    let broadcaster = LogBroadcaster::new(config.history);
    let level = LevelFilter::from(config.level);

    tracing_subscriber::registry()
        .with(console)
        .with(broadcaster.layer().with_filter(level))
        .try_init()
        .map_err(|e| Error::Config(format!("logging already initialized: {e}")))?;

    Ok(broadcaster)
}
