//! Tracing subscriber setup.
//!
//! Installs a global `fmt` subscriber filtered by `RUST_LOG`, writing either
//! human-readable or JSON lines.

use std::str::FromStr;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::domain::ConfigError;

/// Default filter when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "clients_catalog=info";

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::InvalidValue {
                key: "LOG_FORMAT".to_string(),
                message: format!("unknown log format '{other}'"),
            }),
        }
    }
}

impl LogFormat {
    /// Read `LOG_FORMAT`, defaulting to `Pretty` when unset.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` for an unrecognised format.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var("LOG_FORMAT") {
            Ok(raw) => raw.parse(),
            Err(_) => Ok(LogFormat::default()),
        }
    }
}

/// Install the global tracing subscriber.
///
/// A subscriber that is already installed (e.g. by a test harness) is left
/// in place and the failure is only logged.
pub fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}
