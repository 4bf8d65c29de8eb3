// SPDX-License-Identifier: MPL-2.0
//! Tracing setup.
//!
//! Installs a `tracing-subscriber` fmt layer filtered by an `EnvFilter`.
//! `RUST_LOG` takes precedence over the configured level.

use crate::config::LoggingConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// Structured JSON output.
    Json,
}

/// Initializes the global subscriber from the `[logging]` section.
///
/// # Errors
///
/// Fails if the level directive does not parse or a global subscriber is
/// already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    init_with(config.level(), config.format)
}

/// Initializes the global subscriber with an explicit level and format.
///
/// # Errors
///
/// See [`init`].
pub fn init_with(level: &str, format: LogFormat) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(filter_directive(level))
            .map_err(|e| Error::Logging(e.to_string()))?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry.with(fmt::layer().with_target(true)).try_init(),
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
    }
    .map_err(|e| Error::Logging(e.to_string()))
}

/// Scopes `level` to this crate and keeps the GUI stack quiet.
fn filter_directive(level: &str) -> String {
    format!("warn,hazard_watch={level}")
}
