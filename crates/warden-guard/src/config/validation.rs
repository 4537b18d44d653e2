//! Configuration validation.

use super::types::GuardConfig;
use crate::context::TransportKind;
use crate::error::GuardError;
use thiserror::Error;

/// Configuration problem found by [`validate_config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `transports` is empty.
    #[error("No transports enabled")]
    NoTransports,

    /// A transport name does not parse.
    #[error("Invalid transport `{name}`: {source}")]
    InvalidTransport {
        name: String,
        #[source]
        source: GuardError,
    },

    /// Unknown log level.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    /// Unknown log format.
    #[error("Invalid log format: {0}")]
    InvalidLogFormat(String),
}

/// Validate guard configuration, collecting every problem found.
pub fn validate_config(config: &GuardConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.transports.is_empty() {
        errors.push(ConfigError::NoTransports);
    }

    for name in &config.transports {
        if let Err(source) = name.parse::<TransportKind>() {
            errors.push(ConfigError::InvalidTransport {
                name: name.clone(),
                source,
            });
        }
    }

    let valid_levels = ["trace", "debug", "info", "warn", "warning", "error"];
    if !valid_levels.contains(&config.logging.level.to_lowercase().as_str()) {
        errors.push(ConfigError::InvalidLogLevel(config.logging.level.clone()));
    }

    let valid_formats = ["pretty", "compact", "json"];
    if !valid_formats.contains(&config.logging.format.to_lowercase().as_str()) {
        errors.push(ConfigError::InvalidLogFormat(config.logging.format.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
