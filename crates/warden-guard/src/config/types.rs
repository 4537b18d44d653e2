//! Guard configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use warden_common_log::{LogConfig, LogFormat, LogLevel};

/// Main guard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Transports this deployment serves.
    #[serde(default = "default_transports")]
    pub transports: Vec<String>,
    /// Decision audit logging.
    #[serde(default)]
    pub audit: AuditConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            transports: default_transports(),
            audit: AuditConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_transports() -> Vec<String> {
    vec!["http".to_string()]
}

fn default_true() -> bool {
    true
}

/// Decision audit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Emit an audit event per decision.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Log granted decisions at `info` instead of `debug`.
    #[serde(default)]
    pub log_granted: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_granted: false,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty, compact or json).
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Optional log file.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Convert into the shared logging bootstrap configuration.
    pub fn to_log_config(&self) -> LogConfig {
        LogConfig {
            level: LogLevel::parse(&self.level).unwrap_or_default(),
            format: LogFormat::parse(&self.format).unwrap_or_default(),
            file_path: self.file.clone(),
            ..LogConfig::default()
        }
    }
}
