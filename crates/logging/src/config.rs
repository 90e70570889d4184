//! # Logging Configuration
//!
//! Configuration for the logging subsystem.
//! Supports environment variables and programmatic configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, Registry};

/// Logging configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct LoggingConfig {
    /// Log level (debug, info, warn, error)
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format (json, pretty, compact)
    #[serde(default = "default_format")]
    pub format: String,

    /// Optional log file path
    #[serde(default)]
    pub log_file: Option<String>,

    /// Whether to include timestamps
    #[serde(default = "default::bool_true")]
    pub include_timestamp: bool,

    /// Environment (development, testing, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

mod default {
    pub fn bool_true() -> bool { true }
}

fn default_level() -> String { "info".to_string() }

fn default_format() -> String { "compact".to_string() }

fn default_environment() -> String { "development".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level:             default_level(),
            format:            default_format(),
            log_file:          None,
            include_timestamp: true,
            environment:       default_environment(),
        }
    }
}

impl LoggingConfig {
    /// Create configuration from environment variables.
    ///
    /// `RUST_LOG`, `SIGNIEL_LOG_FORMAT`, `SIGNIEL_LOG_FILE` and `SIGNIEL_ENV`
    /// take precedence over the arguments.
    pub fn from_env(level: &str, format: &str, log_file: Option<&str>) -> Self {
        Self {
            level: std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()),
            format: std::env::var("SIGNIEL_LOG_FORMAT").unwrap_or_else(|_| format.to_string()),
            log_file: std::env::var("SIGNIEL_LOG_FILE")
                .ok()
                .or(log_file.map(|s| s.to_string())),
            environment: std::env::var("SIGNIEL_ENV").unwrap_or_else(|_| default_environment()),
            ..Default::default()
        }
    }

    /// Parsed level filter, falling back to INFO for unknown values.
    pub fn level_filter(&self) -> LevelFilter { self.level.parse().unwrap_or(LevelFilter::INFO) }

    /// Build the tracing subscriber from this configuration.
    pub fn build(&self) -> Box<dyn tracing::Subscriber + Send + Sync> {
        let level = self.level_filter();

        match self.format.as_str() {
            "pretty" => self.build_pretty_subscriber(level),
            "compact" => self.build_compact_subscriber(level),
            _ => self.build_json_subscriber(level),
        }
    }

    /// Build a JSON subscriber for production logging.
    fn build_json_subscriber(&self, level: LevelFilter) -> Box<dyn tracing::Subscriber + Send + Sync> {
        let stdout_layer = if self.include_timestamp {
            fmt::layer()
                .json()
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .boxed()
        }
        else {
            fmt::layer().json().without_time().boxed()
        };

        match self.log_file.as_deref() {
            Some(log_file) => {
                let path = Path::new(log_file);
                let directory = path.parent().unwrap_or_else(|| Path::new("."));
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "signiel.log".to_string());
                let file_appender = tracing_appender::rolling::hourly(directory, file_name);
                let file_layer = fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(file_appender);
                Box::new(
                    Registry::default()
                        .with(level)
                        .with(stdout_layer)
                        .with(file_layer),
                )
            },
            None => Box::new(Registry::default().with(level).with(stdout_layer)),
        }
    }

    /// Build a pretty subscriber for development logging.
    fn build_pretty_subscriber(&self, level: LevelFilter) -> Box<dyn tracing::Subscriber + Send + Sync> {
        let subscriber = fmt::layer()
            .pretty()
            .with_timer(fmt::time::UtcTime::rfc_3339());
        Box::new(Registry::default().with(level).with(subscriber))
    }

    /// Build a compact subscriber for testing.
    fn build_compact_subscriber(&self, level: LevelFilter) -> Box<dyn tracing::Subscriber + Send + Sync> {
        let subscriber = fmt::layer()
            .compact()
            .with_timer(fmt::time::UtcTime::rfc_3339());
        Box::new(Registry::default().with(level).with(subscriber))
    }
}
