//! Configuration types.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_CREDENTIALS, DEFAULT_DATA_FILE, DEFAULT_PORT,
};
use crate::store::DuplicatePolicy;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Duplicate policy selected by the `--strict-identifiers` flag.
pub fn duplicate_policy(strict: bool) -> DuplicatePolicy {
    if strict {
        DuplicatePolicy::Reject
    } else {
        DuplicatePolicy::LastWriteWins
    }
}

/// API server configuration.
///
/// # Examples
///
/// ```no_run
/// use sms_search::ServerConfig;
///
/// let config = ServerConfig {
///     port: 9000,
///     strict_identifiers: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// JSON file to load transactions from
    pub data_file: PathBuf,

    /// Address to bind
    pub bind: String,

    /// Port to listen on
    pub port: u16,

    /// Accepted `user:password` pairs
    pub credentials: Vec<String>,

    /// Reject datasets with duplicate identifiers instead of last-write-wins
    pub strict_identifiers: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            bind: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            credentials: DEFAULT_CREDENTIALS.iter().map(|c| c.to_string()).collect(),
            strict_identifiers: false,
        }
    }
}

/// CLI demo configuration.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// JSON file to load transactions from (sample data when empty or missing)
    pub data_file: PathBuf,

    /// Identifier compared individually
    pub id: u64,

    /// Identifiers for the benchmark; defaults depend on dataset size
    pub benchmark_ids: Option<Vec<u64>>,

    /// Reject datasets with duplicate identifiers instead of last-write-wins
    pub strict_identifiers: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            id: 1,
            benchmark_ids: None,
            strict_identifiers: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.bind, "127.0.0.1");
        assert_eq!(config.data_file, PathBuf::from("sms_transactions.json"));
        assert_eq!(config.credentials.len(), 2);
        assert!(!config.strict_identifiers);
    }

    #[test]
    fn test_demo_config_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.id, 1);
        assert!(config.benchmark_ids.is_none());
    }

    #[test]
    fn test_duplicate_policy_from_flag() {
        assert_eq!(duplicate_policy(true), DuplicatePolicy::Reject);
        assert_eq!(duplicate_policy(false), DuplicatePolicy::LastWriteWins);
    }
}
