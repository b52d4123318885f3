/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! # Zerogate Config Module
//!
//! Common configuration framework for the console crates.
//!
//! # Variable Naming Convention
//!
//! - Struct fields use snake_case (e.g., `api_url`, `poll_interval`)
//! - Environment variables use SCREAMING_SNAKE_CASE prefixed with
//!   "ZEROGATE__" (e.g., `ZEROGATE__CONSOLE__API_URL`)
//! - Configuration file keys use snake_case (e.g., `console.api_url`)
//!
//! # Configuration Overriding
//!
//! Values are loaded and overridden in the following order (later sources
//! take precedence):
//!
//! 1. Default values from the embedded `default.toml` file
//! 2. Values from an optional external configuration file (if provided)
//! 3. Environment variables
//!
//! # Available Environment Variables
//!
//! - `ZEROGATE__CONSOLE__API_URL`: Base URL of the control-plane API
//!   Default: "http://127.0.0.1:8080"
//!
//! - `ZEROGATE__CONSOLE__REQUEST_TIMEOUT`: Per-request timeout in seconds
//!   Default: 10
//!
//! - `ZEROGATE__CONSOLE__POLL_INTERVAL`: Dashboard refresh interval in seconds
//!   Default: 10
//!
//! - `ZEROGATE__LOG__LEVEL`: Log level ("trace", "debug", "info", "warn", "error")
//!   Default: "info"
//!
//! - `ZEROGATE__PROXY__LISTEN_ADDR`: Edge proxy bind address
//!   Default: "127.0.0.1:3001"
//!
//! - `ZEROGATE__PROXY__BACKEND_URL`: Origin /api/v1/* requests are relayed to
//!   Default: "http://127.0.0.1:8080"

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

// Include the default settings file as a string constant
const DEFAULT_SETTINGS: &str = include_str!("../default.toml");

/// Represents the main settings structure for the application
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Console (API client / view) configuration
    pub console: Console,
    /// Logging configuration
    pub log: Log,
    /// Edge proxy configuration
    pub proxy: Proxy,
    /// Session persistence configuration
    pub session: Session,
}

/// Represents the console configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Console {
    /// Base URL of the control-plane API
    pub api_url: String,
    /// Per-request timeout in seconds
    pub request_timeout: u64,
    /// Dashboard background refresh interval in seconds
    pub poll_interval: u64,
    /// Default `limit` query value for log/metric list endpoints
    pub list_limit: u32,
}

/// Represents the logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    /// Log level (e.g., "info", "debug", "warn", "error")
    pub level: String,
    /// Log format: "text" for human-readable, "json" for structured JSON
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Represents the edge proxy configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Proxy {
    /// Address the proxy listens on
    pub listen_addr: String,
    /// Backend origin that /api/v1/* requests are forwarded to
    pub backend_url: String,
}

/// Represents the session persistence configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Session {
    /// Path of the JSON file holding the signed-in session
    pub file: String,
}

impl Settings {
    /// Creates a new `Settings` instance
    ///
    /// # Arguments
    ///
    /// * `file` - An optional path to a configuration file
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing the `Settings` instance or a `ConfigError`
    pub fn new(file: Option<String>) -> Result<Self, ConfigError> {
        // Start with default settings from the embedded TOML file
        let mut s = Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, config::FileFormat::Toml));

        // If a configuration file is provided, add it as a source
        s = match file {
            Some(x) => s.add_source(File::with_name(x.as_str())),
            None => s,
        };

        // Add environment variables as a source, prefixed with "ZEROGATE" and
        // using "__" as a separator
        s = s.add_source(Environment::with_prefix("ZEROGATE").separator("__"));

        let settings = s.build()?;

        settings.try_deserialize()
    }
}
