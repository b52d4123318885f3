/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! # Zerogate Logging Module
//!
//! Custom logging framework shared by the console crates.
//!
//! ## Features
//! - Thread-safe logging
//! - Dynamic log level adjustment
//! - Text and structured JSON output formats
//!
//! ## Usage
//!
//! 1. Initialize the logger:
//!    ```ignore
//!    zerogate_utils::logging::init("info").expect("Failed to initialize logger");
//!    ```
//!
//! 2. Use the log macros throughout your code:
//!    ```ignore
//!    info!("agent list refreshed");
//!    warn!("policy refetch failed");
//!    ```
//!
//! 3. Update log level at runtime if needed:
//!    ```ignore
//!    zerogate_utils::logging::update_log_level("debug").unwrap();
//!    ```

use log::{LevelFilter, Metadata, Record, SetLoggerError};
use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

pub use log::{debug, error, info, trace, warn};

static LOGGER: ZerogateLogger = ZerogateLogger;
static CURRENT_LEVEL: AtomicUsize = AtomicUsize::new(LevelFilter::Info as usize);
static JSON_FORMAT: AtomicBool = AtomicBool::new(false);
static INIT: OnceCell<()> = OnceCell::new();

/// Custom logger for the Zerogate console
pub struct ZerogateLogger;

impl log::Log for ZerogateLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level()
            <= level_filter_from_u8(CURRENT_LEVEL.load(Ordering::Relaxed).try_into().unwrap())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if JSON_FORMAT.load(Ordering::Relaxed) {
                let log_entry = serde_json::json!({
                    "timestamp": chrono::Utc::now().to_rfc3339(),
                    "level": record.level().to_string().to_lowercase(),
                    "target": record.target(),
                    "message": format!("{}", record.args()),
                    "module": record.module_path(),
                    "file": record.file(),
                    "line": record.line()
                });
                eprintln!("{}", log_entry);
            } else {
                eprintln!(
                    "{} - {}: {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                    record.level(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Initializes the logging system with the specified log level and the
/// default text format.
pub fn init(level: &str) -> Result<(), SetLoggerError> {
    init_with_format(level, "text")
}

/// Initializes the logging system with the specified log level and format.
///
/// # Arguments
/// * `level` - String representation of the log level ("debug", "info", "warn", "error")
/// * `format` - Log output format ("text" for human-readable, "json" for structured JSON)
pub fn init_with_format(level: &str, format: &str) -> Result<(), SetLoggerError> {
    let level_filter = str_to_level_filter(level);
    let use_json = format.eq_ignore_ascii_case("json");

    INIT.get_or_init(|| {
        log::set_logger(&LOGGER)
            .map(|()| log::set_max_level(LevelFilter::Trace))
            .expect("Failed to set logger");
    });

    JSON_FORMAT.store(use_json, Ordering::Relaxed);
    CURRENT_LEVEL.store(level_filter as usize, Ordering::Relaxed);
    log::set_max_level(level_filter);
    Ok(())
}

/// Updates the current log level.
///
/// Unknown level strings fall back to "info".
pub fn update_log_level(level: &str) -> Result<(), String> {
    let new_level = str_to_level_filter(level);
    CURRENT_LEVEL.store(new_level as usize, Ordering::Relaxed);
    log::set_max_level(new_level);
    Ok(())
}

fn str_to_level_filter(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

fn level_filter_from_u8(v: u8) -> LevelFilter {
    match v {
        0 => LevelFilter::Off,
        1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        5 => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

pub mod prelude {
    pub use log::{debug, error, info, trace, warn};
}
