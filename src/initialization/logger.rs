//! Logger initialization.
//!
//! Configures `env_logger` with custom formatting: colored plain text or
//! line-oriented JSON. `RUST_LOG` is honored but the explicitly passed level
//! takes precedence, so `--log-level` always wins.

use std::io::Write;

use colored::Colorize;
use log::LevelFilter;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Initializes the logger with the specified level and format.
///
/// Third-party HTTP internals (reqwest, hyper) are capped at info so debug
/// runs show tracker activity rather than connection chatter.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already
/// installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("iss_tracker", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };
                writeln!(buf, "[{}] {}", colored_level, record.args())
            });
        }
    }

    // try_init() instead of init() so tests that initialize repeatedly get an
    // error value rather than a panic.
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}
