//! Configuration types and CLI options.
//!
//! `Config` doubles as the clap argument parser for the binary and as a plain
//! struct the library can be driven with programmatically.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_CRAFT, DEFAULT_GEOCODE_URL, DEFAULT_OBSERVER_URL, DEFAULT_PASSES_URL,
    DEFAULT_POSITION_URL, DEFAULT_REFRESH_INTERVAL_MS, DEFAULT_ROSTER_URL, DEFAULT_TIMEOUT_SECS,
};

/// Logging level for the application.
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
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Tracker configuration.
///
/// # Examples
///
/// ```no_run
/// use iss_tracker::Config;
///
/// let config = Config {
///     interval_ms: 10_000,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "iss_tracker",
    about = "Tracks the ISS and keeps a map marker synchronized with its position"
)]
pub struct Config {
    /// Current-position feed URL
    #[arg(long, default_value = DEFAULT_POSITION_URL)]
    pub position_url: String,

    /// Occupant-roster feed URL
    #[arg(long, default_value = DEFAULT_ROSTER_URL)]
    pub roster_url: String,

    /// Pass-prediction feed URL
    #[arg(long, default_value = DEFAULT_PASSES_URL)]
    pub passes_url: String,

    /// Reverse-geocoding feed URL
    #[arg(long, default_value = DEFAULT_GEOCODE_URL)]
    pub geocode_url: String,

    /// Observer-location feed URL (IP geolocation)
    #[arg(long, default_value = DEFAULT_OBSERVER_URL)]
    pub observer_url: String,

    /// Refresh interval between position polls, in milliseconds
    #[arg(long, default_value_t = DEFAULT_REFRESH_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Per-request network timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Craft identifier used to filter the roster feed
    #[arg(long, default_value = DEFAULT_CRAFT)]
    pub craft: String,

    /// Observer latitude override (skips the observer-location feed)
    #[arg(long, requires = "observer_lon", allow_hyphen_values = true)]
    pub observer_lat: Option<f64>,

    /// Observer longitude override (skips the observer-location feed)
    #[arg(long, requires = "observer_lat", allow_hyphen_values = true)]
    pub observer_lon: Option<f64>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            position_url: DEFAULT_POSITION_URL.to_string(),
            roster_url: DEFAULT_ROSTER_URL.to_string(),
            passes_url: DEFAULT_PASSES_URL.to_string(),
            geocode_url: DEFAULT_GEOCODE_URL.to_string(),
            observer_url: DEFAULT_OBSERVER_URL.to_string(),
            interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            craft: DEFAULT_CRAFT.to_string(),
            observer_lat: None,
            observer_lon: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// Resolved upstream feed URLs, extracted from [`Config`].
#[derive(Debug, Clone)]
pub struct FeedEndpoints {
    /// Current-position feed.
    pub position: String,
    /// Occupant-roster feed.
    pub roster: String,
    /// Pass-prediction feed.
    pub passes: String,
    /// Reverse-geocoding feed.
    pub geocode: String,
    /// Observer-location feed.
    pub observer: String,
}

impl From<&Config> for FeedEndpoints {
    fn from(config: &Config) -> Self {
        Self {
            position: config.position_url.clone(),
            roster: config.roster_url.clone(),
            passes: config.passes_url.clone(),
            geocode: config.geocode_url.clone(),
            observer: config.observer_url.clone(),
        }
    }
}
