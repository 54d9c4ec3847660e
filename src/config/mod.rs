//! Configuration types, CLI options, and constants.

mod constants;
mod types;

pub use constants::*;
pub use types::{Config, FeedEndpoints, LogFormat, LogLevel};
