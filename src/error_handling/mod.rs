//! Error types and propagation policy.
//!
//! Initialization failures are fatal. Failures during a scheduled refresh tick
//! are logged and swallowed so the next tick can retry. Cache-lookup failures
//! degrade to a placeholder label at the reporting layer.

mod types;

pub use types::{InitializationError, TrackerError};
