//! Formatted console reports.
//!
//! Reports go over the normal log channel at info level; failures use
//! warn/error on the same channel so they stand apart by level, not by
//! destination.

use chrono::{DateTime, Local, TimeZone};

const HEADING_SYMBOL: &str = "-";
const HEADING_OCCURS: usize = 8;

/// Returns a banner heading used to introduce a report.
///
/// E.g. `-------- ISS Information --------`
pub fn heading(text: &str) -> String {
    let delimiter = HEADING_SYMBOL.repeat(HEADING_OCCURS);
    format!("{delimiter} {text} {delimiter}")
}

/// Renders a unix timestamp relative to `now` in local time.
///
/// Same calendar date as `now` renders as "Today at HH:MM", the next calendar
/// date as "Tomorrow at HH:MM", anything else as the weekday name plus time.
/// `now` is injected rather than read from the clock so callers batch-format
/// against one instant and tests stay deterministic.
pub fn relative_from_timestamp(timestamp: i64, now: DateTime<Local>) -> String {
    let when = match Local.timestamp_opt(timestamp, 0) {
        chrono::LocalResult::Single(t) => t,
        // Ambiguous or nonexistent local times only occur around DST shifts;
        // fall back to the raw value rather than guessing an offset.
        _ => return format!("epoch {timestamp}"),
    };

    let time = when.format("%H:%M");
    let days_ahead = when
        .date_naive()
        .signed_duration_since(now.date_naive())
        .num_days();

    match days_ahead {
        0 => format!("Today at {time}"),
        1 => format!("Tomorrow at {time}"),
        _ => format!("{} at {}", when.format("%A"), time),
    }
}
