//! Configuration constants.
//!
//! Map bounds, timing defaults, and the default upstream feed endpoints.

/// Horizontal half-extent of the world map, in degrees of longitude.
pub const MAP_HORIZONTAL_BOUND: f64 = 180.0;

/// Vertical half-extent of the world map, in degrees of latitude.
pub const MAP_VERTICAL_BOUND: f64 = 90.0;

/// Default interval between position polls, in milliseconds.
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 5000;

/// Default per-request network timeout in seconds.
///
/// Kept short so a stalled call makes this tick skip its position update
/// instead of delaying the next scheduled tick.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Craft identifier used to filter the roster feed.
pub const DEFAULT_CRAFT: &str = "ISS";

/// Placeholder label when no place name can be resolved.
pub const UNKNOWN_LOCALITY: &str = "Unknown";

/// Default current-position feed.
pub const DEFAULT_POSITION_URL: &str = "http://api.open-notify.org/iss-now.json";

/// Default occupant-roster feed.
pub const DEFAULT_ROSTER_URL: &str = "http://api.open-notify.org/astros.json";

/// Default pass-prediction feed.
pub const DEFAULT_PASSES_URL: &str = "http://api.open-notify.org/iss-pass.json";

/// Default reverse-geocoding feed.
pub const DEFAULT_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Default observer-location feed (IP geolocation).
pub const DEFAULT_OBSERVER_URL: &str = "https://ipinfo.io/json";
