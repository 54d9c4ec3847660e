//! Typed views over the upstream feed payloads.
//!
//! Four feeds are consumed: current position, occupant roster, pass
//! predictions, and reverse geocoding, plus the one-shot observer-location
//! lookup. Payloads arrive as loose JSON; everything here converts them into
//! the crate's types or fails with `MalformedResponse`.

use serde::Deserialize;
use serde_json::Value;

use crate::config::UNKNOWN_LOCALITY;
use crate::error_handling::TrackerError;
use crate::geo::GeoPosition;

/// A report from the current-position feed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionReport {
    /// The reported position, in geo order.
    pub position: GeoPosition,
    /// Unix timestamp of the report, in epoch seconds.
    pub timestamp: i64,
}

#[derive(Debug, Deserialize)]
struct RosterEntry {
    name: String,
    craft: String,
}

#[derive(Debug, Deserialize)]
struct PassEntry {
    risetime: i64,
}

/// Parses the current-position feed.
///
/// The feed nests coordinates under `iss_position` and sends them as numeric
/// strings; some mirrors send plain numbers, both are accepted.
///
/// # Errors
///
/// `MalformedResponse` when the position object, a coordinate field, or the
/// timestamp is missing or non-numeric, or when a coordinate is out of range.
pub fn parse_position(value: &Value) -> Result<PositionReport, TrackerError> {
    let position = value
        .get("iss_position")
        .ok_or_else(|| TrackerError::MalformedResponse("missing iss_position".into()))?;
    let lat = coord_field(position, "latitude")?;
    let lon = coord_field(position, "longitude")?;
    let timestamp = value
        .get("timestamp")
        .and_then(Value::as_i64)
        .ok_or_else(|| TrackerError::MalformedResponse("missing timestamp".into()))?;
    // Out-of-range coordinates here are the feed's fault, not the caller's.
    let position = GeoPosition::new(lat, lon).map_err(|_| {
        TrackerError::MalformedResponse(format!("coordinates out of range: ({lat}, {lon})"))
    })?;
    Ok(PositionReport {
        position,
        timestamp,
    })
}

fn coord_field(obj: &Value, field: &str) -> Result<f64, TrackerError> {
    let raw = obj
        .get(field)
        .ok_or_else(|| TrackerError::MalformedResponse(format!("missing {field}")))?;
    match raw {
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| {
            TrackerError::MalformedResponse(format!("non-numeric {field}: {s:?}"))
        }),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| TrackerError::MalformedResponse(format!("non-numeric {field}"))),
        _ => Err(TrackerError::MalformedResponse(format!(
            "non-numeric {field}"
        ))),
    }
}

/// Parses the roster feed, keeping only the names of people aboard `craft`.
///
/// # Errors
///
/// `MalformedResponse` when the `people` array is missing or an entry lacks
/// a name or craft identifier.
pub fn parse_roster(value: &Value, craft: &str) -> Result<Vec<String>, TrackerError> {
    let people = value
        .get("people")
        .cloned()
        .ok_or_else(|| TrackerError::MalformedResponse("missing people".into()))?;
    let entries: Vec<RosterEntry> = serde_json::from_value(people)
        .map_err(|e| TrackerError::MalformedResponse(format!("bad roster entry: {e}")))?;
    Ok(entries
        .into_iter()
        .filter(|entry| entry.craft == craft)
        .map(|entry| entry.name)
        .collect())
}

/// Parses the pass-prediction feed into rise times, preserving feed order.
///
/// # Errors
///
/// `MalformedResponse` when the `response` array is missing or an entry lacks
/// a rise time.
pub fn parse_passes(value: &Value) -> Result<Vec<i64>, TrackerError> {
    let response = value
        .get("response")
        .cloned()
        .ok_or_else(|| TrackerError::MalformedResponse("missing response".into()))?;
    let entries: Vec<PassEntry> = serde_json::from_value(response)
        .map_err(|e| TrackerError::MalformedResponse(format!("bad pass entry: {e}")))?;
    Ok(entries.into_iter().map(|entry| entry.risetime).collect())
}

/// Extracts the best-available place name from a reverse-geocode payload.
///
/// Fallback order: named locality, then administrative region, then the first
/// result whose formatted address names an ocean or sea, then the literal
/// "Unknown". A `ZERO_RESULTS` status short-circuits to "Unknown". This never
/// fails; an unexpected payload shape simply falls through the chain.
pub fn extract_locality(value: &Value) -> String {
    if value.get("status").and_then(Value::as_str) == Some("ZERO_RESULTS") {
        return UNKNOWN_LOCALITY.to_string();
    }

    if let Some(name) = non_empty_str(value, "locality") {
        return name;
    }
    if let Some(region) = non_empty_str(value, "admin_region") {
        return region;
    }

    if let Some(results) = value.get("results").and_then(Value::as_array) {
        for result in results {
            if let Some(address) = result.get("formatted_address").and_then(Value::as_str) {
                if address.contains("Ocean") || address.contains("Sea") {
                    return address.to_string();
                }
            }
        }
    }

    UNKNOWN_LOCALITY.to_string()
}

fn non_empty_str(value: &Value, field: &str) -> Option<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parses the observer-location feed, which reports `"loc": "<lat>,<lon>"`.
///
/// # Errors
///
/// `MalformedResponse` when the `loc` field is missing or unparsable;
/// `InvalidInput` when the parsed coordinates are out of range.
pub fn parse_observer_location(value: &Value) -> Result<GeoPosition, TrackerError> {
    let loc = value
        .get("loc")
        .and_then(Value::as_str)
        .ok_or_else(|| TrackerError::MalformedResponse("missing loc".into()))?;
    let (lat, lon) = loc
        .split_once(',')
        .ok_or_else(|| TrackerError::MalformedResponse(format!("unparsable loc: {loc:?}")))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| TrackerError::MalformedResponse(format!("non-numeric latitude in {loc:?}")))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|_| TrackerError::MalformedResponse(format!("non-numeric longitude in {loc:?}")))?;
    GeoPosition::new(lat, lon)
}
