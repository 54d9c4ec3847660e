//! Read-through memoization of locality and pass-prediction lookups.
//!
//! Both lookups hit comparatively expensive, rate-limited endpoints, and the
//! coordinates they are queried with repeat across a session (the observer is
//! static, the tracked object revisits similar longitudes). A plain unbounded
//! map per lookup eliminates the redundant calls; with one tracked object per
//! session there is no need for eviction.

use std::collections::HashMap;

use log::debug;
use serde_json::Value;

use crate::error_handling::TrackerError;
use crate::fetch::{feeds, Fetcher};

/// Quantization step for cache keys, in degrees.
///
/// Well below the precision of any consumed feed, so identical coordinates
/// always map to the same key and distinct queried coordinates do not collide
/// in practice.
const KEY_QUANTUM_DEG: f64 = 1e-4;

/// A hashable (lat, lon) cache key.
///
/// f64 coordinates cannot key a `HashMap` directly; the key quantizes them to
/// fixed-point ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordKey {
    lat_ticks: i64,
    lon_ticks: i64,
}

impl CoordKey {
    /// Builds the key for a coordinate pair in geo order.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat_ticks: (lat / KEY_QUANTUM_DEG).round() as i64,
            lon_ticks: (lon / KEY_QUANTUM_DEG).round() as i64,
        }
    }
}

/// Session-lifetime lookup cache for locality names and pass predictions.
#[derive(Debug, Default)]
pub struct LookupCache {
    localities: HashMap<CoordKey, String>,
    passes: HashMap<CoordKey, Vec<i64>>,
}

impl LookupCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a human-readable place name for (lat, lon), fetching through
    /// the reverse-geocoding feed on a miss.
    ///
    /// An identical coordinate pair never triggers a second fetch within the
    /// cache's lifetime. Fallback extraction (locality, region, water body,
    /// "Unknown") happens in [`feeds::extract_locality`]; the fallback result
    /// is cached like any other so a coordinate over open ocean is not
    /// re-queried every click.
    ///
    /// # Errors
    ///
    /// Propagates `SourceUnavailable` from the fetch; the caller decides
    /// whether to retry or degrade to a placeholder label.
    pub async fn resolve_locality<F: Fetcher>(
        &mut self,
        fetcher: &F,
        endpoint: &str,
        lat: f64,
        lon: f64,
    ) -> Result<String, TrackerError> {
        let key = CoordKey::new(lat, lon);
        if let Some(name) = self.localities.get(&key) {
            debug!("locality cache hit for ({lat}, {lon})");
            return Ok(name.clone());
        }

        let params = vec![("latlng".to_string(), format!("{lat},{lon}"))];
        let payload: Value = fetcher.fetch_json(endpoint, &params).await?;
        let name = feeds::extract_locality(&payload);
        self.localities.insert(key, name.clone());
        Ok(name)
    }

    /// Resolves predicted rise times for an observer at (lat, lon), fetching
    /// through the pass-prediction feed on a miss.
    ///
    /// # Errors
    ///
    /// Propagates `SourceUnavailable` or `MalformedResponse` from the fetch;
    /// a failed fetch is not cached, so the next call retries.
    pub async fn resolve_passes<F: Fetcher>(
        &mut self,
        fetcher: &F,
        endpoint: &str,
        lat: f64,
        lon: f64,
    ) -> Result<Vec<i64>, TrackerError> {
        let key = CoordKey::new(lat, lon);
        if let Some(rises) = self.passes.get(&key) {
            debug!("pass cache hit for ({lat}, {lon})");
            return Ok(rises.clone());
        }

        let params = vec![
            ("lat".to_string(), lat.to_string()),
            ("lon".to_string(), lon.to_string()),
        ];
        let payload: Value = fetcher.fetch_json(endpoint, &params).await?;
        let rises = feeds::parse_passes(&payload)?;
        self.passes.insert(key, rises.clone());
        Ok(rises)
    }
}
