//! Geographic and map coordinate types.
//!
//! Two coordinate orders coexist and must never be mixed up: *geo order*
//! (latitude, longitude) as received from the position feed, and *map order*
//! (x = longitude, y = latitude) as consumed by the render surface. The
//! conversion is a fixed axis swap in both directions.

use crate::config::{MAP_HORIZONTAL_BOUND, MAP_VERTICAL_BOUND};
use crate::error_handling::TrackerError;

/// A position in geo order: latitude first, longitude second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    /// Latitude in degrees, within [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, within [-180, 180].
    pub lon: f64,
}

impl GeoPosition {
    /// Validates coordinate ranges and constructs a position.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` when either coordinate is
    /// non-finite or out of range.
    pub fn new(lat: f64, lon: f64) -> Result<Self, TrackerError> {
        if !lat.is_finite() || !(-MAP_VERTICAL_BOUND..=MAP_VERTICAL_BOUND).contains(&lat) {
            return Err(TrackerError::InvalidInput(format!(
                "latitude {lat} outside [-{MAP_VERTICAL_BOUND}, {MAP_VERTICAL_BOUND}]"
            )));
        }
        if !lon.is_finite() || !(-MAP_HORIZONTAL_BOUND..=MAP_HORIZONTAL_BOUND).contains(&lon) {
            return Err(TrackerError::InvalidInput(format!(
                "longitude {lon} outside [-{MAP_HORIZONTAL_BOUND}, {MAP_HORIZONTAL_BOUND}]"
            )));
        }
        Ok(Self { lat, lon })
    }

    /// Converts to map order (axis swap).
    pub fn to_map(self) -> MapPoint {
        MapPoint {
            x: self.lon,
            y: self.lat,
        }
    }
}

/// A position in map order: x is longitude, y is latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    /// Horizontal map coordinate (longitude in degrees).
    pub x: f64,
    /// Vertical map coordinate (latitude in degrees).
    pub y: f64,
}

impl MapPoint {
    /// Converts back to geo order (axis swap).
    pub fn to_geo(self) -> GeoPosition {
        GeoPosition {
            lat: self.y,
            lon: self.x,
        }
    }
}

/// Half-extents of the world-coordinate map shown by the surface.
#[derive(Debug, Clone, Copy)]
pub struct MapBounds {
    /// Horizontal half-extent in degrees of longitude.
    pub horizontal: f64,
    /// Vertical half-extent in degrees of latitude.
    pub vertical: f64,
}

impl MapBounds {
    /// The full-world map: 180 degrees of longitude, 90 of latitude.
    pub const WORLD: MapBounds = MapBounds {
        horizontal: MAP_HORIZONTAL_BOUND,
        vertical: MAP_VERTICAL_BOUND,
    };

    /// True when the move from `prev` to `next` should be treated as a wrap
    /// around the map edge rather than continuous motion.
    ///
    /// The rule: if the sum of absolute x values exceeds the horizontal bound,
    /// or the sum of absolute y values exceeds the vertical bound, the object
    /// crossed the antimeridian or pole edge and the pen must be lifted before
    /// repositioning. A pen-down move in that situation would draw a spurious
    /// line across the whole map.
    pub fn is_wrap(&self, prev: MapPoint, next: MapPoint) -> bool {
        prev.x.abs() + next.x.abs() > self.horizontal
            || prev.y.abs() + next.y.abs() > self.vertical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_map_round_trip_is_exact() {
        let geo = GeoPosition::new(10.0, 20.0).unwrap();
        let map = geo.to_map();
        assert_eq!(map, MapPoint { x: 20.0, y: 10.0 });
        assert_eq!(map.to_geo(), geo);
    }

    #[test]
    fn test_axis_swap_is_not_identity() {
        // The classic swap bug: feeding geo order straight into the surface.
        let geo = GeoPosition::new(45.0, -120.0).unwrap();
        let map = geo.to_map();
        assert_eq!(map.x, -120.0);
        assert_eq!(map.y, 45.0);
    }

    #[test]
    fn test_new_rejects_out_of_range_latitude() {
        assert!(GeoPosition::new(90.1, 0.0).is_err());
        assert!(GeoPosition::new(-90.1, 0.0).is_err());
        assert!(GeoPosition::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_new_rejects_out_of_range_longitude() {
        assert!(GeoPosition::new(0.0, 180.5).is_err());
        assert!(GeoPosition::new(0.0, -180.5).is_err());
        assert!(GeoPosition::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_new_accepts_boundary_values() {
        assert!(GeoPosition::new(90.0, 180.0).is_ok());
        assert!(GeoPosition::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_wrap_not_triggered_within_bounds() {
        let bounds = MapBounds::WORLD;
        let prev = MapPoint { x: 20.0, y: 10.0 };
        let next = MapPoint { x: 25.0, y: 12.0 };
        assert!(!bounds.is_wrap(prev, next));
    }

    #[test]
    fn test_wrap_triggered_by_horizontal_sum() {
        let bounds = MapBounds::WORLD;
        // |20| + |-170| = 190 > 180: the object crossed the antimeridian.
        let prev = MapPoint { x: 20.0, y: 10.0 };
        let next = MapPoint { x: -170.0, y: 10.5 };
        assert!(bounds.is_wrap(prev, next));
    }

    #[test]
    fn test_wrap_triggered_by_vertical_sum() {
        let bounds = MapBounds::WORLD;
        // |50| + |55| = 105 > 90 even though x stays put.
        let prev = MapPoint { x: 0.0, y: 50.0 };
        let next = MapPoint { x: 1.0, y: 55.0 };
        assert!(bounds.is_wrap(prev, next));
    }

    #[test]
    fn test_wrap_boundary_sum_is_continuous() {
        let bounds = MapBounds::WORLD;
        // Sums exactly at the bound are still a continuous move.
        let prev = MapPoint { x: 90.0, y: 45.0 };
        let next = MapPoint { x: -90.0, y: -45.0 };
        assert!(!bounds.is_wrap(prev, next));
    }

    #[test]
    fn test_wrap_same_side_large_values() {
        let bounds = MapBounds::WORLD;
        // Two far-east positions: the sum rule treats this as a wrap even
        // without a crossing, and the pen lifts.
        let prev = MapPoint { x: 170.0, y: 0.0 };
        let next = MapPoint { x: 175.0, y: 0.0 };
        assert!(bounds.is_wrap(prev, next));
    }
}
