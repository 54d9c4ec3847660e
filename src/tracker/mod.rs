//! The tracker: keeps one satellite marker in sync with its reported position.
//!
//! Lifecycle is two states: uninitialized until the first successful fetch
//! (`initialize`), then tracking forever. Every scheduled `refresh` moves the
//! marker, deciding from the previous and new map coordinates whether the
//! move is continuous (pen stays down, trail drawn) or a wrap around the map
//! edge (pen lifted, marker repositioned, pen lowered).

use chrono::Local;
use log::{info, warn};

use crate::cache::LookupCache;
use crate::config::{FeedEndpoints, UNKNOWN_LOCALITY};
use crate::error_handling::TrackerError;
use crate::fetch::feeds::{self, PositionReport};
use crate::fetch::Fetcher;
use crate::geo::{GeoPosition, MapBounds, MapPoint};
use crate::render::Surface;
use crate::report;

/// Tracks one satellite on a render surface.
///
/// Owns the surface and all mutable tracking state; the owner invokes
/// `refresh` on a fixed schedule and the click operations on dispatch. All
/// methods take `&mut self`, so at most one operation is ever in flight.
pub struct Tracker<F, S> {
    fetcher: F,
    surface: S,
    endpoints: FeedEndpoints,
    bounds: MapBounds,
    craft: String,
    position: Option<MapPoint>,
    last_update: i64,
    passengers: Vec<String>,
    locality: Option<String>,
    cache: LookupCache,
}

impl<F: Fetcher, S: Surface> Tracker<F, S> {
    /// Creates an uninitialized tracker. No fetch happens until
    /// [`initialize`](Self::initialize).
    pub fn new(fetcher: F, surface: S, endpoints: FeedEndpoints, craft: impl Into<String>) -> Self {
        Self {
            fetcher,
            surface,
            endpoints,
            bounds: MapBounds::WORLD,
            craft: craft.into(),
            position: None,
            last_update: 0,
            passengers: Vec::new(),
            locality: None,
            cache: LookupCache::new(),
        }
    }

    /// Performs the one-shot initial fetch and first placement.
    ///
    /// The marker is repositioned with the pen up so no line is drawn from
    /// the surface origin, then the pen is lowered and the marker shown.
    ///
    /// # Errors
    ///
    /// Fatal to startup: `SourceUnavailable` when the feed cannot be reached,
    /// `MalformedResponse` when it does not return a well-formed position.
    pub async fn initialize(&mut self) -> Result<MapPoint, TrackerError> {
        let report = self.fetch_position().await?;
        let point = report.position.to_map();

        self.surface.pen_up();
        self.surface.move_to(point.x, point.y);
        self.surface.pen_down();
        self.surface.show();

        self.position = Some(point);
        self.last_update = report.timestamp;
        self.refresh_roster().await;
        Ok(point)
    }

    /// Scheduled tick: fetches the latest position and moves the marker.
    ///
    /// Applies the wrap rule from [`MapBounds::is_wrap`]: a discontinuous
    /// jump lifts the pen around the move, a continuous one draws through.
    /// A retried fetch returning identical data moves the marker to where it
    /// already is and changes nothing else, so transport-level retries cannot
    /// double-draw.
    ///
    /// # Errors
    ///
    /// Non-fatal by policy: the caller logs the error, the previous position
    /// stays in place, and the next tick retries. `InvalidInput` is returned
    /// if called before [`initialize`](Self::initialize).
    pub async fn refresh(&mut self) -> Result<MapPoint, TrackerError> {
        let prev = self.position.ok_or_else(|| {
            TrackerError::InvalidInput("refresh called before initialize".into())
        })?;

        let report = self.fetch_position().await?;
        let next = report.position.to_map();

        if self.bounds.is_wrap(prev, next) {
            self.surface.pen_up();
            self.surface.move_to(next.x, next.y);
            self.surface.pen_down();
        } else {
            self.surface.move_to(next.x, next.y);
        }

        self.position = Some(next);
        self.last_update = report.timestamp;
        self.refresh_roster().await;
        Ok(next)
    }

    /// Marker click: fresh fetch plus a formatted state report on the log
    /// channel.
    ///
    /// The locality lookup goes through the cache and degrades to "Unknown"
    /// on failure rather than failing the report.
    ///
    /// # Errors
    ///
    /// Returns the underlying refresh error when the position fetch fails.
    pub async fn on_click_info(&mut self) -> Result<(), TrackerError> {
        let point = self.refresh().await?;
        let geo = point.to_geo();

        let locality = self.locality_or_unknown(geo.lat, geo.lon).await;
        self.locality = Some(locality.clone());

        let when = report::relative_from_timestamp(self.last_update, Local::now());
        info!("{}", report::heading(&format!("ISS Information ({when})")));
        info!("Above: {locality}");
        info!("Latitude: {}", geo.lat);
        info!("Longitude: {}", geo.lon);
        if !self.passengers.is_empty() {
            info!("Passengers:");
            for name in &self.passengers {
                info!("\t- {name}");
            }
        }
        Ok(())
    }

    /// Observer-pin click: reports the upcoming overhead passes for the given
    /// observer coordinate.
    ///
    /// Both the pass predictions and the observer locality resolve through
    /// the cache, so a static observer costs one fetch each per session.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for out-of-range coordinates; `SourceUnavailable` or
    /// `MalformedResponse` when the pass feed fails.
    pub async fn on_click_next_pass(&mut self, lat: f64, lon: f64) -> Result<(), TrackerError> {
        let observer = GeoPosition::new(lat, lon)?;

        let rises = self
            .cache
            .resolve_passes(
                &self.fetcher,
                &self.endpoints.passes,
                observer.lat,
                observer.lon,
            )
            .await?;
        let locality = self.locality_or_unknown(observer.lat, observer.lon).await;

        info!("{}", report::heading(&format!("Next Pass ({locality})")));
        let now = Local::now();
        for (index, rise) in rises.iter().enumerate() {
            info!("{}. {}", index + 1, report::relative_from_timestamp(*rise, now));
        }
        Ok(())
    }

    /// Current marker position in map order, if initialized.
    pub fn position(&self) -> Option<MapPoint> {
        self.position
    }

    /// The owned render surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The owned fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Epoch seconds of the last accepted position report.
    pub fn last_update(&self) -> i64 {
        self.last_update
    }

    /// Names of the people currently aboard the tracked craft.
    pub fn passengers(&self) -> &[String] {
        &self.passengers
    }

    /// Most recently resolved locality, if any click report has run.
    pub fn locality(&self) -> Option<&str> {
        self.locality.as_deref()
    }

    async fn fetch_position(&self) -> Result<PositionReport, TrackerError> {
        let payload = self
            .fetcher
            .fetch_json(&self.endpoints.position, &[])
            .await?;
        feeds::parse_position(&payload)
    }

    /// Roster failures never block a position update; the stale roster is
    /// kept until a poll succeeds.
    async fn refresh_roster(&mut self) {
        let fetched = self.fetcher.fetch_json(&self.endpoints.roster, &[]).await;
        match fetched.and_then(|payload| feeds::parse_roster(&payload, &self.craft)) {
            Ok(names) => self.passengers = names,
            Err(err) => warn!("roster refresh failed: {err}"),
        }
    }

    async fn locality_or_unknown(&mut self, lat: f64, lon: f64) -> String {
        match self
            .cache
            .resolve_locality(&self.fetcher, &self.endpoints.geocode, lat, lon)
            .await
        {
            Ok(name) => name,
            Err(err) => {
                warn!("locality lookup failed: {err}");
                UNKNOWN_LOCALITY.to_string()
            }
        }
    }
}
