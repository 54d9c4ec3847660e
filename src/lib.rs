//! iss_tracker library: satellite position tracking over public JSON feeds.
//!
//! Polls a current-position feed on a fixed interval, keeps a map marker
//! synchronized with the reported position (lifting the pen across wrap
//! discontinuities at the map edge), and answers click-style queries about
//! the tracked object and upcoming overhead passes, with locality and pass
//! lookups memoized per coordinate.
//!
//! # Example
//!
//! ```no_run
//! use iss_tracker::{run_tracker, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! run_tracker(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or call library functions within an async context.

#![warn(missing_docs)]

pub mod cache;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod geo;
pub mod initialization;
pub mod render;
pub mod report;
pub mod tracker;

// Re-export public API
pub use config::{Config, FeedEndpoints, LogFormat, LogLevel};
pub use error_handling::TrackerError;
pub use run::run_tracker;
pub use tracker::Tracker;

// Internal run module (contains the tracking loop)
mod run {
    use std::time::Duration;

    use anyhow::{Context, Result};
    use log::{error, info, warn};
    use tokio::io::{AsyncBufReadExt, BufReader};
    use tokio::sync::mpsc;
    use tokio::time::MissedTickBehavior;

    use crate::config::{Config, FeedEndpoints};
    use crate::fetch::feeds;
    use crate::fetch::{Fetcher, HttpFetcher};
    use crate::geo::GeoPosition;
    use crate::render::{ClickEvent, TraceSurface};
    use crate::report;
    use crate::tracker::Tracker;

    /// Runs the tracking loop until the process exits.
    ///
    /// Resolves the observer location (CLI override or one-shot IP
    /// geolocation), performs the fatal-on-failure initial placement, then
    /// services refresh ticks and click events on one cooperative task. Tick
    /// failures are logged and the previous position is retained; the loop
    /// has no terminal state.
    ///
    /// # Errors
    ///
    /// Only startup can fail: HTTP client construction, observer-location
    /// resolution, or the initial position fetch.
    pub async fn run_tracker(config: Config) -> Result<()> {
        let endpoints = FeedEndpoints::from(&config);
        let fetcher = HttpFetcher::new(Duration::from_secs(config.timeout_seconds))
            .context("Failed to build HTTP client")?;

        let observer = resolve_observer(&config, &fetcher, &endpoints).await?;

        info!("{}", report::heading("ISS Locator"));
        info!("Tracking the current location of the ISS");
        info!("commands: 'info' reports the station, 'pass' lists upcoming passes overhead");
        info!(
            "observer pinned at ({:.4}, {:.4})",
            observer.lat, observer.lon
        );

        let mut tracker = Tracker::new(fetcher, TraceSurface::new(), endpoints, config.craft);
        tracker
            .initialize()
            .await
            .context("Initial position fetch failed")?;

        let (clicks_tx, mut clicks) = mpsc::channel::<ClickEvent>(8);
        spawn_stdin_dispatch(clicks_tx);

        let mut ticker = tokio::time::interval(Duration::from_millis(config.interval_ms));
        // A slow round-trip delays the next tick instead of stacking ticks;
        // refreshes of one tracker never overlap.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The interval fires immediately; initialize() already placed the
        // marker, so consume the first tick.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(err) = tracker.refresh().await {
                        warn!("refresh failed, keeping previous position: {err}");
                    }
                }
                Some(event) = clicks.recv() => {
                    let outcome = match event {
                        ClickEvent::Marker => tracker.on_click_info().await,
                        ClickEvent::Pin => {
                            tracker.on_click_next_pass(observer.lat, observer.lon).await
                        }
                    };
                    if let Err(err) = outcome {
                        error!("report failed: {err}");
                    }
                }
            }
        }
    }

    /// Observer pin location: explicit CLI coordinates win, otherwise a
    /// one-shot lookup against the IP-geolocation feed.
    async fn resolve_observer(
        config: &Config,
        fetcher: &HttpFetcher,
        endpoints: &FeedEndpoints,
    ) -> Result<GeoPosition> {
        match (config.observer_lat, config.observer_lon) {
            (Some(lat), Some(lon)) => {
                GeoPosition::new(lat, lon).context("Invalid observer coordinates")
            }
            _ => {
                let payload = fetcher
                    .fetch_json(&endpoints.observer, &[])
                    .await
                    .context("Observer location fetch failed")?;
                feeds::parse_observer_location(&payload)
                    .context("Observer location feed returned an unusable payload")
            }
        }
    }

    /// Maps stdin lines onto click events, standing in for pointer dispatch.
    fn spawn_stdin_dispatch(clicks: mpsc::Sender<ClickEvent>) {
        tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                let event = match line.trim() {
                    "info" => ClickEvent::Marker,
                    "pass" => ClickEvent::Pin,
                    "" => continue,
                    other => {
                        warn!("unknown command {other:?} (try 'info' or 'pass')");
                        continue;
                    }
                };
                if clicks.send(event).await.is_err() {
                    break;
                }
            }
        });
    }
}
