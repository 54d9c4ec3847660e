// Shared test helpers: a canned-response fetcher and a command-recording
// surface, substituted for the network and the canvas behind the same traits
// the production implementations use.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use serde_json::{json, Value};

use iss_tracker::error_handling::TrackerError;
use iss_tracker::fetch::Fetcher;
use iss_tracker::render::Surface;
use iss_tracker::FeedEndpoints;

/// Fetcher returning canned JSON per URL.
///
/// Responses queue per URL; each fetch consumes one entry until a single
/// entry remains, which then repeats. An `Err` entry simulates an unreachable
/// source.
#[derive(Default)]
pub struct MockFetcher {
    responses: Mutex<HashMap<String, VecDeque<Result<Value, String>>>>,
    calls: Mutex<Vec<String>>,
}

#[allow(dead_code)] // Used across multiple test files
impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response for `url`.
    pub fn push(&self, url: &str, value: Value) {
        self.responses
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(Ok(value));
    }

    /// Queues a source failure for `url`.
    pub fn push_failure(&self, url: &str, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(Err(message.to_string()));
    }

    /// Number of fetches issued against `url`, regardless of outcome.
    pub fn calls_to(&self, url: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|called| called.as_str() == url)
            .count()
    }
}

impl Fetcher for MockFetcher {
    async fn fetch_json(
        &self,
        url: &str,
        _params: &[(String, String)],
    ) -> Result<Value, TrackerError> {
        self.calls.lock().unwrap().push(url.to_string());

        let mut responses = self.responses.lock().unwrap();
        let queue = responses
            .get_mut(url)
            .ok_or_else(|| TrackerError::SourceUnavailable(format!("no canned response: {url}")))?;

        let entry = if queue.len() > 1 {
            queue.pop_front().expect("queue checked non-empty")
        } else {
            queue
                .front()
                .cloned()
                .ok_or_else(|| TrackerError::SourceUnavailable(format!("queue drained: {url}")))?
        };

        entry.map_err(TrackerError::SourceUnavailable)
    }
}

/// A pen command observed by the recording surface.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum Command {
    PenUp,
    PenDown,
    MoveTo(f64, f64),
    Show,
}

/// Surface that records every command for later assertions.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<Command>,
}

#[allow(dead_code)]
impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded after the first `len` entries.
    pub fn commands_after(&self, len: usize) -> &[Command] {
        &self.commands[len..]
    }
}

impl Surface for RecordingSurface {
    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(Command::MoveTo(x, y));
    }

    fn pen_up(&mut self) {
        self.commands.push(Command::PenUp);
    }

    fn pen_down(&mut self) {
        self.commands.push(Command::PenDown);
    }

    fn show(&mut self) {
        self.commands.push(Command::Show);
    }
}

/// Feed endpoints pointing at distinct fake URLs so call counts per feed are
/// unambiguous.
#[allow(dead_code)]
pub fn test_endpoints() -> FeedEndpoints {
    FeedEndpoints {
        position: "http://feeds.test/iss-now.json".to_string(),
        roster: "http://feeds.test/astros.json".to_string(),
        passes: "http://feeds.test/iss-pass.json".to_string(),
        geocode: "http://feeds.test/geocode.json".to_string(),
        observer: "http://feeds.test/observer.json".to_string(),
    }
}

/// A well-formed current-position payload with string coordinates, as the
/// real feed sends them.
#[allow(dead_code)]
pub fn position_payload(lat: f64, lon: f64, timestamp: i64) -> Value {
    json!({
        "iss_position": {
            "latitude": lat.to_string(),
            "longitude": lon.to_string(),
        },
        "timestamp": timestamp,
    })
}

/// A roster payload with one person aboard the ISS and one elsewhere.
#[allow(dead_code)]
pub fn roster_payload() -> Value {
    json!({
        "people": [
            {"name": "A. Cosmonaut", "craft": "ISS"},
            {"name": "B. Taikonaut", "craft": "Tiangong"},
        ]
    })
}
