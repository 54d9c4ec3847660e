//! JSON-over-HTTP fetch layer.
//!
//! [`Fetcher`] is the seam between the tracker and the network: the tracker
//! and caches only ever ask for "the JSON document at this URL with these
//! query parameters". [`HttpFetcher`] is the production implementation; tests
//! substitute canned payloads behind the same trait.

pub mod feeds;

use std::future::Future;
use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde_json::Value;
use tokio_retry::strategy::FixedInterval;
use tokio_retry::RetryIf;
use url::Url;

use crate::error_handling::TrackerError;

/// Retry attempts after the first failure for transient errors.
const RETRY_MAX_ATTEMPTS: usize = 2;

/// Delay between retry attempts.
const RETRY_DELAY_MS: u64 = 250;

/// Fetches a JSON document from a URL with optional query parameters.
pub trait Fetcher {
    /// Performs a GET request against `url` with `params` appended as query
    /// parameters and returns the response body as parsed JSON.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::SourceUnavailable` on network error, on a
    /// non-success HTTP status, or when the body is not valid JSON.
    fn fetch_json(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> impl Future<Output = Result<Value, TrackerError>>;
}

/// reqwest-backed fetcher with a per-request timeout and a bounded retry of
/// transient failures.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds the fetcher with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::SourceUnavailable` if the underlying HTTP
    /// client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, TrackerError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self { client })
    }

    fn build_url(url: &str, params: &[(String, String)]) -> Result<Url, TrackerError> {
        let mut parsed = Url::parse(url)
            .map_err(|e| TrackerError::InvalidInput(format!("bad URL {url:?}: {e}")))?;
        if !params.is_empty() {
            parsed
                .query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(parsed)
    }

    async fn get_once(&self, url: &Url) -> Result<Value, TrackerError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TrackerError::SourceUnavailable(format!(
                "{url} returned {status}"
            )));
        }
        Ok(response.json::<Value>().await?)
    }

    /// Only source-level failures are worth retrying; malformed input on our
    /// side stays an error no matter how often we ask.
    fn is_transient(err: &TrackerError) -> bool {
        matches!(err, TrackerError::SourceUnavailable(_))
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch_json(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> Result<Value, TrackerError> {
        let url = Self::build_url(url, params)?;
        debug!("GET {url}");
        let strategy = FixedInterval::from_millis(RETRY_DELAY_MS).take(RETRY_MAX_ATTEMPTS);
        RetryIf::spawn(strategy, || self.get_once(&url), Self::is_transient).await
    }
}
