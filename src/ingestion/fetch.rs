//! Source retrieval.
//!
//! The pipeline only depends on the [`Fetcher`] trait, so tests and offline runs can serve bytes
//! from memory while production uses [`HttpFetcher`].

use std::time::Duration;

use tracing::info;

use crate::error::{PipelineError, PipelineResult};

/// Retrieves the raw bytes behind a URL.
///
/// Implementations make a single attempt; the pipeline never retries.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> PipelineResult<Vec<u8>>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str) -> PipelineResult<Vec<u8>> {
        (**self).fetch(url)
    }
}

impl<F: Fetcher + ?Sized> Fetcher for Box<F> {
    fn fetch(&self, url: &str) -> PipelineResult<Vec<u8>> {
        (**self).fetch(url)
    }
}

/// Blocking HTTP GET with a fixed per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Build a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> PipelineResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PipelineError::network("<client>", e))?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> PipelineResult<Vec<u8>> {
        info!("Fetching: {url}");
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| PipelineError::network(url, e))?;
        let bytes = response
            .bytes()
            .map_err(|e| PipelineError::network(url, e))?;
        Ok(bytes.to_vec())
    }
}
