//! The HTTP seam: everything the pipeline needs from a transport.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use metadata_common::{MetadataError, MetadataResult};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// A source of response bodies for GET requests.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// GET `url` and return the body text.
    ///
    /// Only transport failures are errors; the status code is not inspected.
    async fn get_text(&self, url: &str) -> MetadataResult<String>;

    /// GET `url` and parse the body as JSON.
    async fn get_json(&self, url: &str) -> MetadataResult<Value> {
        let body = self.get_text(url).await?;
        parse_json(url, &body)
    }
}

/// Parse a response body, keeping the parser's message and offending token.
pub fn parse_json(url: &str, body: &str) -> MetadataResult<Value> {
    serde_json::from_str(body).map_err(|e| MetadataError::malformed_response(url, body, e))
}

/// Configuration for the HTTP fetcher.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Overall request timeout; `None` waits as long as the transport allows
    pub request_timeout: Option<Duration>,
    /// TCP connect timeout
    pub connect_timeout: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("layer-metadata/{}", env!("CARGO_PKG_VERSION")),
            request_timeout: None,
            connect_timeout: Duration::from_secs(30),
        }
    }
}

/// `reqwest`-backed fetcher. Sends each request once.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: FetcherConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder()
            .user_agent(config.user_agent)
            .connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    #[instrument(skip(self))]
    async fn get_text(&self, url: &str) -> MetadataResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MetadataError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            // Error pages still go to the JSON parser, which reports them.
            warn!(status = %status, "Non-success status from map service");
        }

        let body = response
            .text()
            .await
            .map_err(|e| MetadataError::transport(url, e))?;

        debug!(status = %status, bytes = body.len(), "Fetched response");
        Ok(body)
    }
}

/// In-memory fetcher serving canned bodies by exact URL.
///
/// Unregistered URLs fail like an unreachable host. Every request is
/// recorded, in order.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    responses: HashMap<String, Result<String, String>>,
    requests: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`.
    pub fn with_response(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses.insert(url.into(), Ok(body.into()));
        self
    }

    /// Fail requests to `url` with a transport error.
    pub fn with_failure(mut self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.responses.insert(url.into(), Err(message.into()));
        self
    }

    /// URLs requested so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl Fetch for StaticFetcher {
    async fn get_text(&self, url: &str) -> MetadataResult<String> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(url.to_string());

        match self.responses.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(message)) => Err(MetadataError::transport(url, message)),
            None => Err(MetadataError::transport(url, "no response registered")),
        }
    }
}
