//! Page fetching
//!
//! One GET per run. No retries, no custom headers, and no timeout unless the
//! caller asks for one.

use crate::error::{FetchError, Result};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Configuration for the page request
#[derive(Debug, Clone, Default)]
pub struct FetchConfig {
    /// Whole-request timeout (default: none, wait indefinitely)
    pub timeout: Option<Duration>,
}

impl FetchConfig {
    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Downloads a page and hands back its body as text
pub struct PageFetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl PageFetcher {
    /// Build a fetcher from the given configuration
    pub fn new(config: FetchConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::ClientBuild(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Fetch `url` and return the decoded response body.
    ///
    /// Non-success status codes are logged but the body is still returned.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;

        info!("Fetching page");
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| self.request_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Server answered {}, using the body anyway", status);
        }

        let body = response
            .text()
            .await
            .map_err(|e| match self.request_error(url, e) {
                FetchError::RequestFailed { url, message } => {
                    FetchError::BodyReadFailed { url, message }
                }
                other => other,
            })?;

        debug!("Read {} bytes (status {})", body.len(), status);
        Ok(body)
    }

    fn request_error(&self, url: &str, err: reqwest::Error) -> FetchError {
        match self.config.timeout {
            Some(timeout) if err.is_timeout() => FetchError::Timeout {
                url: url.to_string(),
                timeout_ms: timeout_millis(timeout),
            },
            _ => FetchError::RequestFailed {
                url: url.to_string(),
                message: err.to_string(),
            },
        }
    }
}

fn timeout_millis(timeout: Duration) -> u64 {
    u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX)
}
