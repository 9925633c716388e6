use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::error::{ProcessError, Result};
use crate::models::ExtractionResult;

/// Sends an extracted order to a destination URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, order: &ExtractionResult, url: &str) -> Result<()>;
}

/// JSON-over-HTTP POST with a fixed request timeout. No retries.
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        debug!(timeout_secs = timeout.as_secs(), "Creating HTTP client");
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ProcessError::unexpected(format!("failed to build HTTP client: {err}")))?;

        Ok(Self { client, timeout })
    }

    fn classify(&self, err: reqwest::Error) -> ProcessError {
        if err.is_timeout() {
            ProcessError::Timeout {
                timeout: self.timeout,
            }
        } else {
            ProcessError::TransportFailure {
                reason: err.to_string(),
            }
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, order: &ExtractionResult, url: &str) -> Result<()> {
        if url.trim().is_empty() {
            return Err(ProcessError::unexpected("API URL cannot be empty"));
        }
        let url = Url::parse(url.trim())
            .map_err(|err| ProcessError::unexpected(format!("invalid API URL {url:?}: {err}")))?;

        let body = serde_json::to_string(order)
            .map_err(|err| ProcessError::unexpected(format!("failed to serialize order: {err}")))?;
        debug!(payload = %body, "Serialized JSON payload");

        debug!(url = %url, "Sending POST request");
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|err| self.classify(err))?;

        let status = response.status();
        info!(status = %status, "API response status");

        if !status.is_success() {
            return Err(ProcessError::TransportFailure {
                reason: format!("API responded with HTTP {status}"),
            });
        }

        Ok(())
    }
}
