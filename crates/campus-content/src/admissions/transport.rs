use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::domain::ApplicationPayload;

/// Fixed server path the form posts to.
pub const APPLICATION_ENDPOINT_PATH: &str = "/api/v1/admissions/applications";

/// Shown when a failed response carries no usable message.
pub const GENERIC_SUBMIT_ERROR: &str =
    "We couldn't submit your application. Please try again.";

/// Default request timeout for the HTTP transport. The observed design left
/// submissions unbounded; a bounded wait with user-driven retry is the
/// conservative choice here.
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(15);

/// One submission attempt's failure, already reduced to the message the form
/// will surface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The server answered with a non-success status; the message is the
    /// response's `error` field, or the generic fallback.
    #[error("{0}")]
    Rejected(String),
    /// The request never produced a response (connect failure or timeout).
    #[error("{}", GENERIC_SUBMIT_ERROR)]
    Unreachable,
}

/// Delivery seam between the form state machine and the server boundary.
/// Exactly one `deliver` call happens per accepted submit.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn deliver(&self, payload: &ApplicationPayload) -> Result<(), SubmitError>;
}

/// Posts the payload as JSON to the application endpoint of a base URL.
pub struct HttpSubmissionTransport {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpSubmissionTransport {
    pub fn new(base_url: &str) -> Self {
        let endpoint = format!(
            "{}{}",
            base_url.trim_end_matches('/'),
            APPLICATION_ENDPOINT_PATH
        );
        Self {
            client: reqwest::Client::new(),
            endpoint,
            timeout: DEFAULT_SUBMIT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[async_trait]
impl SubmissionTransport for HttpSubmissionTransport {
    async fn deliver(&self, payload: &ApplicationPayload) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(payload)
            .send()
            .await
            .map_err(|_| SubmitError::Unreachable)?;

        if response.status().is_success() {
            return Ok(());
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .map(|body| body.error)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| GENERIC_SUBMIT_ERROR.to_string());

        Err(SubmitError::Rejected(message))
    }
}
