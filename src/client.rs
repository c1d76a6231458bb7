//! Postmark SpamCheck client

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::transport::{HttpResponse, HttpTransport, Transport};
use crate::types::{ScoreRequest, ScoreResponse, SpamCheck, Verbosity};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

/// Anything that can score a raw email and expose the last report.
#[async_trait]
pub trait SpamScorer: Send {
    /// Score `raw_email` (full message, headers and body).
    ///
    /// The previous report is discarded before the request is sent, so after
    /// a failed call [`SpamScorer::report`] returns `None`.
    async fn score(&mut self, raw_email: &str) -> Result<f64>;

    /// Report from the most recent call to [`SpamScorer::score`], if any.
    fn report(&self) -> Option<&str>;
}

/// Client for the Postmark SpamCheck API
#[derive(Debug)]
pub struct PostmarkClient<T = HttpTransport> {
    transport: T,
    endpoint: Url,
    verbosity: Verbosity,
    last_report: Option<String>,
}

impl PostmarkClient<HttpTransport> {
    /// Client for the public endpoint; `want_long_report` selects the long
    /// report format for every request.
    pub fn new(want_long_report: bool) -> Result<Self> {
        Self::from_config(ClientConfig::default().with_long_report(want_long_report))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> PostmarkClient<T> {
    /// Client sending its requests through `transport`.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            transport,
            endpoint: config.endpoint,
            verbosity: config.verbosity,
            last_report: None,
        }
    }

    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Score `raw_email` and return the score together with its report.
    ///
    /// Leaves the stored report untouched, so it is safe to call from
    /// several tasks sharing one client.
    pub async fn check(&self, raw_email: &str) -> Result<SpamCheck> {
        let request = ScoreRequest::new(raw_email, self.verbosity);

        debug!(
            "Requesting {} spam score for {} byte message",
            self.verbosity,
            raw_email.len()
        );

        let response = self.transport.post(&self.endpoint, &request).await?;
        let check = decode(&response)?;

        debug!(
            "Spam score {} (report: {})",
            check.score,
            check.report.is_some()
        );

        Ok(check)
    }
}

#[async_trait]
impl<T: Transport> SpamScorer for PostmarkClient<T> {
    async fn score(&mut self, raw_email: &str) -> Result<f64> {
        self.last_report = None;

        let check = self.check(raw_email).await?;
        self.last_report = check.report;

        Ok(check.score)
    }

    fn report(&self) -> Option<&str> {
        self.last_report.as_deref()
    }
}

/// Interpret a response body.
///
/// An error status only yields an API error when its body is an explicit
/// `success: false` reply; anything else is reported by status code.
fn decode(response: &HttpResponse) -> Result<SpamCheck> {
    if response.is_success() {
        return ScoreResponse::from_json(&response.body)?.into_check();
    }

    match ScoreResponse::from_json(&response.body) {
        Ok(parsed) if !parsed.success => parsed.into_check(),
        _ => Err(Error::Transport(format!(
            "Request failed with status code {}",
            response.status
        ))),
    }
}
