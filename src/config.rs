//! Client configuration

use crate::error::{Error, Result};
use crate::types::Verbosity;
use std::time::Duration;
use url::Url;

/// Public Postmark SpamCheck endpoint
pub const DEFAULT_ENDPOINT: &str = "https://spamcheck.postmarkapp.com/filter";

/// Settings fixed for the lifetime of a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Where score requests are posted
    pub endpoint: Url,

    /// Report detail requested on every call
    pub verbosity: Verbosity,

    /// Overall request timeout; `None` keeps the HTTP client default
    pub timeout: Option<Duration>,

    /// `User-Agent` header sent with each request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            verbosity: Verbosity::default(),
            timeout: None,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl ClientConfig {
    /// Point the client at a different scoring endpoint.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        let url = Url::parse(endpoint)
            .map_err(|e| Error::InvalidConfig(format!("endpoint {endpoint}: {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidConfig(format!(
                "endpoint {endpoint}: unsupported scheme {}",
                url.scheme()
            )));
        }

        self.endpoint = url;
        Ok(self)
    }

    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    #[must_use]
    pub const fn with_long_report(self, want_long_report: bool) -> Self {
        self.with_verbosity(Verbosity::from_long_report(want_long_report))
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL")
}
