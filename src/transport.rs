//! HTTP transport for score requests

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::ScoreRequest;
use async_trait::async_trait;
use reqwest::header::{self, HeaderValue};
use tracing::debug;
use url::Url;

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON request and hands back the raw response.
///
/// Implementations only fail for transport-level problems (connection
/// refused, timeout, unreadable body). Non-2xx statuses are returned as
/// ordinary responses so the caller can still read an error body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, url: &Url, request: &ScoreRequest<'_>) -> Result<HttpResponse>;
}

/// [`Transport`] backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport using the timeout and user agent from `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str());

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::InvalidConfig(format!("HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Wrap an already configured `reqwest` client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, url: &Url, request: &ScoreRequest<'_>) -> Result<HttpResponse> {
        let response = self.client.post(url.clone()).json(request).send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("POST {url} -> {status} ({} bytes)", body.len());

        Ok(HttpResponse { status, body })
    }
}
