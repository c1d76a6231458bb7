//! Error types for spam scoring

use std::fmt;
use thiserror::Error;

/// Message used when a transport failure carries no text of its own
pub const FALLBACK_TRANSPORT_MESSAGE: &str = "Failed to fetch spam score";

/// Message used when the API reports failure without saying why
pub const FALLBACK_API_MESSAGE: &str = "Unknown error from scoring API";

/// Errors that can occur while scoring an email
#[derive(Error, Debug)]
pub enum Error {
    /// Network failure or a response body that could not be decoded
    #[error("{0}")]
    Transport(String),

    /// The API answered with `success: false`
    #[error("{0}")]
    Api(String),

    /// The API answered with `success: true` but no numeric score
    #[error("API did not return a score")]
    MissingScore,

    /// Client configuration was rejected before any request was made
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Coarse classification of [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network failure or undecodable response
    Transport,
    /// Explicit failure reported by the API
    Api,
    /// Successful reply without a numeric score
    MissingScore,
    /// Rejected client configuration
    Config,
}

impl Error {
    /// Build a transport error from any underlying failure.
    #[must_use]
    pub fn transport(source: impl fmt::Display) -> Self {
        let message = source.to_string();
        if message.trim().is_empty() {
            Self::Transport(FALLBACK_TRANSPORT_MESSAGE.into())
        } else {
            Self::Transport(message)
        }
    }

    /// Build an API error from the server-supplied message, if any.
    #[must_use]
    pub fn api(message: Option<&str>) -> Self {
        match message {
            Some(m) if !m.is_empty() => Self::Api(m.to_string()),
            _ => Self::Api(FALLBACK_API_MESSAGE.into()),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::Api(_) => ErrorKind::Api,
            Self::MissingScore => ErrorKind::MissingScore,
            Self::InvalidConfig(_) => ErrorKind::Config,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(message_with_sources(&err))
    }
}

/// Render `err` followed by each distinct message in its source chain.
fn message_with_sources(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }

    message
}

/// Result type for spam scoring operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Error, Debug)]
    #[error("error sending request")]
    struct Outer(#[source] Middle);

    #[derive(Error, Debug)]
    #[error("tcp connect error")]
    struct Middle(#[source] io::Error);

    #[test]
    fn test_message_includes_source_chain() {
        let err = Outer(Middle(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "Connection refused",
        )));
        assert_eq!(
            message_with_sources(&err),
            "error sending request: tcp connect error: Connection refused"
        );
    }

    #[test]
    fn test_message_skips_repeated_source_text() {
        let err = Middle(io::Error::new(io::ErrorKind::TimedOut, "tcp connect error"));
        assert_eq!(message_with_sources(&err), "tcp connect error");
    }
}
