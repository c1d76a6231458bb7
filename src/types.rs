//! Wire and result types for the scoring API

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// How much report detail to request from the service
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Score only; the service usually omits the report
    #[default]
    Short,
    /// Score plus the full rule-by-rule report
    Long,
}

impl Verbosity {
    #[must_use]
    pub const fn from_long_report(want_long_report: bool) -> Self {
        if want_long_report { Self::Long } else { Self::Short }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Long => "long",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verbosity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            other => Err(Error::InvalidConfig(format!("unknown verbosity: {other}"))),
        }
    }
}

/// Request body sent to the scoring endpoint
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ScoreRequest<'a> {
    /// Full raw message, headers and body
    pub email: &'a str,

    /// Requested report detail
    pub options: Verbosity,
}

impl<'a> ScoreRequest<'a> {
    #[must_use]
    pub const fn new(email: &'a str, options: Verbosity) -> Self {
        Self { email, options }
    }
}

/// Response body as returned by the service.
///
/// The body is untrusted, so every field other than `success` is kept as raw
/// JSON and only interpreted by [`ScoreResponse::into_check`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ScoreResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub score: Option<Value>,

    #[serde(default)]
    pub report: Option<Value>,

    #[serde(default)]
    pub message: Option<Value>,
}

impl ScoreResponse {
    /// Decode a response body.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|e| Error::transport(format!("Invalid response from scoring API: {e}")))
    }

    /// Validate the response and extract the score and report.
    pub fn into_check(self) -> Result<SpamCheck> {
        if !self.success {
            return Err(Error::api(self.message.as_ref().and_then(Value::as_str)));
        }

        let score = self
            .score
            .as_ref()
            .and_then(Value::as_f64)
            .ok_or(Error::MissingScore)?;

        let report = match self.report {
            Some(Value::String(report)) => Some(report),
            _ => None,
        };

        Ok(SpamCheck { score, report })
    }
}

/// Outcome of a single successful scoring call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpamCheck {
    /// Score exactly as returned by the service
    pub score: f64,

    /// Detailed report, when requested and available
    pub report: Option<String>,
}

impl SpamCheck {
    /// Whether the score reaches `threshold` (`SpamAssassin` defaults to 5.0).
    #[must_use]
    pub fn is_spam(&self, threshold: f64) -> bool {
        self.score >= threshold
    }

    #[must_use]
    pub fn report(&self) -> Option<&str> {
        self.report.as_deref()
    }
}
