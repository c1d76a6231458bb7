// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Postmark SpamCheck client
//!
//! Sends a raw email to the Postmark SpamCheck service and returns the
//! `SpamAssassin` score, optionally with the detailed report.
//!
//! # Example
//!
//! ```no_run
//! use postmark_spamcheck::{PostmarkClient, SpamScorer};
//!
//! # async fn run() -> postmark_spamcheck::Result<()> {
//! let raw_email = "From: sender@example.com\r\nSubject: Hello\r\n\r\nBody";
//!
//! let mut client = PostmarkClient::new(true)?;
//! let score = client.score(raw_email).await?;
//!
//! println!("Score: {score}");
//! if let Some(report) = client.report() {
//!     println!("{report}");
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod transport;
mod types;

pub use client::{PostmarkClient, SpamScorer};
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::{Error, ErrorKind, FALLBACK_API_MESSAGE, FALLBACK_TRANSPORT_MESSAGE, Result};
pub use transport::{HttpResponse, HttpTransport, Transport};
pub use types::{ScoreRequest, ScoreResponse, SpamCheck, Verbosity};
