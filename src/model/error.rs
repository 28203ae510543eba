//! Error types for evlist.
//!
//! Two tiers:
//!
//! - [`FetchError`] - a single fetch failed. Non-fatal: the error is shown in
//!   place of the results table and the next filter change fetches again.
//! - [`AppError`] - startup or terminal failures. Fatal: propagated to `main`.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use thiserror::Error;

/// Failure of one results fetch.
///
/// Carries rendered messages rather than transport errors so that loading
/// state stays `Clone + Eq` and can be compared in tests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport failure: DNS, connect, TLS, reset or timeout.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("Server responded with HTTP {status}")]
    Http {
        /// HTTP status code.
        status: u16,
    },

    /// The body was not a valid results page.
    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is incomplete.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber setup failed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Terminal or event loop failure.
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),
}
