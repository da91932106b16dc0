//! Error types for the multiselect component.
//!
//! Every failure in this crate is locally recoverable: a failed fetch leaves
//! the component in its pre-request state and is reported to the embedding
//! page as an [`Event`](crate::event::Event) rather than propagated.

use thiserror::Error;

/// Errors produced by backends and configuration loading.
///
/// # Recovery Strategies
///
/// | Error Variant | Recovery Strategy |
/// |--------------|-------------------|
/// | [`Network`](Error::Network) | Next keystroke or click re-attempts |
/// | [`Parse`](Error::Parse) | Fix the endpoint; the stale catalog stays usable |
/// | [`Config`](Error::Config) | Fix the configuration before activation |
///
/// # Note on Clone and PartialEq
///
/// Errors travel inside messages and events, so the variants store `String`
/// messages rather than the underlying transport or serde errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The request was rejected or answered with a non-2xx status.
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not valid item JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// The configuration is inconsistent.
    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// Creates a network error with the given message.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error with the given message.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns true if this is a transport failure.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Returns true if the body could not be decoded.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// A specialized [`Result`] type for pillbox operations.
pub type Result<T> = std::result::Result<T, Error>;
