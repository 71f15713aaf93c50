//! Error types for the readscout crate.
//!
//! Branch-level failures (a single connector or enrichment fetch going
//! wrong) are contained by the orchestrator and never abort a search;
//! the variants here exist so those branches can report what happened
//! before being converted to an empty contribution.

/// Errors that can occur while gathering recommendations.
#[derive(Debug, thiserror::Error)]
pub enum ScoutError {
    /// A connector could not construct its endpoint URL.
    #[error("invalid endpoint URL")]
    BadUrl,

    /// An endpoint answered with a non-success HTTP status.
    #[error("unexpected response status: {0}")]
    InvalidResponse(String),

    /// An HTTP request failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid service configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The request topic was empty or whitespace-only. The one failure
    /// surfaced to callers before any I/O happens.
    #[error("topic must not be empty")]
    EmptyTopic,
}

/// Convenience type alias for readscout results.
pub type Result<T> = std::result::Result<T, ScoutError>;
