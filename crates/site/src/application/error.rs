//! Application-level error types

use debtline_domain::DomainError;
use thiserror::Error;

use crate::ports::outbound::FetchError;

/// Why the timeline could not be loaded.
///
/// Variants are kept apart for logging; the page shows one message for all
/// of them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeedError {
    /// The feed document could not be retrieved
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The document is not a valid feed
    #[error("Failed to parse timeline feed: {0}")]
    Parse(String),

    /// The feed parsed but breaks a timeline invariant
    #[error("Invalid timeline feed: {0}")]
    Invalid(#[from] DomainError),
}

impl From<serde_json::Error> for FeedError {
    fn from(e: serde_json::Error) -> Self {
        FeedError::Parse(e.to_string())
    }
}
