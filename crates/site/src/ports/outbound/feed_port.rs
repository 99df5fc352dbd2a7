//! Feed Port - object-safe access to the timeline feed
//!
//! Application services depend on this trait rather than on the generic
//! `FeedProvider`, so they can hold it as `Arc<dyn FeedPort>` and tests can
//! substitute a mock.

use std::{future::Future, pin::Pin};

use thiserror::Error;

/// Why the raw feed document could not be retrieved
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Request never produced a response (offline, DNS, CORS, missing file)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("HTTP error! status: {0}")]
    Status(u16),
}

/// Port for retrieving the timeline feed
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait FeedPort: Send + Sync {
    /// Fetch the raw feed document
    fn fetch_feed(
        &self,
        location: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, FetchError>> + 'static>>;
}
