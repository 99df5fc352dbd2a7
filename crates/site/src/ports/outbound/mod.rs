//! Outbound ports - what the application needs from its platform

pub mod feed_port;
pub mod platform;

pub use feed_port::{FeedPort, FetchError};
pub use platform::{
    storage_keys, DocumentProvider, FeedProvider, SleepProvider, StorageProvider, TimeProvider,
};

#[cfg(any(test, feature = "testing"))]
pub use feed_port::MockFeedPort;
