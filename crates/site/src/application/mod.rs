//! Application layer - use cases and orchestration

pub mod error;
pub mod services;
pub mod timeline;

// Re-export common types
pub use error::FeedError;
