//! Application services

mod theme_service;
mod timeline_feed_service;

pub use theme_service::{ThemeService, ThemeSettings};
pub use timeline_feed_service::TimelineFeedService;
