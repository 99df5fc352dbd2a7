//! Service providers for the presentation layer
//!
//! Components reach application services through Dioxus context instead of
//! constructing infrastructure adapters themselves.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::TimelineFeedService;
use crate::ports::outbound::FeedPort;
use crate::runner::config::SiteConfig;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub timeline_feed: Arc<TimelineFeedService>,
}

impl Services {
    pub fn new(feed: Arc<dyn FeedPort>) -> Self {
        Self {
            timeline_feed: Arc::new(TimelineFeedService::new(feed)),
        }
    }
}

/// Hook to access the TimelineFeedService from context
pub fn use_timeline_feed_service() -> Arc<TimelineFeedService> {
    let services = use_context::<Services>();
    services.timeline_feed.clone()
}

/// Hook to access the site configuration from context
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}
