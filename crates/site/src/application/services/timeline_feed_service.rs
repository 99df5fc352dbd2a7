//! Timeline Feed Service - loads and validates the timeline feed
//!
//! Depends only on the `FeedPort`, so it runs unchanged against the browser
//! fetch API, the desktop file/HTTP reader, or a mock.

use std::sync::Arc;

use debtline_domain::TimelineFeed;

use crate::application::FeedError;
use crate::ports::outbound::FeedPort;

/// Service for retrieving the timeline feed
#[derive(Clone)]
pub struct TimelineFeedService {
    feed: Arc<dyn FeedPort>,
}

impl TimelineFeedService {
    /// Create a new TimelineFeedService with the given feed port
    pub fn new(feed: Arc<dyn FeedPort>) -> Self {
        Self { feed }
    }

    /// Fetch and parse the feed at `location`.
    ///
    /// The returned feed is only parsed, not yet sorted; the widget sorts on
    /// construction.
    pub async fn load(&self, location: &str) -> Result<TimelineFeed, FeedError> {
        let body = self.feed.fetch_feed(location).await.map_err(|e| {
            tracing::error!(location, error = %e, "Error loading timeline data");
            FeedError::from(e)
        })?;

        let feed: TimelineFeed = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(location, error = %e, "Timeline feed is not valid JSON");
            FeedError::from(e)
        })?;

        tracing::debug!(location, events = feed.events.len(), "Timeline feed loaded");
        Ok(feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{FetchError, MockFeedPort};

    fn service_returning(result: Result<String, FetchError>) -> TimelineFeedService {
        let mut port = MockFeedPort::new();
        port.expect_fetch_feed()
            .withf(|location| location == "js/timeline-data.json")
            .times(1)
            .returning(move |_| Box::pin(std::future::ready(result.clone())));
        TimelineFeedService::new(Arc::new(port))
    }

    #[tokio::test]
    async fn parses_a_valid_feed() {
        let svc = service_returning(Ok(r#"{"events":[
            {"id":"a","year":1972,"type":"institutional","title":"t","summary":"s"},
            {"id":"b","year":1958,"type":"legislation","title":"t","summary":"s"}
        ]}"#
            .to_string()));

        let feed = svc.load("js/timeline-data.json").await.unwrap();
        assert_eq!(feed.events.len(), 2);
    }

    #[tokio::test]
    async fn network_failure_is_reported() {
        let svc = service_returning(Err(FetchError::Network("offline".into())));
        let result = svc.load("js/timeline-data.json").await;
        assert_eq!(
            result,
            Err(FeedError::Fetch(FetchError::Network("offline".into())))
        );
    }

    #[tokio::test]
    async fn http_status_failure_is_reported() {
        let svc = service_returning(Err(FetchError::Status(500)));
        let result = svc.load("js/timeline-data.json").await;
        assert_eq!(result, Err(FeedError::Fetch(FetchError::Status(500))));
    }

    #[tokio::test]
    async fn malformed_json_is_a_parse_error() {
        let svc = service_returning(Ok("<html>not found</html>".to_string()));
        let result = svc.load("js/timeline-data.json").await;
        assert!(matches!(result, Err(FeedError::Parse(_))));
    }

    #[tokio::test]
    async fn missing_events_field_is_a_parse_error() {
        let svc = service_returning(Ok(r#"{"items":[]}"#.to_string()));
        let result = svc.load("js/timeline-data.json").await;
        assert!(matches!(result, Err(FeedError::Parse(_))));
    }
}
