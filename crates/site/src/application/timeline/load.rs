//! Feed-to-widget loading

use crate::application::services::TimelineFeedService;
use crate::application::FeedError;

use super::{TimelineLoad, TimelineWidget};

/// Fetch the feed at `location` and build the widget from it.
///
/// Every failure (fetch, status, JSON, an empty or invalid feed) collapses to
/// [`TimelineLoad::Failed`]. The widget is returned unrendered so the caller
/// can carry out the effects of its first render.
pub async fn load_timeline(service: &TimelineFeedService, location: &str) -> TimelineLoad {
    let loaded = service
        .load(location)
        .await
        .and_then(|feed| TimelineWidget::new(feed).map_err(FeedError::from));

    match loaded {
        Ok(widget) => TimelineLoad::Ready(widget),
        Err(e) => {
            tracing::error!(error = %e, location, "Error loading timeline data");
            TimelineLoad::Failed
        }
    }
}
