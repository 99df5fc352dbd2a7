//! Timeline domain: events, filters, year scale, layout, and popup geometry

mod chart;
mod event;
mod filters;
mod geometry;
mod layout;
mod scale;

pub use chart::ChartSeries;
pub use event::{EventType, TimelineEvent, TimelineFeed, MAX_YEAR_SPAN};
pub use filters::ActiveFilters;
pub use geometry::{center_scroll_delta, HorizontalPin, Rect, TooltipAdjustment, Viewport};
pub use layout::{layout_events, EventPlacement, Side, OVERLAP_THRESHOLD_PERCENT};
pub use scale::{DecadeMarker, YearScale, MAX_DECADE_MARKERS};
