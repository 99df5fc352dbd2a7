//! Debtline domain crate.
//!
//! Pure types and rules for the essay site: timeline events and their layout
//! geometry, plus the small amount of arithmetic behind the page chrome
//! (theme, reading time, progress, section tracking). Nothing in here touches
//! a DOM, a clock, or storage.

pub mod error;
pub mod page;
pub mod timeline;

pub use error::DomainError;

// Re-export timeline types
pub use timeline::{
    center_scroll_delta, layout_events, ActiveFilters, ChartSeries, DecadeMarker, EventPlacement,
    EventType, HorizontalPin, Rect, Side, TimelineEvent, TimelineFeed, TooltipAdjustment,
    Viewport, YearScale,
};

// Re-export page types
pub use page::{
    active_section, progress_percent, reading_time_label, reading_time_minutes, scroll_target,
    SectionNavigator, SectionOffset, StepDirection, Theme,
};
