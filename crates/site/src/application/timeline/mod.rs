//! Interactive timeline: widget state, render model, and deferred effects

mod effects;
mod load;
mod timer;
mod view;
mod widget;

pub use effects::{center_event, DeferredTask, EffectRunner, WidgetCell};
pub use load::load_timeline;
pub use timer::{DeferredTimer, TimerKind, TimerTicket};
pub use view::{
    event_dom_id, popup_dom_id, ChartBody, ChartPanelView, ErrorBlock, EventView, FilterToggle,
    MarkerView, SeriesButton, TimelineView, LOAD_ERROR, WRAPPER_DOM_ID,
};
pub use widget::{TimelineWidget, WidgetEffect, SECTION_SCROLL_DELAY_MS, TOOLTIP_PASS_DELAY_MS};

/// Lifecycle of the widget inside its container
#[derive(Debug, Default)]
pub enum TimelineLoad {
    #[default]
    Loading,
    Ready(TimelineWidget),
    /// The container shows the error block
    Failed,
}

impl TimelineLoad {
    /// The container holds the error block and nothing else
    pub fn is_failed(&self) -> bool {
        matches!(self, TimelineLoad::Failed)
    }
}
