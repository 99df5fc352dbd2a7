//! Render model for the timeline widget
//!
//! Plain data produced by [`TimelineWidget::view`](super::TimelineWidget::view).
//! The Dioxus components turn it into markup one-to-one, so two equal views
//! always produce identical DOM.

use debtline_domain::{ChartSeries, EventType, Side, TooltipAdjustment};

pub const TIMELINE_TITLE: &str = "Interactive Student Debt Timeline";
pub const CHART_TITLE: &str = "Student Debt Trends Over Time";
pub const CHART_PROMPT: &str = "Select a data series to display";
pub const SHOW_CHART_LABEL: &str = "Show Data Trends";
pub const HIDE_CHART_LABEL: &str = "Hide Data Trends";

/// Element id of the horizontally scrolling timeline strip
pub const WRAPPER_DOM_ID: &str = "timeline-wrapper";

/// Element id of an event marker
pub fn event_dom_id(event_id: &str) -> String {
    format!("timeline-event-{event_id}")
}

/// Element id of an event's detail popup
pub fn popup_dom_id(event_id: &str) -> String {
    format!("timeline-event-content-{event_id}")
}

/// Content shown in place of the widget when the feed cannot be loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorBlock {
    pub heading: &'static str,
    pub message: &'static str,
}

pub const LOAD_ERROR: ErrorBlock = ErrorBlock {
    heading: "Could not load timeline",
    message: "There was a problem loading the timeline data. Please try again later.",
};

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineView {
    pub title: &'static str,
    pub filters: Vec<FilterToggle>,
    pub markers: Vec<MarkerView>,
    pub events: Vec<EventView>,
    pub chart: ChartPanelView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterToggle {
    pub event_type: EventType,
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerView {
    pub label: String,
    pub left_percent: f64,
}

/// One visible event and its interaction state
#[derive(Debug, Clone, PartialEq)]
pub struct EventView {
    pub id: String,
    pub year: i32,
    pub event_type: EventType,
    pub heading: String,
    pub summary: String,
    pub essay_link: Option<String>,
    pub left_percent: f64,
    pub side: Side,
    pub stagger_height_px: Option<u32>,
    pub hovered: bool,
    pub active: bool,
    pub tooltip: TooltipAdjustment,
}

impl EventView {
    /// Side the card is drawn on once tooltip corrections are applied
    pub fn effective_side(&self) -> Side {
        if self.tooltip.flip_below {
            Side::Below
        } else {
            self.side
        }
    }

    pub fn class_list(&self) -> String {
        let mut classes = format!(
            "timeline-event event-{} {}",
            self.event_type.as_str(),
            self.effective_side().css_class()
        );
        if self.hovered {
            classes.push_str(" hover");
        }
        if self.active {
            classes.push_str(" active");
        }
        classes
    }

    /// Inline style of the marker: position plus any stagger height
    pub fn style(&self) -> String {
        match self.stagger_height_px {
            Some(height) => format!("left: {}%; height: {height}px;", self.left_percent),
            None => format!("left: {}%;", self.left_percent),
        }
    }

    /// Inline style overrides of the detail popup
    pub fn popup_style(&self) -> String {
        self.tooltip.inline_style()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPanelView {
    pub visible: bool,
    pub toggle_label: &'static str,
    pub title: &'static str,
    pub series: Vec<SeriesButton>,
    pub body: ChartBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesButton {
    pub series: ChartSeries,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartBody {
    /// No series chosen yet
    Prompt(&'static str),
    /// Stand-in text for the chosen series
    Placeholder([String; 2]),
}

#[cfg(test)]
mod tests {
    use super::*;
    use debtline_domain::HorizontalPin;

    fn event_view() -> EventView {
        EventView {
            id: "hea-1965".into(),
            year: 1965,
            event_type: EventType::Legislation,
            heading: "1965: Higher Education Act".into(),
            summary: "s".into(),
            essay_link: None,
            left_percent: 25.0,
            side: Side::Above,
            stagger_height_px: None,
            hovered: false,
            active: false,
            tooltip: TooltipAdjustment::default(),
        }
    }

    #[test]
    fn class_list_reflects_state() {
        let mut view = event_view();
        assert_eq!(view.class_list(), "timeline-event event-legislation event-top");

        view.hovered = true;
        view.active = true;
        assert_eq!(
            view.class_list(),
            "timeline-event event-legislation event-top hover active"
        );
    }

    #[test]
    fn flipped_popup_moves_card_below() {
        let mut view = event_view();
        view.tooltip = TooltipAdjustment {
            flip_below: true,
            pin: Some(HorizontalPin::Left),
        };

        assert_eq!(view.effective_side(), Side::Below);
        assert!(view.class_list().ends_with("event-bottom"));
        assert_eq!(
            view.popup_style(),
            "bottom: auto; top: 25px; transform: translateY(0); left: 0;"
        );
    }

    #[test]
    fn style_includes_stagger_height() {
        let mut view = event_view();
        assert_eq!(view.style(), "left: 25%;");

        view.stagger_height_px = Some(40);
        assert_eq!(view.style(), "left: 25%; height: 40px;");
    }

    #[test]
    fn dom_ids_are_derived_from_event_ids() {
        assert_eq!(event_dom_id("gi-bill"), "timeline-event-gi-bill");
        assert_eq!(popup_dom_id("gi-bill"), "timeline-event-content-gi-bill");
    }
}
