//! Timeline widget state machine
//!
//! Owns the loaded events and every piece of interaction state. UI adapters
//! call the command methods and render [`TimelineWidget::view`]; anything that
//! needs the DOM or a clock comes back as a [`WidgetEffect`] for the adapter
//! to carry out.

use std::collections::HashMap;

use debtline_domain::{
    layout_events, ActiveFilters, ChartSeries, DomainError, EventType, Rect, TimelineEvent,
    TimelineFeed, TooltipAdjustment, Viewport, YearScale,
};
use futures_util::future::AbortHandle;

use super::timer::{DeferredTimer, TimerKind, TimerTicket};
use super::view::{
    ChartBody, ChartPanelView, EventView, FilterToggle, MarkerView, SeriesButton, TimelineView,
    CHART_PROMPT, CHART_TITLE, HIDE_CHART_LABEL, SHOW_CHART_LABEL, TIMELINE_TITLE,
};

/// Delay between a render and the tooltip visibility pass
pub const TOOLTIP_PASS_DELAY_MS: u64 = 100;

/// Delay between selecting an event and scrolling to its essay section
pub const SECTION_SCROLL_DELAY_MS: u64 = 300;

/// Work the widget asks its host to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEffect {
    /// After `delay_ms`, measure every popup and call
    /// [`TimelineWidget::apply_tooltip_pass`] with `ticket`
    AdjustTooltips { ticket: TimerTicket, delay_ms: u64 },
    /// Smoothly scroll the strip so this event sits in the middle
    CenterEvent { event_id: String },
    /// After `delay_ms`, call [`TimelineWidget::take_section_scroll`] with
    /// `ticket` and scroll the page to the section it returns
    ScrollToSection {
        ticket: TimerTicket,
        section_id: String,
        delay_ms: u64,
    },
}

#[derive(Debug)]
pub struct TimelineWidget {
    events: Vec<TimelineEvent>,
    scale: YearScale,
    filters: ActiveFilters,

    // Transient state, reset by every render
    hovered: Option<String>,
    active: Option<String>,
    chart_visible: bool,
    chart_series: Option<ChartSeries>,
    tooltips: HashMap<String, TooltipAdjustment>,
    pending_section: Option<String>,

    tooltip_timer: DeferredTimer,
    section_timer: DeferredTimer,
    revision: u64,
}

impl TimelineWidget {
    /// Build a widget from a parsed feed.
    ///
    /// Events are sorted by year here. Call [`render`](Self::render) before
    /// showing the first view.
    ///
    /// # Errors
    /// Fails for an empty feed or duplicate event ids.
    pub fn new(feed: TimelineFeed) -> Result<Self, DomainError> {
        let events = feed.into_sorted_events()?;
        let scale = YearScale::from_sorted(&events).ok_or(DomainError::EmptyTimeline)?;

        Ok(Self {
            events,
            scale,
            filters: ActiveFilters::default(),
            hovered: None,
            active: None,
            chart_visible: false,
            chart_series: None,
            tooltips: HashMap::new(),
            pending_section: None,
            tooltip_timer: DeferredTimer::new(TimerKind::TooltipPass),
            section_timer: DeferredTimer::new(TimerKind::SectionScroll),
            revision: 0,
        })
    }

    /// All loaded events in chronological order
    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    pub fn filters(&self) -> &ActiveFilters {
        &self.filters
    }

    pub fn scale(&self) -> YearScale {
        self.scale
    }

    /// Incremented by every render; adapters key the rendered subtree on it so
    /// a render replaces the old markup instead of patching it.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Full render: drop transient state, cancel pending timers and schedule
    /// a tooltip pass for the new markup.
    pub fn render(&mut self) -> Vec<WidgetEffect> {
        self.hovered = None;
        self.active = None;
        self.chart_visible = false;
        self.chart_series = None;
        self.tooltips.clear();
        self.pending_section = None;
        self.section_timer.cancel();

        self.revision += 1;
        let ticket = self.tooltip_timer.arm();

        tracing::debug!(
            revision = self.revision,
            visible = self.visible_events().count(),
            total = self.events.len(),
            "Timeline rendered"
        );

        vec![WidgetEffect::AdjustTooltips {
            ticket,
            delay_ms: TOOLTIP_PASS_DELAY_MS,
        }]
    }

    /// Current render model
    pub fn view(&self) -> TimelineView {
        let filters = self
            .filters
            .entries()
            .into_iter()
            .map(|(event_type, checked)| FilterToggle {
                event_type,
                label: event_type.label(),
                checked,
            })
            .collect();

        let markers = self
            .scale
            .decade_markers()
            .into_iter()
            .map(|m| MarkerView {
                label: m.label(),
                left_percent: m.left_percent,
            })
            .collect();

        let events = layout_events(&self.events, &self.filters, &self.scale)
            .into_iter()
            .map(|placement| {
                let event = placement.event;
                EventView {
                    id: event.id.clone(),
                    year: event.year,
                    event_type: event.event_type,
                    heading: event.heading(),
                    summary: event.summary.clone(),
                    essay_link: event.essay_link.clone(),
                    left_percent: placement.left_percent,
                    side: placement.side,
                    stagger_height_px: placement.stagger_height_px,
                    hovered: self.hovered.as_deref() == Some(event.id.as_str()),
                    active: self.active.as_deref() == Some(event.id.as_str()),
                    tooltip: self.tooltips.get(&event.id).copied().unwrap_or_default(),
                }
            })
            .collect();

        TimelineView {
            title: TIMELINE_TITLE,
            filters,
            markers,
            events,
            chart: self.chart_view(),
        }
    }

    fn chart_view(&self) -> ChartPanelView {
        ChartPanelView {
            visible: self.chart_visible,
            toggle_label: if self.chart_visible {
                HIDE_CHART_LABEL
            } else {
                SHOW_CHART_LABEL
            },
            title: CHART_TITLE,
            series: ChartSeries::ALL
                .iter()
                .map(|&series| SeriesButton {
                    series,
                    label: series.label(),
                    active: self.chart_series == Some(series),
                })
                .collect(),
            body: match self.chart_series {
                Some(series) => ChartBody::Placeholder(series.placeholder_lines()),
                None => ChartBody::Prompt(CHART_PROMPT),
            },
        }
    }

    fn visible_events(&self) -> impl Iterator<Item = &TimelineEvent> {
        self.events
            .iter()
            .filter(|e| self.filters.is_enabled(e.event_type))
    }

    fn visible_event(&self, event_id: &str) -> Option<&TimelineEvent> {
        self.visible_events().find(|e| e.id == event_id)
    }

    /// Enable or disable a category, then re-render
    pub fn set_filter(&mut self, event_type: EventType, enabled: bool) -> Vec<WidgetEffect> {
        tracing::debug!(%event_type, enabled, "Timeline filter changed");
        self.filters.set(event_type, enabled);
        self.render()
    }

    /// Mark an event as hovered, replacing any previous hover
    /// Whether [`hover_event`](Self::hover_event) would change the hover state
    pub fn hover_changes(&self, event_id: &str) -> bool {
        self.hovered.as_deref() != Some(event_id) && self.visible_event(event_id).is_some()
    }

    /// Whether [`leave_event`](Self::leave_event) would change the hover state
    pub fn leave_changes(&self, event_id: &str) -> bool {
        self.hovered.as_deref() == Some(event_id)
    }

    /// Returns `true` if the hovered event changed
    pub fn hover_event(&mut self, event_id: &str) -> bool {
        if !self.hover_changes(event_id) {
            return false;
        }
        self.hovered = Some(event_id.to_string());
        true
    }

    /// Returns `true` if the hover was cleared
    pub fn leave_event(&mut self, event_id: &str) -> bool {
        if !self.leave_changes(event_id) {
            return false;
        }
        self.hovered = None;
        true
    }

    /// Make an event the sole active one.
    ///
    /// Asks for the strip to be centered on it and, when the event links to
    /// an essay section, for a deferred page scroll. A newer selection
    /// cancels a section scroll that has not fired yet. Unknown or hidden
    /// events are ignored.
    pub fn select_event(&mut self, event_id: &str) -> Vec<WidgetEffect> {
        let essay_link = match self.visible_event(event_id) {
            Some(event) => event.essay_link.clone(),
            None => {
                tracing::debug!(event_id, "Ignoring selection of unknown event");
                return Vec::new();
            }
        };

        self.active = Some(event_id.to_string());
        self.section_timer.cancel();
        self.pending_section = None;

        let mut effects = vec![WidgetEffect::CenterEvent {
            event_id: event_id.to_string(),
        }];

        if let Some(section_id) = essay_link {
            let ticket = self.section_timer.arm();
            self.pending_section = Some(section_id.clone());
            effects.push(WidgetEffect::ScrollToSection {
                ticket,
                section_id,
                delay_ms: SECTION_SCROLL_DELAY_MS,
            });
        }

        effects
    }

    /// Show or hide the trends panel; returns the new visibility
    pub fn toggle_chart_panel(&mut self) -> bool {
        self.chart_visible = !self.chart_visible;
        self.chart_visible
    }

    pub fn select_chart_series(&mut self, series: ChartSeries) {
        tracing::debug!(%series, "Chart series selected");
        self.chart_series = Some(series);
    }

    /// Attach the spawned task for a timer ticket so it can be aborted
    pub fn bind_task(&mut self, ticket: TimerTicket, task: AbortHandle) {
        match ticket.kind() {
            TimerKind::TooltipPass => self.tooltip_timer.bind(ticket, task),
            TimerKind::SectionScroll => self.section_timer.bind(ticket, task),
        }
    }

    /// Run the tooltip visibility pass for `ticket`.
    ///
    /// `measure` returns the bounding box of a visible event's popup by event
    /// id. Returns false, changing nothing, when the ticket is stale.
    pub fn apply_tooltip_pass(
        &mut self,
        ticket: TimerTicket,
        measure: impl Fn(&str) -> Option<Rect>,
        viewport: Viewport,
    ) -> bool {
        if !self.tooltip_timer.fire(ticket) {
            return false;
        }

        let adjustments: Vec<(String, TooltipAdjustment)> = self
            .visible_events()
            .filter_map(|event| {
                let bounds = measure(&event.id)?;
                let adjustment = TooltipAdjustment::for_bounds(bounds, viewport);
                (!adjustment.is_noop()).then(|| (event.id.clone(), adjustment))
            })
            .collect();

        tracing::debug!(adjusted = adjustments.len(), "Tooltip pass complete");
        self.tooltips.extend(adjustments);
        true
    }

    /// Section to scroll to for a fired section timer, if still current
    pub fn take_section_scroll(&mut self, ticket: TimerTicket) -> Option<String> {
        if self.section_timer.fire(ticket) {
            self.pending_section.take()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debtline_domain::{HorizontalPin, Side};

    fn event(id: &str, year: i32, event_type: EventType, essay_link: Option<&str>) -> TimelineEvent {
        TimelineEvent {
            id: id.to_string(),
            year,
            event_type,
            title: format!("Event {id}"),
            summary: format!("Summary of {id}"),
            essay_link: essay_link.map(str::to_string),
        }
    }

    fn scenario_feed() -> TimelineFeed {
        TimelineFeed {
            events: vec![
                event("ndea", 1958, EventType::Legislation, None),
                event("sallie-mae", 1972, EventType::Legislation, Some("matthew-effect")),
                event("inflation", 1980, EventType::Economic, None),
            ],
        }
    }

    fn mixed_feed() -> TimelineFeed {
        TimelineFeed {
            events: vec![
                event("e1", 2008, EventType::Economic, None),
                event("l1", 1944, EventType::Legislation, None),
                event("i1", 1965, EventType::Institutional, None),
                event("l2", 1965, EventType::Legislation, None),
                event("e2", 1980, EventType::Economic, None),
                event("i2", 1999, EventType::Institutional, None),
                event("l3", 2022, EventType::Legislation, Some("conclusion")),
            ],
        }
    }

    fn rendered(feed: TimelineFeed) -> TimelineWidget {
        let mut widget = TimelineWidget::new(feed).unwrap();
        widget.render();
        widget
    }

    fn tooltip_ticket(effects: &[WidgetEffect]) -> TimerTicket {
        effects
            .iter()
            .find_map(|e| match e {
                WidgetEffect::AdjustTooltips { ticket, .. } => Some(*ticket),
                _ => None,
            })
            .unwrap()
    }

    fn section_ticket(effects: &[WidgetEffect]) -> TimerTicket {
        effects
            .iter()
            .find_map(|e| match e {
                WidgetEffect::ScrollToSection { ticket, .. } => Some(*ticket),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn empty_feed_cannot_build_a_widget() {
        let result = TimelineWidget::new(TimelineFeed::default());
        assert_eq!(result.unwrap_err(), DomainError::EmptyTimeline);
    }

    #[test]
    fn events_are_sorted_on_load() {
        let widget = TimelineWidget::new(mixed_feed()).unwrap();
        let years: Vec<i32> = widget.events().iter().map(|e| e.year).collect();
        assert_eq!(years, vec![1944, 1965, 1965, 1980, 1999, 2008, 2022]);
        // Equal years keep feed order
        assert_eq!(widget.events()[1].id, "i1");
        assert_eq!(widget.events()[2].id, "l2");
    }

    #[test]
    fn all_filters_render_every_event() {
        let widget = rendered(mixed_feed());
        assert_eq!(widget.view().events.len(), 7);
    }

    #[test]
    fn every_filter_subset_renders_only_enabled_types() {
        for mask in 0u8..8 {
            let mut widget = rendered(mixed_feed());
            for (bit, event_type) in EventType::ALL.into_iter().enumerate() {
                widget.set_filter(event_type, mask & (1 << bit) != 0);
            }

            let view = widget.view();
            let expected = widget
                .events()
                .iter()
                .filter(|e| widget.filters().is_enabled(e.event_type))
                .count();
            assert_eq!(view.events.len(), expected, "mask {mask:03b}");
            assert!(view
                .events
                .iter()
                .all(|e| widget.filters().is_enabled(e.event_type)));
        }
    }

    #[test]
    fn rendered_positions_follow_chronology() {
        let widget = rendered(mixed_feed());
        let view = widget.view();
        for pair in view.events.windows(2) {
            assert!(pair[0].left_percent <= pair[1].left_percent);
        }
        assert_eq!(view.events.first().unwrap().left_percent, 0.0);
        assert_eq!(view.events.last().unwrap().left_percent, 100.0);
    }

    #[test]
    fn scenario_feed_renders_three_events_and_four_decades() {
        let mut widget = rendered(scenario_feed());
        let view = widget.view();

        assert_eq!(view.events.len(), 3);
        let labels: Vec<&str> = view.markers.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["1950s", "1960s", "1970s", "1980s"]);

        widget.set_filter(EventType::Economic, false);
        let filtered = widget.view();
        assert_eq!(filtered.events.len(), 2);
        assert_eq!(filtered.markers, view.markers);
    }

    #[test]
    fn header_mirrors_filter_state() {
        let mut widget = rendered(scenario_feed());
        widget.set_filter(EventType::Institutional, false);

        let filters = widget.view().filters;
        let labels: Vec<&str> = filters.iter().map(|f| f.label).collect();
        assert_eq!(
            labels,
            vec!["Policy & Legislation", "Economic Impacts", "Institutional Changes"]
        );
        assert_eq!(
            filters.iter().map(|f| f.checked).collect::<Vec<_>>(),
            vec![true, true, false]
        );
        assert_eq!(widget.view().title, "Interactive Student Debt Timeline");
    }

    #[test]
    fn sides_alternate_over_the_filtered_list() {
        let mut widget = rendered(mixed_feed());
        widget.set_filter(EventType::Institutional, false);

        let sides: Vec<Side> = widget.view().events.iter().map(|e| e.side).collect();
        assert_eq!(
            sides,
            vec![Side::Above, Side::Below, Side::Above, Side::Below, Side::Above]
        );
    }

    #[test]
    fn rendering_twice_is_idempotent() {
        let mut widget = rendered(mixed_feed());
        let first = widget.view();
        widget.render();
        assert_eq!(widget.view(), first);
    }

    #[test]
    fn hover_is_exclusive() {
        let mut widget = rendered(mixed_feed());
        widget.hover_event("l1");
        widget.hover_event("e2");

        let hovered: Vec<String> = widget
            .view()
            .events
            .into_iter()
            .filter(|e| e.hovered)
            .map(|e| e.id)
            .collect();
        assert_eq!(hovered, vec!["e2".to_string()]);

        widget.leave_event("l1");
        assert_eq!(widget.hovered(), Some("e2"));
        widget.leave_event("e2");
        assert_eq!(widget.hovered(), None);
    }

    #[test]
    fn repeated_hover_and_stray_leave_report_no_change() {
        let mut widget = rendered(mixed_feed());
        assert!(!widget.leave_changes("l1"));
        assert!(!widget.leave_event("l1"));

        assert!(widget.hover_event("l1"));
        assert!(!widget.hover_changes("l1"));
        assert!(!widget.hover_event("l1"));
        assert!(!widget.hover_event("missing"));

        assert!(!widget.leave_event("e2"));
        assert!(widget.leave_changes("l1"));
        assert!(widget.leave_event("l1"));
        assert_eq!(widget.hovered(), None);
    }

    #[test]
    fn hidden_events_cannot_be_hovered() {
        let mut widget = rendered(mixed_feed());
        widget.set_filter(EventType::Economic, false);
        assert!(!widget.hover_changes("e2"));
        assert!(!widget.hover_event("e2"));
        assert_eq!(widget.hovered(), None);
    }

    #[test]
    fn at_most_one_active_event_after_any_click_sequence() {
        let mut widget = rendered(mixed_feed());
        for id in ["l1", "e1", "missing", "i2", "l1", "l3"] {
            widget.select_event(id);
            let active = widget.view().events.iter().filter(|e| e.active).count();
            assert!(active <= 1);
        }
        assert_eq!(widget.active(), Some("l3"));
    }

    #[test]
    fn unknown_event_selection_is_ignored() {
        let mut widget = rendered(mixed_feed());
        widget.select_event("l1");
        assert!(widget.select_event("nope").is_empty());
        assert_eq!(widget.active(), Some("l1"));
    }

    #[test]
    fn hidden_event_cannot_be_selected() {
        let mut widget = rendered(mixed_feed());
        widget.set_filter(EventType::Economic, false);
        assert!(widget.select_event("e1").is_empty());
        assert_eq!(widget.active(), None);
    }

    #[test]
    fn selecting_centers_the_event() {
        let mut widget = rendered(mixed_feed());
        let effects = widget.select_event("i2");
        assert_eq!(
            effects,
            vec![WidgetEffect::CenterEvent {
                event_id: "i2".to_string()
            }]
        );
    }

    #[test]
    fn linked_event_schedules_deferred_section_scroll() {
        let mut widget = rendered(scenario_feed());
        let effects = widget.select_event("sallie-mae");

        assert!(matches!(
            effects.last(),
            Some(WidgetEffect::ScrollToSection { section_id, delay_ms: 300, .. })
                if section_id == "matthew-effect"
        ));

        let ticket = section_ticket(&effects);
        assert_eq!(
            widget.take_section_scroll(ticket).as_deref(),
            Some("matthew-effect")
        );
        assert_eq!(widget.take_section_scroll(ticket), None);
    }

    #[test]
    fn newer_selection_cancels_pending_section_scroll() {
        let mut widget = rendered(mixed_feed());
        let first = section_ticket(&widget.select_event("l3"));
        widget.select_event("l1");

        assert_eq!(widget.take_section_scroll(first), None);
    }

    #[test]
    fn render_cancels_pending_section_scroll() {
        let mut widget = rendered(mixed_feed());
        let ticket = section_ticket(&widget.select_event("l3"));
        widget.set_filter(EventType::Economic, false);

        assert_eq!(widget.take_section_scroll(ticket), None);
        assert_eq!(widget.active(), None);
    }

    #[test]
    fn chart_panel_toggles_label() {
        let mut widget = rendered(scenario_feed());
        let chart = widget.view().chart;
        assert!(!chart.visible);
        assert_eq!(chart.toggle_label, "Show Data Trends");
        assert_eq!(chart.title, "Student Debt Trends Over Time");
        assert_eq!(chart.body, ChartBody::Prompt("Select a data series to display"));

        assert!(widget.toggle_chart_panel());
        assert_eq!(widget.view().chart.toggle_label, "Hide Data Trends");

        assert!(!widget.toggle_chart_panel());
        assert_eq!(widget.view().chart.toggle_label, "Show Data Trends");
    }

    #[test]
    fn chart_series_selection_is_exclusive() {
        let mut widget = rendered(scenario_feed());
        widget.toggle_chart_panel();
        widget.select_chart_series(ChartSeries::Tuition);
        widget.select_chart_series(ChartSeries::Borrowers);

        let chart = widget.view().chart;
        let active: Vec<ChartSeries> = chart
            .series
            .iter()
            .filter(|b| b.active)
            .map(|b| b.series)
            .collect();
        assert_eq!(active, vec![ChartSeries::Borrowers]);
        assert_eq!(
            chart.body,
            ChartBody::Placeholder([
                "This would display the borrowers chart in a real implementation.".to_string(),
                "The chart would show trends from 1965 to present day.".to_string(),
            ])
        );
    }

    #[test]
    fn filter_change_resets_transient_state() {
        let mut widget = rendered(mixed_feed());
        widget.hover_event("l1");
        widget.select_event("l1");
        widget.toggle_chart_panel();
        widget.select_chart_series(ChartSeries::Debt);

        widget.set_filter(EventType::Economic, false);
        let view = widget.view();
        assert!(view.events.iter().all(|e| !e.hovered && !e.active));
        assert!(!view.chart.visible);
        assert_eq!(view.chart.body, ChartBody::Prompt(CHART_PROMPT));
    }

    #[test]
    fn tooltip_pass_adjusts_offscreen_popups() {
        let mut widget = TimelineWidget::new(scenario_feed()).unwrap();
        let ticket = tooltip_ticket(&widget.render());
        let viewport = Viewport {
            width: 800.0,
            height: 600.0,
        };

        let applied = widget.apply_tooltip_pass(
            ticket,
            |id| match id {
                "ndea" => Some(Rect::new(-30.0, 100.0, 200.0, 80.0)),
                "sallie-mae" => Some(Rect::new(300.0, -10.0, 200.0, 80.0)),
                "inflation" => Some(Rect::new(700.0, 100.0, 200.0, 80.0)),
                _ => None,
            },
            viewport,
        );
        assert!(applied);

        let view = widget.view();
        assert_eq!(view.events[0].tooltip.pin, Some(HorizontalPin::Left));
        assert!(view.events[1].tooltip.flip_below);
        assert_eq!(view.events[1].effective_side(), Side::Below);
        assert_eq!(view.events[2].tooltip.pin, Some(HorizontalPin::Right));
    }

    #[test]
    fn stale_tooltip_pass_is_ignored() {
        let mut widget = TimelineWidget::new(scenario_feed()).unwrap();
        let stale = tooltip_ticket(&widget.render());
        widget.render();

        let applied = widget.apply_tooltip_pass(
            stale,
            |_| Some(Rect::new(-30.0, -30.0, 10.0, 10.0)),
            Viewport::default(),
        );
        assert!(!applied);
        assert!(widget.view().events.iter().all(|e| e.tooltip.is_noop()));
    }

    #[test]
    fn every_render_bumps_revision() {
        let mut widget = TimelineWidget::new(scenario_feed()).unwrap();
        assert_eq!(widget.revision(), 0);
        widget.render();
        widget.set_filter(EventType::Economic, true);
        assert_eq!(widget.revision(), 2);
    }

    #[test]
    fn bundled_sample_feed_loads() {
        let feed: TimelineFeed =
            serde_json::from_str(include_str!("../../../assets/timeline-data.json")).unwrap();
        let mut widget = rendered(feed);

        let view = widget.view();
        assert_eq!(view.markers.first().unwrap().label, "1940s");
        assert_eq!(view.markers.last().unwrap().label, "2030s");
        assert_eq!(view.markers.len(), 10);

        let linked = view
            .events
            .iter()
            .find(|e| e.essay_link.as_deref() == Some("matthew-effect"))
            .unwrap()
            .id
            .clone();
        let effects = widget.select_event(&linked);
        assert_eq!(
            widget.take_section_scroll(section_ticket(&effects)).as_deref(),
            Some("matthew-effect")
        );
    }

    #[test]
    fn single_year_feed_centers_everything() {
        let feed = TimelineFeed {
            events: vec![
                event("a", 1990, EventType::Economic, None),
                event("b", 1990, EventType::Legislation, None),
            ],
        };
        let widget = rendered(feed);
        assert!(widget.view().events.iter().all(|e| e.left_percent == 50.0));
    }
}
