//! Carries out widget effects against the platform
//!
//! Centering happens immediately. Deferred effects become abortable tasks
//! that the caller spawns on its executor; each task's abort handle is bound
//! back to the widget before it is returned, so re-renders and newer
//! selections can cancel it.

use std::{future::Future, pin::Pin};

use debtline_domain::center_scroll_delta;
use futures_util::future::{AbortHandle, Abortable};

use super::timer::TimerTicket;
use super::view::{event_dom_id, popup_dom_id, WRAPPER_DOM_ID};
use super::widget::{TimelineWidget, WidgetEffect};
use crate::state::Platform;

/// A deferred job ready to be spawned
pub type DeferredTask = Pin<Box<dyn Future<Output = ()> + 'static>>;

/// Shared access to a widget owned by the UI layer
pub trait WidgetCell: Clone + 'static {
    /// Run `f` on the widget, or return `None` when none is loaded
    fn with_widget<R>(&self, f: impl FnOnce(&mut TimelineWidget) -> R) -> Option<R>;
}

/// Scroll the timeline strip so `event_id` is centered.
///
/// Returns false when either element is missing.
pub fn center_event(platform: &Platform, event_id: &str) -> bool {
    let (Some(target), Some(container)) = (
        platform.element_rect(&event_dom_id(event_id)),
        platform.element_rect(WRAPPER_DOM_ID),
    ) else {
        return false;
    };

    platform.scroll_element_by(WRAPPER_DOM_ID, center_scroll_delta(target, container));
    true
}

#[derive(Clone)]
pub struct EffectRunner<C: WidgetCell> {
    platform: Platform,
    cell: C,
}

impl<C: WidgetCell> EffectRunner<C> {
    pub fn new(platform: Platform, cell: C) -> Self {
        Self { platform, cell }
    }

    /// Perform immediate effects and return the deferred ones as tasks
    pub fn run(&self, effects: Vec<WidgetEffect>) -> Vec<DeferredTask> {
        effects
            .into_iter()
            .filter_map(|effect| self.run_one(effect))
            .collect()
    }

    fn run_one(&self, effect: WidgetEffect) -> Option<DeferredTask> {
        match effect {
            WidgetEffect::CenterEvent { event_id } => {
                if !center_event(&self.platform, &event_id) {
                    tracing::debug!(event_id = %event_id, "Event not in the document, skipping centering");
                }
                None
            }
            WidgetEffect::AdjustTooltips { ticket, delay_ms } => {
                let platform = self.platform.clone();
                let cell = self.cell.clone();
                let job = async move {
                    platform.sleep_ms(delay_ms).await;
                    let viewport = platform.viewport();
                    cell.with_widget(|widget| {
                        widget.apply_tooltip_pass(
                            ticket,
                            |id| platform.element_rect(&popup_dom_id(id)),
                            viewport,
                        )
                    });
                };
                Some(self.abortable(ticket, job))
            }
            WidgetEffect::ScrollToSection {
                ticket,
                section_id,
                delay_ms,
            } => {
                let platform = self.platform.clone();
                let cell = self.cell.clone();
                let job = async move {
                    platform.sleep_ms(delay_ms).await;
                    let Some(section) = cell.with_widget(|w| w.take_section_scroll(ticket)).flatten()
                    else {
                        return;
                    };
                    if !platform.scroll_section_into_view(&section) {
                        tracing::warn!(
                            section = %section,
                            requested = %section_id,
                            "Linked essay section not found"
                        );
                    }
                };
                Some(self.abortable(ticket, job))
            }
        }
    }

    fn abortable(
        &self,
        ticket: TimerTicket,
        job: impl Future<Output = ()> + 'static,
    ) -> DeferredTask {
        let (handle, registration) = AbortHandle::new_pair();
        self.cell.with_widget(|widget| widget.bind_task(ticket, handle));
        let task = Abortable::new(job, registration);
        Box::pin(async move {
            // Err(Aborted) just means the timer was superseded
            let _ = task.await;
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use debtline_domain::{EventType, Rect, TimelineEvent, TimelineFeed, Viewport};

    use super::*;
    use crate::infrastructure::platform::mock::create_mock_platform;

    #[derive(Clone, Default)]
    struct TestCell(Rc<RefCell<Option<TimelineWidget>>>);

    impl WidgetCell for TestCell {
        fn with_widget<R>(&self, f: impl FnOnce(&mut TimelineWidget) -> R) -> Option<R> {
            self.0.borrow_mut().as_mut().map(f)
        }
    }

    fn feed() -> TimelineFeed {
        let event = |id: &str, year, link: Option<&str>| TimelineEvent {
            id: id.to_string(),
            year,
            event_type: EventType::Legislation,
            title: id.to_string(),
            summary: String::new(),
            essay_link: link.map(str::to_string),
        };
        TimelineFeed {
            events: vec![
                event("ndea", 1958, None),
                event("sallie-mae", 1972, Some("matthew-effect")),
                event("crisis", 2008, Some("crisis")),
            ],
        }
    }

    fn loaded_cell() -> TestCell {
        let cell = TestCell::default();
        *cell.0.borrow_mut() = Some(TimelineWidget::new(feed()).unwrap());
        cell
    }

    #[test]
    fn centering_scrolls_the_wrapper() {
        let (platform, document) = create_mock_platform();
        document.add_element(WRAPPER_DOM_ID, Rect::new(0.0, 0.0, 1000.0, 300.0));
        document.add_element(&event_dom_id("ndea"), Rect::new(800.0, 100.0, 40.0, 40.0));

        assert!(center_event(&platform, "ndea"));
        assert_eq!(
            document.horizontal_scrolls(),
            vec![(WRAPPER_DOM_ID.to_string(), 320.0)]
        );
    }

    #[test]
    fn centering_without_markup_is_silent() {
        let (platform, document) = create_mock_platform();
        assert!(!center_event(&platform, "ndea"));
        assert!(document.horizontal_scrolls().is_empty());
    }

    #[tokio::test]
    async fn selecting_a_linked_event_scrolls_to_its_section() {
        let (platform, document) = create_mock_platform();
        document.add_element("matthew-effect", Rect::new(0.0, 2400.0, 800.0, 600.0));
        let cell = loaded_cell();
        let runner = EffectRunner::new(platform, cell.clone());

        let effects = cell.with_widget(|w| w.select_event("sallie-mae")).unwrap();
        for task in runner.run(effects) {
            task.await;
        }

        assert_eq!(document.scrolled_sections(), vec!["matthew-effect".to_string()]);
    }

    #[tokio::test]
    async fn superseded_section_scroll_never_fires() {
        let (platform, document) = create_mock_platform();
        document.add_element("matthew-effect", Rect::new(0.0, 2400.0, 800.0, 600.0));
        document.add_element("crisis", Rect::new(0.0, 5000.0, 800.0, 600.0));
        let cell = loaded_cell();
        let runner = EffectRunner::new(platform, cell.clone());

        let first = runner.run(cell.with_widget(|w| w.select_event("sallie-mae")).unwrap());
        let second = runner.run(cell.with_widget(|w| w.select_event("crisis")).unwrap());
        for task in first.into_iter().chain(second) {
            task.await;
        }

        assert_eq!(document.scrolled_sections(), vec!["crisis".to_string()]);
    }

    #[tokio::test]
    async fn tooltip_pass_reads_popup_geometry() {
        let (platform, document) = create_mock_platform();
        document.set_viewport(Viewport {
            width: 800.0,
            height: 600.0,
        });
        document.add_element(&popup_dom_id("crisis"), Rect::new(700.0, 50.0, 200.0, 80.0));
        let cell = loaded_cell();
        let runner = EffectRunner::new(platform, cell.clone());

        let effects = cell.with_widget(|w| w.render()).unwrap();
        for task in runner.run(effects) {
            task.await;
        }

        let view = cell.with_widget(|w| w.view()).unwrap();
        let crisis = view.events.iter().find(|e| e.id == "crisis").unwrap();
        assert!(!crisis.tooltip.is_noop());
        assert!(view.events.iter().filter(|e| e.id != "crisis").all(|e| e.tooltip.is_noop()));
    }

    #[tokio::test]
    async fn rerender_aborts_pending_tooltip_pass() {
        let (platform, document) = create_mock_platform();
        document.add_element(&popup_dom_id("ndea"), Rect::new(-50.0, -50.0, 200.0, 80.0));
        let cell = loaded_cell();
        let runner = EffectRunner::new(platform, cell.clone());

        let stale = runner.run(cell.with_widget(|w| w.render()).unwrap());
        cell.with_widget(|w| w.render());
        for task in stale {
            task.await;
        }

        let view = cell.with_widget(|w| w.view()).unwrap();
        assert!(view.events.iter().all(|e| e.tooltip.is_noop()));
    }
}
