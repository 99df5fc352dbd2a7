//! Interactive timeline components
//!
//! Thin adapter over [`TimelineWidget`]: components render its view model and
//! forward DOM events to its command methods. Effects the widget returns are
//! handed to an [`EffectRunner`]; deferred ones are spawned on the Dioxus
//! runtime.

mod chart_panel;
mod error_block;
mod event_marker;
mod filters;

use dioxus::prelude::*;

use crate::application::timeline::{
    load_timeline, EffectRunner, MarkerView, TimelineLoad, TimelineView, TimelineWidget,
    WidgetCell, WidgetEffect, WRAPPER_DOM_ID,
};
use crate::ui::presentation::services::{use_site_config, use_timeline_feed_service};
use crate::ui::presentation::state::{use_timeline_state, TimelineState};
use crate::ui::use_platform;

use chart_panel::ChartPanel;
pub use error_block::TimelineErrorBlock;
use event_marker::EventMarker;
use filters::TimelineHeader;

pub type TimelineRunner = EffectRunner<TimelineState>;

/// Hook building the effect runner for the shared timeline state
pub fn use_timeline_runner() -> TimelineRunner {
    let platform = use_platform();
    let state = use_timeline_state();
    use_hook(move || EffectRunner::new(platform, state))
}

/// Carry out widget effects, spawning the deferred ones
pub fn spawn_effects(runner: &TimelineRunner, effects: Vec<WidgetEffect>) {
    for task in runner.run(effects) {
        spawn(task);
    }
}

/// Apply a command to the widget and carry out whatever it asks for
pub fn dispatch(
    state: TimelineState,
    runner: &TimelineRunner,
    command: impl FnOnce(&mut TimelineWidget) -> Vec<WidgetEffect>,
) {
    if let Some(effects) = state.with_widget(command) {
        spawn_effects(runner, effects);
    }
}

#[component]
pub fn InteractiveTimeline() -> Element {
    let platform = use_platform();
    let config = use_site_config();
    let feed_service = use_timeline_feed_service();
    let mut state = use_timeline_state();
    let runner = use_timeline_runner();

    // Load once
    use_hook(move || {
        let location = config.feed_url.clone();
        spawn(async move {
            let started = platform.now_millis();

            match load_timeline(&feed_service, &location).await {
                TimelineLoad::Ready(mut widget) => {
                    let effects = widget.render();
                    tracing::info!(
                        events = widget.events().len(),
                        elapsed_ms = platform.now_millis().saturating_sub(started),
                        "Timeline ready"
                    );
                    state.set_ready(widget);
                    spawn_effects(&runner, effects);
                }
                _ => state.set_failed(),
            }
        });
    });

    let snapshot = match &*state.load.read() {
        TimelineLoad::Loading => None,
        TimelineLoad::Ready(widget) => Some(Ok((widget.revision(), widget.view()))),
        TimelineLoad::Failed => Some(Err(())),
    };

    match snapshot {
        None => rsx! {
            div { class: "timeline-loading" }
        },
        Some(Err(())) => rsx! {
            TimelineErrorBlock {}
        },
        Some(Ok((revision, view))) => rsx! {
            // Keyed on the revision so each render replaces the subtree
            TimelineBody { key: "{revision}", view }
        },
    }
}

#[component]
fn TimelineBody(view: TimelineView) -> Element {
    let TimelineView {
        title,
        filters,
        markers,
        events,
        chart,
    } = view;

    rsx! {
        div {
            class: "interactive-timeline",

            TimelineHeader { title, filters }

            div {
                id: WRAPPER_DOM_ID,
                class: "timeline-wrapper",

                div { class: "timeline-line" }

                for marker in markers {
                    DecadeMarker { key: "{marker.label}", marker: marker.clone() }
                }

                for event in events {
                    EventMarker { key: "{event.id}", event: event.clone() }
                }
            }

            ChartPanel { chart }
        }
    }
}

#[component]
fn DecadeMarker(marker: MarkerView) -> Element {
    rsx! {
        div {
            class: "decade-marker",
            style: "left: {marker.left_percent}%;",
            span { "{marker.label}" }
        }
    }
}
