//! A single event on the strip with its detail popup

use dioxus::prelude::*;

use crate::application::timeline::{event_dom_id, popup_dom_id, EventView};
use crate::ui::presentation::state::use_timeline_state;

use super::{dispatch, use_timeline_runner};

#[component]
pub fn EventMarker(event: EventView) -> Element {
    let state = use_timeline_state();
    let runner = use_timeline_runner();

    let class = event.class_list();
    let style = event.style();
    let popup_style = event.popup_style();

    let hover_id = event.id.clone();
    let leave_id = event.id.clone();
    let select_id = event.id.clone();

    rsx! {
        div {
            id: event_dom_id(&event.id),
            class: "{class}",
            style: "{style}",
            "data-year": "{event.year}",
            "data-event-id": "{event.id}",
            onmouseenter: move |_| {
                state.update_if(
                    |widget| widget.hover_changes(&hover_id),
                    |widget| {
                        widget.hover_event(&hover_id);
                    },
                );
            },
            onmouseleave: move |_| {
                state.update_if(
                    |widget| widget.leave_changes(&leave_id),
                    |widget| {
                        widget.leave_event(&leave_id);
                    },
                );
            },
            onclick: move |_| {
                dispatch(state, &runner, |widget| widget.select_event(&select_id));
            },

            div { class: "event-marker" }
            div {
                id: popup_dom_id(&event.id),
                class: "event-content",
                style: "{popup_style}",
                h3 { "{event.heading}" }
                p { "{event.summary}" }
                if let Some(link) = event.essay_link.as_ref() {
                    a {
                        href: "#{link}",
                        class: "event-link",
                        // The widget schedules its own smooth scroll
                        onclick: move |e| e.prevent_default(),
                        "Read more"
                    }
                }
            }
        }
    }
}
