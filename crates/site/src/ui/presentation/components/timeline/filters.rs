//! Timeline header with the category filter checkboxes

use dioxus::prelude::*;

use crate::application::timeline::FilterToggle;
use crate::ui::presentation::state::use_timeline_state;

use super::{dispatch, use_timeline_runner};

#[component]
pub fn TimelineHeader(title: &'static str, filters: Vec<FilterToggle>) -> Element {
    rsx! {
        div {
            class: "timeline-header",
            h2 { "{title}" }
            div {
                class: "timeline-filters",
                for filter in filters {
                    FilterCheckbox { key: "{filter.event_type}", filter: filter.clone() }
                }
            }
        }
    }
}

#[component]
fn FilterCheckbox(filter: FilterToggle) -> Element {
    let state = use_timeline_state();
    let runner = use_timeline_runner();
    let event_type = filter.event_type;
    let key = event_type.as_str();
    let label = filter.label;

    rsx! {
        label {
            input {
                r#type: "checkbox",
                "data-filter": key,
                checked: filter.checked,
                onchange: move |e| {
                    let enabled = e.checked();
                    dispatch(state, &runner, |widget| widget.set_filter(event_type, enabled));
                },
            }
            span { class: "filter-color {key}" }
            " {label}"
        }
    }
}
