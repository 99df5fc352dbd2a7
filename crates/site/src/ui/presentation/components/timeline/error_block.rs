use dioxus::prelude::*;

use crate::application::timeline::LOAD_ERROR;

/// Shown in place of the widget when the feed cannot be loaded
#[component]
pub fn TimelineErrorBlock() -> Element {
    let heading = LOAD_ERROR.heading;
    let message = LOAD_ERROR.message;

    rsx! {
        div {
            class: "timeline-error",
            h3 { "{heading}" }
            p { "{message}" }
        }
    }
}
