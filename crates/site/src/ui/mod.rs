use dioxus::prelude::*;

use crate::state::Platform;
use presentation::components::theme_toggle::{use_preview_theme, ThemeToggle};
use presentation::components::timeline::{InteractiveTimeline, TimelineErrorBlock};

pub mod presentation;

/// Shell variant for UI layout selection.
/// This is passed via Dioxus context from the runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/site/src/runner.rs`).
    let shell = use_context::<ShellKind>();

    // Must be created inside an active Dioxus runtime.
    let state = use_context_provider(presentation::state::TimelineState::new);
    let theme = use_preview_theme();

    // A failed load leaves the container holding the error block alone
    if state.is_failed() {
        return rsx! {
            TimelineErrorBlock {}
        };
    }

    let shell_class = match shell {
        ShellKind::Desktop => "timeline-shell",
        ShellKind::Mobile => "timeline-shell timeline-shell-mobile",
    };
    let theme_attr = theme.map(|service| service.read().current().as_str());

    rsx! {
        div {
            class: shell_class,
            "data-theme": theme_attr,
            if let Some(service) = theme {
                ThemeToggle { service }
            }
            InteractiveTimeline {}
        }
    }
}
