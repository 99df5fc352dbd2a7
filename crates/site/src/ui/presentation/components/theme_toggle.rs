//! Theme switch for the desktop preview
//!
//! On the essay page the host's own `#themeToggle` button is wired by the
//! page glue; the preview window has no host page, so it draws its own.

use dioxus::prelude::*;

use debtline_domain::Theme;

use crate::application::services::ThemeService;
use crate::state::{PlatformDocumentAdapter, PlatformStorageAdapter};
use crate::ui::use_platform;

pub type PreviewThemeService = ThemeService<PlatformStorageAdapter, PlatformDocumentAdapter>;

/// Hook resolving the preview theme once from platform storage.
///
/// `None` in the browser, where the page glue owns the theme.
pub fn use_preview_theme() -> Option<Signal<PreviewThemeService>> {
    let platform = use_platform();
    use_hook(move || {
        if cfg!(target_arch = "wasm32") {
            return None;
        }
        Some(Signal::new(ThemeService::new(
            platform.storage_adapter(),
            platform.document_adapter(),
        )))
    })
}

#[component]
pub fn ThemeToggle(service: Signal<PreviewThemeService>) -> Element {
    let mut service = service;
    let current = service.read().current();
    let label = match current {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    };

    rsx! {
        button {
            id: "themeToggle",
            class: "theme-toggle",
            onclick: move |_| {
                service.write().toggle();
            },
            "{label}"
        }
    }
}
