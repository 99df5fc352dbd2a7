//! WASM platform implementations
//!
//! Provides browser implementations using web-sys, gloo-timers and gloo-net.

use std::{future::Future, pin::Pin};

use debtline_domain::{Rect, Theme, Viewport};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

use crate::ports::outbound::{
    DocumentProvider, FeedProvider, FetchError, SleepProvider, StorageProvider, TimeProvider,
};
use crate::state::Platform;

/// Media query used for the system color-scheme fallback
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// WASM time provider using js_sys::Date
#[derive(Clone, Default)]
pub struct WasmTimeProvider;

impl TimeProvider for WasmTimeProvider {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// WASM sleep provider using gloo-timers
#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        Box::pin(TimeoutFuture::new(ms))
    }
}

/// WASM storage provider using localStorage
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                tracing::warn!(key, "localStorage write rejected");
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// WASM document provider operating on the host page
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn element_rect(&self, element_id: &str) -> Option<Rect> {
        let rect = document()?
            .get_element_by_id(element_id)?
            .get_bounding_client_rect();
        Some(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
    }

    fn viewport(&self) -> Viewport {
        let Some(window) = web_sys::window() else {
            return Viewport::default();
        };
        let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        Viewport {
            width: dimension(window.inner_width()),
            height: dimension(window.inner_height()),
        }
    }

    fn scroll_element_by(&self, element_id: &str, delta_x: f64) {
        let Some(element) = document().and_then(|d| d.get_element_by_id(element_id)) else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_left(f64::from(element.scroll_left()) + delta_x);
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_section_into_view(&self, section_id: &str) -> bool {
        let Some(section) = document().and_then(|d| d.get_element_by_id(section_id)) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        section.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn prefers_dark_scheme(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .is_some_and(|query| query.matches())
    }

    fn apply_theme(&self, theme: Theme) {
        let Some(body) = document().and_then(|d| d.body()) else {
            return;
        };
        let result = match theme {
            Theme::Dark => body.set_attribute("data-theme", Theme::Dark.as_str()),
            Theme::Light => body.remove_attribute("data-theme"),
        };
        if result.is_err() {
            tracing::warn!(theme = %theme, "Failed to update body theme attribute");
        }
    }
}

/// WASM feed provider using gloo-net (fetch)
#[derive(Clone, Default)]
pub struct WasmFeedProvider;

impl FeedProvider for WasmFeedProvider {
    fn fetch_text(
        &self,
        location: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, FetchError>> + 'static>> {
        let location = location.to_string();
        Box::pin(async move {
            let response = Request::get(&location)
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            if !response.ok() {
                return Err(FetchError::Status(response.status()));
            }

            response
                .text()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))
        })
    }
}

/// Create platform services for the browser
pub fn create_platform() -> Platform {
    Platform::new(
        WasmTimeProvider,
        WasmSleepProvider,
        WasmStorageProvider,
        WasmDocumentProvider,
        WasmFeedProvider,
    )
}
