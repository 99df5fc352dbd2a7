//! In-memory platform for tests
//!
//! Storage lives in a shared map, sleeps resolve immediately, and the
//! document records every scroll and theme change so tests can assert on
//! them.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::{future::Future, pin::Pin};

use debtline_domain::{Rect, Theme, Viewport};

use crate::ports::outbound::{
    DocumentProvider, FeedProvider, FetchError, SleepProvider, StorageProvider, TimeProvider,
};
use crate::state::Platform;

/// Fixed clock
#[derive(Clone, Default)]
pub struct MockTimeProvider {
    pub now_ms: u64,
}

impl TimeProvider for MockTimeProvider {
    fn now_millis(&self) -> u64 {
        self.now_ms
    }
}

/// Sleep that completes on first poll
#[derive(Clone, Default)]
pub struct MockSleepProvider;

impl SleepProvider for MockSleepProvider {
    fn sleep_ms(&self, _ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(std::future::ready(()))
    }
}

/// Shared in-memory key/value storage
#[derive(Clone, Default)]
pub struct MockStorageProvider {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl StorageProvider for MockStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut guard) = self.values.lock() {
            guard.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        if let Ok(mut guard) = self.values.lock() {
            guard.remove(key);
        }
    }
}

#[derive(Default)]
struct DocumentState {
    elements: HashMap<String, Rect>,
    viewport: Viewport,
    prefers_dark: bool,
    theme: Option<Theme>,
    horizontal_scrolls: Vec<(String, f64)>,
    scrolled_sections: Vec<String>,
}

/// Scriptable fake document
#[derive(Clone, Default)]
pub struct MockDocumentProvider {
    state: Arc<Mutex<DocumentState>>,
}

impl MockDocumentProvider {
    fn with_state<R>(&self, f: impl FnOnce(&mut DocumentState) -> R) -> Option<R> {
        self.state.lock().ok().map(|mut guard| f(&mut guard))
    }

    /// Register an element and its bounding box
    pub fn add_element(&self, id: &str, rect: Rect) {
        self.with_state(|s| s.elements.insert(id.to_string(), rect));
    }

    pub fn set_viewport(&self, viewport: Viewport) {
        self.with_state(|s| s.viewport = viewport);
    }

    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        self.with_state(|s| s.prefers_dark = prefers_dark);
    }

    /// Last theme applied to the page
    pub fn applied_theme(&self) -> Option<Theme> {
        self.with_state(|s| s.theme).flatten()
    }

    /// Horizontal scroll requests, in order
    pub fn horizontal_scrolls(&self) -> Vec<(String, f64)> {
        self.with_state(|s| s.horizontal_scrolls.clone())
            .unwrap_or_default()
    }

    /// Sections scrolled into view, in order
    pub fn scrolled_sections(&self) -> Vec<String> {
        self.with_state(|s| s.scrolled_sections.clone())
            .unwrap_or_default()
    }
}

impl DocumentProvider for MockDocumentProvider {
    fn element_rect(&self, element_id: &str) -> Option<Rect> {
        self.with_state(|s| s.elements.get(element_id).copied())
            .flatten()
    }

    fn viewport(&self) -> Viewport {
        self.with_state(|s| s.viewport).unwrap_or_default()
    }

    fn scroll_element_by(&self, element_id: &str, delta_x: f64) {
        self.with_state(|s| {
            if s.elements.contains_key(element_id) {
                s.horizontal_scrolls.push((element_id.to_string(), delta_x));
            }
        });
    }

    fn scroll_section_into_view(&self, section_id: &str) -> bool {
        self.with_state(|s| {
            let exists = s.elements.contains_key(section_id);
            if exists {
                s.scrolled_sections.push(section_id.to_string());
            }
            exists
        })
        .unwrap_or(false)
    }

    fn prefers_dark_scheme(&self) -> bool {
        self.with_state(|s| s.prefers_dark).unwrap_or(false)
    }

    fn apply_theme(&self, theme: Theme) {
        self.with_state(|s| s.theme = Some(theme));
    }
}

/// Feed that always answers with the same result
#[derive(Clone)]
pub struct MockFeedProvider {
    response: Result<String, FetchError>,
}

impl MockFeedProvider {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            response: Ok(body.into()),
        }
    }

    pub fn failing(error: FetchError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl Default for MockFeedProvider {
    fn default() -> Self {
        Self::ok(r#"{"events":[]}"#)
    }
}

impl FeedProvider for MockFeedProvider {
    fn fetch_text(
        &self,
        _location: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, FetchError>> + 'static>> {
        Box::pin(std::future::ready(self.response.clone()))
    }
}

/// Create a mock platform, returning the document handle for assertions
pub fn create_mock_platform() -> (Platform, MockDocumentProvider) {
    create_mock_platform_with_feed(MockFeedProvider::default())
}

/// Create a mock platform that serves the given feed
pub fn create_mock_platform_with_feed(feed: MockFeedProvider) -> (Platform, MockDocumentProvider) {
    let document = MockDocumentProvider::default();
    let platform = Platform::new(
        MockTimeProvider::default(),
        MockSleepProvider,
        MockStorageProvider::default(),
        document.clone(),
        feed,
    );
    (platform, document)
}
