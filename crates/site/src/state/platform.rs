//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates all platform-specific service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in infrastructure/platform/desktop.rs or wasm.rs
//! - Injected into Dioxus context by the runner
//! - Accessed in UI via `use_platform()`

use std::{future::Future, pin::Pin, sync::Arc};

use debtline_domain::{Rect, Theme, Viewport};

use crate::ports::outbound::{
    DocumentProvider, FeedPort, FeedProvider, FetchError, SleepProvider, StorageProvider,
    TimeProvider,
};

/// Unified platform services container
///
/// Provides all platform abstractions through a single injectable type.
#[derive(Clone)]
pub struct Platform {
    time: Arc<dyn TimeProviderDyn>,
    sleep: Arc<dyn SleepProviderDyn>,
    storage: Arc<dyn StorageProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
    feed: Arc<dyn FeedProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait TimeProviderDyn: Send + Sync {
    fn now_millis(&self) -> u64;
}

trait SleepProviderDyn: Send + Sync {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

trait StorageProviderDyn: Send + Sync {
    fn save(&self, key: &str, value: &str);
    fn load(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

trait DocumentProviderDyn: Send + Sync {
    fn element_rect(&self, element_id: &str) -> Option<Rect>;
    fn viewport(&self) -> Viewport;
    fn scroll_element_by(&self, element_id: &str, delta_x: f64);
    fn scroll_section_into_view(&self, section_id: &str) -> bool;
    fn prefers_dark_scheme(&self) -> bool;
    fn apply_theme(&self, theme: Theme);
}

trait FeedProviderDyn: Send + Sync {
    fn fetch_text(
        &self,
        location: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, FetchError>> + 'static>>;
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: TimeProvider + Send + Sync> TimeProviderDyn for T {
    fn now_millis(&self) -> u64 {
        TimeProvider::now_millis(self)
    }
}

impl<T: SleepProvider + Send + Sync> SleepProviderDyn for T {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        SleepProvider::sleep_ms(self, ms)
    }
}

impl<T: StorageProvider + Send + Sync> StorageProviderDyn for T {
    fn save(&self, key: &str, value: &str) {
        StorageProvider::save(self, key, value)
    }
    fn load(&self, key: &str) -> Option<String> {
        StorageProvider::load(self, key)
    }
    fn remove(&self, key: &str) {
        StorageProvider::remove(self, key)
    }
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn element_rect(&self, element_id: &str) -> Option<Rect> {
        DocumentProvider::element_rect(self, element_id)
    }
    fn viewport(&self) -> Viewport {
        DocumentProvider::viewport(self)
    }
    fn scroll_element_by(&self, element_id: &str, delta_x: f64) {
        DocumentProvider::scroll_element_by(self, element_id, delta_x)
    }
    fn scroll_section_into_view(&self, section_id: &str) -> bool {
        DocumentProvider::scroll_section_into_view(self, section_id)
    }
    fn prefers_dark_scheme(&self) -> bool {
        DocumentProvider::prefers_dark_scheme(self)
    }
    fn apply_theme(&self, theme: Theme) {
        DocumentProvider::apply_theme(self, theme)
    }
}

impl<T: FeedProvider + Send + Sync> FeedProviderDyn for T {
    fn fetch_text(
        &self,
        location: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, FetchError>> + 'static>> {
        FeedProvider::fetch_text(self, location)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<Tm, Sl, S, D, F>(time: Tm, sleep: Sl, storage: S, document: D, feed: F) -> Self
    where
        Tm: TimeProvider + Send + Sync,
        Sl: SleepProvider + Send + Sync,
        S: StorageProvider + Send + Sync,
        D: DocumentProvider + Send + Sync,
        F: FeedProvider + Send + Sync,
    {
        Self {
            time: Arc::new(time),
            sleep: Arc::new(sleep),
            storage: Arc::new(storage),
            document: Arc::new(document),
            feed: Arc::new(feed),
        }
    }

    // -------------------------------------------------------------------------
    // Time operations
    // -------------------------------------------------------------------------

    /// Get current time in milliseconds since epoch
    pub fn now_millis(&self) -> u64 {
        self.time.now_millis()
    }

    // -------------------------------------------------------------------------
    // Sleep operations
    // -------------------------------------------------------------------------

    /// Sleep for the given number of milliseconds.
    pub fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        self.sleep.sleep_ms(ms)
    }

    // -------------------------------------------------------------------------
    // Storage operations
    // -------------------------------------------------------------------------

    /// Save a string value with the given key
    pub fn storage_save(&self, key: &str, value: &str) {
        self.storage.save(key, value)
    }

    /// Load a string value by key, returns None if not found
    pub fn storage_load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    /// Remove a value by key
    pub fn storage_remove(&self, key: &str) {
        self.storage.remove(key)
    }

    /// Get a StorageProvider adapter for use with application services
    pub fn storage_adapter(&self) -> PlatformStorageAdapter {
        PlatformStorageAdapter {
            platform: self.clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    /// Bounding box of the element with this id
    pub fn element_rect(&self, element_id: &str) -> Option<Rect> {
        self.document.element_rect(element_id)
    }

    /// Current viewport size
    pub fn viewport(&self) -> Viewport {
        self.document.viewport()
    }

    /// Smoothly scroll an element's content horizontally
    pub fn scroll_element_by(&self, element_id: &str, delta_x: f64) {
        self.document.scroll_element_by(element_id, delta_x)
    }

    /// Smoothly scroll a section to the viewport top; false if it does not exist
    pub fn scroll_section_into_view(&self, section_id: &str) -> bool {
        self.document.scroll_section_into_view(section_id)
    }

    /// Whether the system color scheme asks for dark mode
    pub fn prefers_dark_scheme(&self) -> bool {
        self.document.prefers_dark_scheme()
    }

    /// Apply the theme to the page
    pub fn apply_theme(&self, theme: Theme) {
        self.document.apply_theme(theme)
    }

    /// Get a DocumentProvider adapter for use with application services
    pub fn document_adapter(&self) -> PlatformDocumentAdapter {
        PlatformDocumentAdapter {
            platform: self.clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Feed operations
    // -------------------------------------------------------------------------

    /// Fetch the raw timeline feed
    pub fn fetch_feed_text(
        &self,
        location: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, FetchError>> + 'static>> {
        self.feed.fetch_text(location)
    }
}

// =============================================================================
// Adapters for application services
// =============================================================================

/// Adapter that allows application services to use Platform's storage
///
/// This implements the StorageProvider port trait, delegating to Platform's
/// internal storage.
#[derive(Clone)]
pub struct PlatformStorageAdapter {
    platform: Platform,
}

impl StorageProvider for PlatformStorageAdapter {
    fn save(&self, key: &str, value: &str) {
        self.platform.storage_save(key, value)
    }

    fn load(&self, key: &str) -> Option<String> {
        self.platform.storage_load(key)
    }

    fn remove(&self, key: &str) {
        self.platform.storage_remove(key)
    }
}

/// Adapter that allows application services to use Platform's document access
#[derive(Clone)]
pub struct PlatformDocumentAdapter {
    platform: Platform,
}

impl DocumentProvider for PlatformDocumentAdapter {
    fn element_rect(&self, element_id: &str) -> Option<Rect> {
        self.platform.element_rect(element_id)
    }

    fn viewport(&self) -> Viewport {
        self.platform.viewport()
    }

    fn scroll_element_by(&self, element_id: &str, delta_x: f64) {
        self.platform.scroll_element_by(element_id, delta_x)
    }

    fn scroll_section_into_view(&self, section_id: &str) -> bool {
        self.platform.scroll_section_into_view(section_id)
    }

    fn prefers_dark_scheme(&self) -> bool {
        self.platform.prefers_dark_scheme()
    }

    fn apply_theme(&self, theme: Theme) {
        self.platform.apply_theme(theme)
    }
}

// =============================================================================
// FeedPort implementation - lets services hold the platform as Arc<dyn FeedPort>
// =============================================================================

impl FeedPort for Platform {
    fn fetch_feed(
        &self,
        location: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, FetchError>> + 'static>> {
        self.fetch_feed_text(location)
    }
}
