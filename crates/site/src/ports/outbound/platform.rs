//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Application/presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`, not here.

use std::{future::Future, pin::Pin};

use debtline_domain::{Rect, Theme, Viewport};

use super::FetchError;

/// Time operations abstraction
pub trait TimeProvider: Clone + 'static {
    /// Get current time in milliseconds since epoch
    fn now_millis(&self) -> u64;
}

/// Async sleep abstraction
///
/// Used by deferred widget work (tooltip pass, section scroll) so UI code
/// needs no `#[cfg]` branches.
pub trait SleepProvider: Clone + 'static {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

/// Persistent storage abstraction (localStorage/file-based)
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Host document operations: geometry reads, scrolling, theme attribute.
///
/// Every method is a silent no-op (or `None`) when the element it needs is
/// absent; desktop has no host document at all.
pub trait DocumentProvider: Clone + 'static {
    /// Bounding box of the element with this id
    fn element_rect(&self, element_id: &str) -> Option<Rect>;

    /// Current viewport size
    fn viewport(&self) -> Viewport;

    /// Smoothly scroll an element's content horizontally by `delta_x` pixels
    fn scroll_element_by(&self, element_id: &str, delta_x: f64);

    /// Smoothly scroll the page so a section's top meets the viewport top.
    ///
    /// Returns false when no element has this id.
    fn scroll_section_into_view(&self, section_id: &str) -> bool;

    /// Whether the system color scheme asks for dark mode
    fn prefers_dark_scheme(&self) -> bool;

    /// Apply the theme to the page
    fn apply_theme(&self, theme: Theme);
}

/// Timeline feed retrieval
pub trait FeedProvider: Clone + 'static {
    /// Fetch the raw feed document from `location` (URL or path)
    fn fetch_text(
        &self,
        location: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, FetchError>> + 'static>>;
}

/// Storage key constants
///
/// These are kept in the ports layer as they define the contract for
/// what keys are used across the application.
pub mod storage_keys {
    /// Theme preference; the host page's inline script reads the same key
    pub const THEME: &str = "theme";
}
