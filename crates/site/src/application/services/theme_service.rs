//! Theme preference management
//!
//! Resolves the initial theme from the stored preference (or the system color
//! scheme) and flips it when the toggle button is pressed.

use debtline_domain::Theme;

use crate::ports::outbound::{storage_keys, DocumentProvider, StorageProvider};

/// Persisted theme preference
pub struct ThemeSettings<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> ThemeSettings<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Raw stored preference, if any
    pub fn stored(&self) -> Option<String> {
        self.storage.load(storage_keys::THEME)
    }

    pub fn save(&self, theme: Theme) {
        self.storage.save(storage_keys::THEME, theme.as_str());
    }

    /// Forget the preference so the system color scheme applies again
    pub fn clear(&self) {
        self.storage.remove(storage_keys::THEME);
    }
}

/// Service owning the page's current theme
///
/// Only an explicit toggle persists a preference; the initial resolution
/// never writes storage.
pub struct ThemeService<S: StorageProvider, D: DocumentProvider> {
    settings: ThemeSettings<S>,
    document: D,
    current: Theme,
}

impl<S: StorageProvider, D: DocumentProvider> ThemeService<S, D> {
    /// Resolve the initial theme and apply it to the page
    pub fn new(storage: S, document: D) -> Self {
        let settings = ThemeSettings::new(storage);
        let current = Theme::resolve(
            settings.stored().as_deref(),
            document.prefers_dark_scheme(),
        );
        document.apply_theme(current);
        tracing::debug!(theme = %current, "Initial theme applied");

        Self {
            settings,
            document,
            current,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme, persist the choice, and apply it
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.settings.save(self.current);
        self.document.apply_theme(self.current);
        tracing::info!(theme = %self.current, "Theme toggled");
        self.current
    }
}
