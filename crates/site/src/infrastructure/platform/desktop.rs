//! Desktop platform implementations
//!
//! Provides platform-specific implementations for the desktop preview using
//! the standard library and native crates. There is no host essay page on
//! desktop, so document operations are inert.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};
use std::{future::Future, pin::Pin};

use debtline_domain::{Rect, Theme, Viewport};
use directories::ProjectDirs;

use crate::ports::outbound::{
    DocumentProvider, FeedProvider, FetchError, SleepProvider, StorageProvider, TimeProvider,
};
use crate::state::Platform;

/// Desktop time provider using std::time
#[derive(Clone, Default)]
pub struct DesktopTimeProvider;

impl TimeProvider for DesktopTimeProvider {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Desktop storage provider with file-based persistence
///
/// Backs the preview window's theme preference. Values live in a flat JSON
/// object under the platform config directory (`.../debtline/storage.json`)
/// and every write rewrites the whole file.
#[derive(Clone)]
pub struct DesktopStorageProvider {
    storage_path: PathBuf,
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopStorageProvider {
    /// Storage in the platform config directory, or the working directory
    /// when no home is available
    pub fn new() -> Self {
        let storage_path = ProjectDirs::from("org", "debtline", "debtline")
            .map(|dirs| dirs.config_dir().join("storage.json"))
            .unwrap_or_else(|| PathBuf::from("debtline_storage.json"));
        Self::at_path(storage_path)
    }

    /// Storage backed by `storage_path`; a missing or unreadable file starts empty
    pub fn at_path(storage_path: PathBuf) -> Self {
        let snapshot = read_snapshot(&storage_path);
        tracing::debug!(path = %storage_path.display(), entries = snapshot.len(), "Desktop storage opened");

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(snapshot)),
        }
    }

    /// Apply `change` to the cache, then flush it to disk
    fn update(&self, change: impl FnOnce(&mut HashMap<String, String>)) {
        let snapshot = match self.cache.write() {
            Ok(mut guard) => {
                change(&mut guard);
                guard.clone()
            }
            Err(e) => {
                tracing::error!(error = %e, "Desktop storage lock poisoned");
                return;
            }
        };

        if let Err(e) = write_snapshot(&self.storage_path, &snapshot) {
            tracing::error!(path = %self.storage_path.display(), error = %e, "Failed to persist desktop storage");
        }
    }
}

fn read_snapshot(path: &Path) -> HashMap<String, String> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => return HashMap::new(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read storage file");
            return HashMap::new();
        }
    };

    serde_json::from_str(&data).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "Ignoring corrupt storage file");
        HashMap::new()
    })
}

fn write_snapshot(path: &Path, snapshot: &HashMap<String, String>) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let data = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, data)
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) {
        self.update(|map| {
            map.insert(key.to_string(), value.to_string());
        });
    }

    fn load(&self, key: &str) -> Option<String> {
        self.cache.read().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        self.update(|map| {
            map.remove(key);
        });
    }
}

/// Desktop document provider
///
/// The preview window has no host page: geometry is unknown and scrolls are
/// logged only.
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider;

impl DocumentProvider for DesktopDocumentProvider {
    fn element_rect(&self, _element_id: &str) -> Option<Rect> {
        None
    }

    fn viewport(&self) -> Viewport {
        Viewport::default()
    }

    fn scroll_element_by(&self, element_id: &str, delta_x: f64) {
        tracing::debug!(element_id, delta_x, "Horizontal scroll requested (no-op on desktop)");
    }

    fn scroll_section_into_view(&self, section_id: &str) -> bool {
        tracing::debug!(section_id, "Section scroll requested (no host page on desktop)");
        false
    }

    fn prefers_dark_scheme(&self) -> bool {
        false
    }

    fn apply_theme(&self, theme: Theme) {
        tracing::debug!(theme = %theme, "Theme change ignored on desktop");
    }
}

/// Desktop sleep provider using tokio timer
#[derive(Clone, Default)]
pub struct DesktopSleepProvider;

impl SleepProvider for DesktopSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        })
    }
}

/// Desktop feed provider
///
/// `http://` and `https://` locations are fetched with reqwest; anything else
/// is treated as a file path.
#[derive(Clone, Default)]
pub struct DesktopFeedProvider {
    client: reqwest::Client,
}

impl FeedProvider for DesktopFeedProvider {
    fn fetch_text(
        &self,
        location: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, FetchError>> + 'static>> {
        let client = self.client.clone();
        let location = location.to_string();

        Box::pin(async move {
            match url::Url::parse(&location) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {
                    let response = client
                        .get(url)
                        .send()
                        .await
                        .map_err(|e| FetchError::Network(e.to_string()))?;

                    let status = response.status();
                    if !status.is_success() {
                        return Err(FetchError::Status(status.as_u16()));
                    }

                    response
                        .text()
                        .await
                        .map_err(|e| FetchError::Network(e.to_string()))
                }
                Ok(url) if url.scheme() == "file" => {
                    let path = url
                        .to_file_path()
                        .map_err(|()| FetchError::Network(format!("bad file url: {location}")))?;
                    tokio::fs::read_to_string(&path)
                        .await
                        .map_err(|e| FetchError::Network(format!("{}: {e}", path.display())))
                }
                _ => tokio::fs::read_to_string(&location)
                    .await
                    .map_err(|e| FetchError::Network(format!("{location}: {e}"))),
            }
        })
    }
}

/// Create platform services for desktop
pub fn create_platform() -> Platform {
    Platform::new(
        DesktopTimeProvider,
        DesktopSleepProvider,
        DesktopStorageProvider::new(),
        DesktopDocumentProvider,
        DesktopFeedProvider::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::ThemeService;

    #[test]
    fn storage_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let storage = DesktopStorageProvider::at_path(path.clone());
        storage.save("theme", "dark");

        let reopened = DesktopStorageProvider::at_path(path);
        assert_eq!(reopened.load("theme").as_deref(), Some("dark"));

        reopened.remove("theme");
        assert_eq!(reopened.load("theme"), None);
    }

    #[test]
    fn corrupt_storage_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let storage = DesktopStorageProvider::at_path(path);
        assert_eq!(storage.load("theme"), None);
    }

    #[test]
    fn preview_theme_toggle_survives_a_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut service =
            ThemeService::new(DesktopStorageProvider::at_path(path.clone()), DesktopDocumentProvider);
        assert_eq!(service.current(), Theme::Light);
        assert_eq!(service.toggle(), Theme::Dark);

        let reopened = ThemeService::new(DesktopStorageProvider::at_path(path), DesktopDocumentProvider);
        assert_eq!(reopened.current(), Theme::Dark);
    }

    #[tokio::test]
    async fn feed_provider_reads_local_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.json");
        fs::write(&path, r#"{"events":[]}"#).unwrap();

        let provider = DesktopFeedProvider::default();
        let body = provider
            .fetch_text(path.to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(body, r#"{"events":[]}"#);
    }

    #[tokio::test]
    async fn missing_local_feed_is_a_network_error() {
        let provider = DesktopFeedProvider::default();
        let result = provider.fetch_text("/definitely/not/here.json").await;
        assert!(matches!(result, Err(FetchError::Network(_))));
    }
}
