//! Host essay page glue
//!
//! Attaches behavior to elements the static page already contains. Browser
//! only: the desktop preview has no host page.

#[cfg(target_arch = "wasm32")]
mod glue;

#[cfg(target_arch = "wasm32")]
pub use glue::{container_feed_url, install};
