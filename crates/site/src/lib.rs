//! Debtline site crate.
//!
//! Interactivity for the student-debt essay: the interactive timeline widget
//! (Dioxus) plus the page glue for theme, progress, reading time, and section
//! tracking. Builds for the browser (wasm32) and as a native desktop preview
//! of the widget; the target is selected at compile time.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod state;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use ui::app;
pub use ui::{use_platform, ShellKind};
