//! Reactive UI state held in Dioxus signals

mod timeline_state;

pub use timeline_state::{use_timeline_state, TimelineState};
