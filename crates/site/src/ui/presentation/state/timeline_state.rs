//! Timeline widget state
//!
//! The widget itself lives in a signal so every command re-renders the
//! component that reads it.

use dioxus::prelude::*;

use crate::application::timeline::{TimelineLoad, TimelineWidget, WidgetCell};

#[derive(Clone, Copy)]
pub struct TimelineState {
    pub load: Signal<TimelineLoad>,
}

impl TimelineState {
    /// Create a new TimelineState in the loading phase
    pub fn new() -> Self {
        Self {
            load: Signal::new(TimelineLoad::Loading),
        }
    }

    pub fn set_ready(&mut self, widget: TimelineWidget) {
        self.load.set(TimelineLoad::Ready(widget));
    }

    pub fn set_failed(&mut self) {
        self.load.set(TimelineLoad::Failed);
    }

    pub fn is_failed(&self) -> bool {
        self.load.read().is_failed()
    }

    /// Run `f` only when `needed` says it would change the widget.
    ///
    /// The check peeks without subscribing, so a no-op command neither takes
    /// the write lock nor marks the strip dirty.
    pub fn update_if(
        &self,
        needed: impl FnOnce(&TimelineWidget) -> bool,
        f: impl FnOnce(&mut TimelineWidget),
    ) {
        let wanted = match &*self.load.peek() {
            TimelineLoad::Ready(widget) => needed(widget),
            TimelineLoad::Loading | TimelineLoad::Failed => false,
        };
        if wanted {
            self.with_widget(f);
        }
    }
}

impl Default for TimelineState {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetCell for TimelineState {
    fn with_widget<R>(&self, f: impl FnOnce(&mut TimelineWidget) -> R) -> Option<R> {
        let mut load = self.load;
        let mut guard = load.write();
        match &mut *guard {
            TimelineLoad::Ready(widget) => Some(f(widget)),
            TimelineLoad::Loading | TimelineLoad::Failed => None,
        }
    }
}

/// Hook to access the TimelineState from context
pub fn use_timeline_state() -> TimelineState {
    use_context::<TimelineState>()
}
