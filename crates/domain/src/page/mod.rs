//! Essay page chrome: theme, reading time, progress, and section tracking

mod progress;
mod reading;
mod sections;
mod theme;

pub use progress::progress_percent;
pub use reading::{reading_time_label, reading_time_minutes, WORDS_PER_MINUTE};
pub use sections::{
    active_section, scroll_target, SectionNavigator, SectionOffset, StepDirection,
    ACTIVE_SECTION_LEAD_PX, NAV_SCROLL_OFFSET_PX, TOC_SCROLL_OFFSET_PX,
};
pub use theme::Theme;
