//! Reusable UI components

pub mod theme_toggle;
pub mod timeline;
