//! Infrastructure layer - platform adapters and host page glue

pub mod page;
pub mod platform;
