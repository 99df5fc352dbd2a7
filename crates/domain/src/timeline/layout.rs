//! Placement of visible events along the timeline

use super::{ActiveFilters, TimelineEvent, YearScale};

/// Events closer than this (in percentage points) to their predecessor get a
/// staggered connector height.
pub const OVERLAP_THRESHOLD_PERCENT: f64 = 5.0;

const STAGGER_BASE_PX: u32 = 30;
const STAGGER_STEP_PX: u32 = 10;

/// Which side of the baseline an event's card sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Above,
    Below,
}

impl Side {
    /// CSS modifier class for this side
    pub fn css_class(&self) -> &'static str {
        match self {
            Side::Above => "event-top",
            Side::Below => "event-bottom",
        }
    }
}

/// Where a visible event is drawn
#[derive(Debug, Clone, PartialEq)]
pub struct EventPlacement<'a> {
    pub event: &'a TimelineEvent,
    pub left_percent: f64,
    pub side: Side,
    /// Connector height override for events crowding their predecessor
    pub stagger_height_px: Option<u32>,
}

/// Filter and place events.
///
/// Sides alternate by index in the filtered list (even above, odd below).
/// When an event sits within [`OVERLAP_THRESHOLD_PERCENT`] of the previous
/// visible event its height cycles through three sizes, keyed on how many
/// events have been placed on its side so far. This is a cheap heuristic and
/// does not guarantee cards never overlap.
pub fn layout_events<'a>(
    events: &'a [TimelineEvent],
    filters: &ActiveFilters,
    scale: &YearScale,
) -> Vec<EventPlacement<'a>> {
    let mut above = 0u32;
    let mut below = 0u32;
    let mut previous_left: Option<f64> = None;

    events
        .iter()
        .filter(|e| filters.is_enabled(e.event_type))
        .enumerate()
        .map(|(index, event)| {
            let left_percent = scale.position_percent(event.year);

            let (side, side_count) = if index % 2 == 0 {
                above += 1;
                (Side::Above, above)
            } else {
                below += 1;
                (Side::Below, below)
            };

            let stagger_height_px = previous_left
                .filter(|prev| (left_percent - prev).abs() < OVERLAP_THRESHOLD_PERCENT)
                .map(|_| STAGGER_BASE_PX + (side_count % 3) * STAGGER_STEP_PX);

            previous_left = Some(left_percent);

            EventPlacement {
                event,
                left_percent,
                side,
                stagger_height_px,
            }
        })
        .collect()
}
