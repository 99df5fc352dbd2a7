//! Timeline events as supplied by the JSON feed

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Widest year range a feed may cover
pub const MAX_YEAR_SPAN: i64 = 5_000;

/// Category of a timeline event.
///
/// Serialized in lowercase to match the feed (`"legislation"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Legislation,
    Economic,
    Institutional,
}

impl EventType {
    /// All categories in filter display order
    pub const ALL: [EventType; 3] = [
        EventType::Legislation,
        EventType::Economic,
        EventType::Institutional,
    ];

    /// Feed/CSS key for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Legislation => "legislation",
            EventType::Economic => "economic",
            EventType::Institutional => "institutional",
        }
    }

    /// Human-readable filter label
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Legislation => "Policy & Legislation",
            EventType::Economic => "Economic Impacts",
            EventType::Institutional => "Institutional Changes",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legislation" => Ok(Self::Legislation),
            "economic" => Ok(Self::Economic),
            "institutional" => Ok(Self::Institutional),
            other => Err(DomainError::parse(format!("unknown event type: {other}"))),
        }
    }
}

/// A single dated event on the timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: String,
    pub year: i32,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub title: String,
    pub summary: String,
    /// Id of the essay section this event links to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub essay_link: Option<String>,
}

impl TimelineEvent {
    /// Heading shown in the event popup, e.g. `"1958: National Defense Education Act"`
    pub fn heading(&self) -> String {
        format!("{}: {}", self.year, self.title)
    }
}

/// Top-level feed document (`{ "events": [...] }`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimelineFeed {
    pub events: Vec<TimelineEvent>,
}

impl TimelineFeed {
    /// Validate the feed and return its events in chronological order.
    ///
    /// The sort is stable, so events sharing a year keep their feed order.
    ///
    /// # Errors
    /// Returns [`DomainError::EmptyTimeline`] for a feed without events and
    /// [`DomainError::DuplicateEventId`] when an id appears twice, and
    /// [`DomainError::YearSpanTooWide`] when the years cover more than
    /// [`MAX_YEAR_SPAN`].
    pub fn into_sorted_events(self) -> Result<Vec<TimelineEvent>, DomainError> {
        let mut events = self.events;
        if events.is_empty() {
            return Err(DomainError::EmptyTimeline);
        }

        let mut seen = HashSet::with_capacity(events.len());
        for event in &events {
            if !seen.insert(event.id.as_str()) {
                return Err(DomainError::DuplicateEventId(event.id.clone()));
            }
        }

        events.sort_by_key(|e| e.year);

        if let (Some(first), Some(last)) = (events.first(), events.last()) {
            if i64::from(last.year) - i64::from(first.year) > MAX_YEAR_SPAN {
                return Err(DomainError::YearSpanTooWide {
                    min_year: first.year,
                    max_year: last.year,
                    max_span: MAX_YEAR_SPAN,
                });
            }
        }

        Ok(events)
    }
}
