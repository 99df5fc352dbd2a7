//! Unified error type for the domain layer

use thiserror::Error;

/// Errors raised when domain invariants cannot be established
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A timeline needs at least one event to define its year range
    #[error("Timeline feed contains no events")]
    EmptyTimeline,

    /// Two feed records share the same identifier
    #[error("Duplicate timeline event id: {0}")]
    DuplicateEventId(String),

    /// Feed years span more than a timeline can mark out
    #[error("Timeline spans {min_year}..={max_year}, wider than {max_span} years")]
    YearSpanTooWide {
        min_year: i32,
        max_year: i32,
        max_span: i64,
    },

    /// A string could not be parsed into a domain value
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
