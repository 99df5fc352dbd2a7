//! Reading-time estimate

/// Average adult reading speed used for the estimate
pub const WORDS_PER_MINUTE: usize = 250;

/// Minutes needed to read `text`, rounded up.
///
/// Any non-empty text takes at least one minute.
///
/// # Examples
/// ```
/// use debtline_domain::reading_time_minutes;
///
/// assert_eq!(reading_time_minutes("a few words"), 1);
/// assert_eq!(reading_time_minutes(&"word ".repeat(251)), 2);
/// assert_eq!(reading_time_minutes("   "), 0);
/// ```
pub fn reading_time_minutes(text: &str) -> usize {
    text.split_whitespace().count().div_ceil(WORDS_PER_MINUTE)
}

/// Display string for the reading-time badge, e.g. `"7 min read"`
pub fn reading_time_label(minutes: usize) -> String {
    format!("{minutes} min read")
}
