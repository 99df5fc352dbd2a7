//! Section tracking: active-section detection and prev/next navigation

/// A section becomes active this many pixels before its top reaches the viewport top
pub const ACTIVE_SECTION_LEAD_PX: f64 = 100.0;

/// Gap left above a section when jumping to it from the table of contents
pub const TOC_SCROLL_OFFSET_PX: f64 = 60.0;

/// Gap left above a section when stepping with the prev/next buttons
pub const NAV_SCROLL_OFFSET_PX: f64 = 80.0;

/// A page section and its document offset
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

impl SectionOffset {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Id of the section the reader is in.
///
/// That is the last section (in document order) whose top, less
/// [`ACTIVE_SECTION_LEAD_PX`], has been scrolled past.
pub fn active_section(sections: &[SectionOffset], page_y_offset: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| page_y_offset >= s.top - ACTIVE_SECTION_LEAD_PX)
        .last()
        .map(|s| s.id.as_str())
}

/// Window scroll position that leaves `offset` pixels above an element.
///
/// `element_viewport_top` is the element's bounding-box top.
pub fn scroll_target(element_viewport_top: f64, page_y_offset: f64, offset: f64) -> f64 {
    element_viewport_top + page_y_offset - offset
}

/// Direction of a section step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Previous,
    Next,
}

/// Steps through an ordered list of section id prefixes.
///
/// Section ids are matched by prefix so a single entry covers numbered
/// variants (`"crisis"` matches `"crisis-2008"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionNavigator {
    prefixes: Vec<String>,
}

impl SectionNavigator {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Index of the prefix matching `section_id` (longest match wins)
    pub fn position_of(&self, section_id: &str) -> Option<usize> {
        self.prefixes
            .iter()
            .enumerate()
            .filter(|(_, p)| section_id.starts_with(p.as_str()))
            .max_by_key(|(_, p)| p.len())
            .map(|(i, _)| i)
    }

    /// Prefix of the section one step away from `current`.
    ///
    /// With no current section, `Next` goes to the first entry and `Previous`
    /// goes nowhere. Stepping past either end yields `None`.
    ///
    /// # Examples
    /// ```
    /// use debtline_domain::{SectionNavigator, StepDirection};
    ///
    /// let nav = SectionNavigator::new(["intro", "origins", "crisis"]);
    /// assert_eq!(nav.step(Some("origins-1958"), StepDirection::Next), Some("crisis"));
    /// assert_eq!(nav.step(Some("intro"), StepDirection::Previous), None);
    /// assert_eq!(nav.step(None, StepDirection::Next), Some("intro"));
    /// ```
    pub fn step(&self, current: Option<&str>, direction: StepDirection) -> Option<&str> {
        let target = match (current.and_then(|id| self.position_of(id)), direction) {
            (Some(i), StepDirection::Next) => i.checked_add(1)?,
            (Some(i), StepDirection::Previous) => i.checked_sub(1)?,
            (None, StepDirection::Next) => 0,
            (None, StepDirection::Previous) => return None,
        };
        self.prefixes.get(target).map(String::as_str)
    }
}
