//! Category filter state

use super::EventType;

/// Which event categories are currently shown.
///
/// All categories are enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveFilters {
    legislation: bool,
    economic: bool,
    institutional: bool,
}

impl Default for ActiveFilters {
    fn default() -> Self {
        Self {
            legislation: true,
            economic: true,
            institutional: true,
        }
    }
}

impl ActiveFilters {
    /// Whether events of this category are shown
    pub fn is_enabled(&self, event_type: EventType) -> bool {
        match event_type {
            EventType::Legislation => self.legislation,
            EventType::Economic => self.economic,
            EventType::Institutional => self.institutional,
        }
    }

    /// Enable or disable a category
    pub fn set(&mut self, event_type: EventType, enabled: bool) {
        let slot = match event_type {
            EventType::Legislation => &mut self.legislation,
            EventType::Economic => &mut self.economic,
            EventType::Institutional => &mut self.institutional,
        };
        *slot = enabled;
    }

    /// Categories paired with their enabled flag, in display order
    pub fn entries(&self) -> [(EventType, bool); 3] {
        EventType::ALL.map(|t| (t, self.is_enabled(t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_categories_enabled_initially() {
        let filters = ActiveFilters::default();
        assert!(EventType::ALL.iter().all(|t| filters.is_enabled(*t)));
    }

    #[test]
    fn set_only_touches_one_category() {
        let mut filters = ActiveFilters::default();
        filters.set(EventType::Economic, false);

        assert!(filters.is_enabled(EventType::Legislation));
        assert!(!filters.is_enabled(EventType::Economic));
        assert!(filters.is_enabled(EventType::Institutional));

        filters.set(EventType::Economic, true);
        assert_eq!(filters, ActiveFilters::default());
    }

    #[test]
    fn entries_follow_display_order() {
        let mut filters = ActiveFilters::default();
        filters.set(EventType::Institutional, false);
        assert_eq!(
            filters.entries(),
            [
                (EventType::Legislation, true),
                (EventType::Economic, true),
                (EventType::Institutional, false),
            ]
        );
    }
}
