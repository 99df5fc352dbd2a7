//! Linear year-to-percentage scale

use super::TimelineEvent;

/// Horizontal position used when every event shares a single year
const DEGENERATE_POSITION: f64 = 50.0;

/// Upper bound on ticks drawn for a single scale
pub const MAX_DECADE_MARKERS: usize = 1_000;

/// Maps years onto the 0-100% width of the timeline.
///
/// The range is taken from the first and last events of the sorted list, so
/// `position_percent(min_year) == 0.0` and `position_percent(max_year) == 100.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearScale {
    min_year: i32,
    max_year: i32,
}

/// A decade tick on the baseline
#[derive(Debug, Clone, PartialEq)]
pub struct DecadeMarker {
    pub decade: i32,
    pub left_percent: f64,
}

impl DecadeMarker {
    /// Tick label, e.g. `"1970s"`
    pub fn label(&self) -> String {
        format!("{}s", self.decade)
    }
}

impl YearScale {
    /// Build a scale spanning `min_year..=max_year`.
    ///
    /// Arguments are reordered if given backwards.
    pub fn new(min_year: i32, max_year: i32) -> Self {
        Self {
            min_year: min_year.min(max_year),
            max_year: min_year.max(max_year),
        }
    }

    /// Scale spanning a chronologically sorted event list, `None` if empty
    pub fn from_sorted(events: &[TimelineEvent]) -> Option<Self> {
        let first = events.first()?;
        let last = events.last()?;
        Some(Self::new(first.year, last.year))
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    /// Percentage across the timeline for a year.
    ///
    /// Years outside the range extrapolate past 0 or 100. When the range is a
    /// single year every input maps to the midpoint.
    ///
    /// # Examples
    /// ```
    /// use debtline_domain::YearScale;
    ///
    /// let scale = YearScale::new(1950, 2000);
    /// assert_eq!(scale.position_percent(1950), 0.0);
    /// assert_eq!(scale.position_percent(1975), 50.0);
    /// assert_eq!(scale.position_percent(2000), 100.0);
    ///
    /// assert_eq!(YearScale::new(1990, 1990).position_percent(1990), 50.0);
    /// ```
    pub fn position_percent(&self, year: i32) -> f64 {
        let range = i64::from(self.max_year) - i64::from(self.min_year);
        if range == 0 {
            return DEGENERATE_POSITION;
        }
        let offset = i64::from(year) - i64::from(self.min_year);
        offset as f64 / range as f64 * 100.0
    }

    /// One marker per decade from `floor(min/10)*10` to `ceil(max/10)*10` inclusive.
    ///
    /// Decades that do not fit in an `i32` are skipped and at most
    /// [`MAX_DECADE_MARKERS`] are returned.
    pub fn decade_markers(&self) -> Vec<DecadeMarker> {
        let start = i64::from(self.min_year).div_euclid(10) * 10;
        let end = ceil_to_decade(i64::from(self.max_year));

        (start..=end)
            .step_by(10)
            .filter_map(|decade| i32::try_from(decade).ok())
            .take(MAX_DECADE_MARKERS)
            .map(|decade| DecadeMarker {
                decade,
                left_percent: self.position_percent(decade),
            })
            .collect()
    }
}

fn ceil_to_decade(year: i64) -> i64 {
    let floor = year.div_euclid(10) * 10;
    if floor == year {
        year
    } else {
        floor.checked_add(10).unwrap_or(floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_zero_and_hundred() {
        let scale = YearScale::new(1958, 1980);
        assert_eq!(scale.position_percent(1958), 0.0);
        assert_eq!(scale.position_percent(1980), 100.0);
    }

    #[test]
    fn position_is_monotonic_in_year() {
        let scale = YearScale::new(1944, 2022);
        let positions: Vec<f64> = (1944..=2022).map(|y| scale.position_percent(y)).collect();
        assert!(positions.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn reversed_arguments_are_normalized() {
        assert_eq!(YearScale::new(2000, 1950), YearScale::new(1950, 2000));
    }

    #[test]
    fn single_year_range_centers_everything() {
        let scale = YearScale::new(1972, 1972);
        assert_eq!(scale.position_percent(1972), 50.0);
        assert_eq!(scale.position_percent(1970), 50.0);
    }

    #[test]
    fn decade_markers_cover_floor_to_ceil() {
        let scale = YearScale::new(1958, 1980);
        let decades: Vec<i32> = scale.decade_markers().iter().map(|m| m.decade).collect();
        assert_eq!(decades, vec![1950, 1960, 1970, 1980]);
    }

    #[test]
    fn decade_markers_round_partial_end_decade_up() {
        let scale = YearScale::new(1944, 2022);
        let markers = scale.decade_markers();
        assert_eq!(markers.first().map(|m| m.decade), Some(1940));
        assert_eq!(markers.last().map(|m| m.decade), Some(2030));
        assert_eq!(markers.len(), 10);
    }

    #[test]
    fn decade_markers_extrapolate_outside_range() {
        let scale = YearScale::new(1960, 1970);
        let markers = scale.decade_markers();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].left_percent, 0.0);
        assert_eq!(markers[1].left_percent, 100.0);

        let scale = YearScale::new(1955, 1965);
        let markers = scale.decade_markers();
        assert_eq!(markers[0].left_percent, -50.0);
        assert_eq!(markers[0].label(), "1950s");
    }

    #[test]
    fn extreme_years_do_not_overflow() {
        let scale = YearScale::new(-2_000_000_000, 2_000_000_000);
        assert_eq!(scale.position_percent(0), 50.0);
        assert_eq!(scale.position_percent(2_000_000_000), 100.0);

        let scale = YearScale::new(i32::MIN, i32::MAX);
        assert_eq!(scale.position_percent(i32::MIN), 0.0);
        assert_eq!(scale.position_percent(i32::MAX), 100.0);
    }

    #[test]
    fn decade_ceiling_past_i32_max_is_dropped() {
        let markers = YearScale::new(i32::MAX - 13, i32::MAX - 3).decade_markers();
        let decades: Vec<i32> = markers.iter().map(|m| m.decade).collect();
        assert_eq!(decades, vec![2_147_483_630, 2_147_483_640]);
    }

    #[test]
    fn wide_ranges_cap_the_marker_count() {
        let markers = YearScale::new(-2_000_000_000, 2_000_000_000).decade_markers();
        assert_eq!(markers.len(), MAX_DECADE_MARKERS);
        assert_eq!(markers[0].decade, -2_000_000_000);
    }
}
