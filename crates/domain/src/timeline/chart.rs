//! Data-series choices for the (placeholder) trends panel

use std::fmt;

/// A data series the trends panel can be asked to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSeries {
    Tuition,
    Debt,
    Borrowers,
}

impl ChartSeries {
    pub const ALL: [ChartSeries; 3] = [ChartSeries::Tuition, ChartSeries::Debt, ChartSeries::Borrowers];

    /// Series key, as used in the placeholder text
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartSeries::Tuition => "tuition",
            ChartSeries::Debt => "debt",
            ChartSeries::Borrowers => "borrowers",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            ChartSeries::Tuition => "Tuition Costs",
            ChartSeries::Debt => "Total Debt",
            ChartSeries::Borrowers => "Number of Borrowers",
        }
    }

    /// Placeholder paragraphs shown once this series is selected
    pub fn placeholder_lines(&self) -> [String; 2] {
        [
            format!(
                "This would display the {} chart in a real implementation.",
                self.as_str()
            ),
            "The chart would show trends from 1965 to present day.".to_string(),
        ]
    }
}

impl fmt::Display for ChartSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
