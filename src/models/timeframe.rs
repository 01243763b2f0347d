//! Lookback windows offered by the comparison view

use std::fmt;

/// The fixed set of lookback windows a comparison can be run over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ComparisonWindow {
    #[default]
    Week,
    Month,
    Year,
    FiveYears,
}

impl ComparisonWindow {
    pub const ALL: [ComparisonWindow; 4] = [
        ComparisonWindow::Week,
        ComparisonWindow::Month,
        ComparisonWindow::Year,
        ComparisonWindow::FiveYears,
    ];

    /// Parse a window label such as `1 month` (case and spacing insensitive)
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        Self::ALL.into_iter().find(|w| w.label() == normalized)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComparisonWindow::Week => "1 week",
            ComparisonWindow::Month => "1 month",
            ComparisonWindow::Year => "1 year",
            ComparisonWindow::FiveYears => "5 years",
        }
    }

    /// Number of days requested from the provider
    pub fn days(&self) -> u32 {
        match self {
            ComparisonWindow::Week => 7,
            ComparisonWindow::Month => 30,
            ComparisonWindow::Year => 365,
            // 365 days per year, no leap adjustment
            ComparisonWindow::FiveYears => 1825,
        }
    }

    /// Comma separated list of accepted labels, for usage messages
    pub fn labels() -> String {
        Self::ALL
            .iter()
            .map(|w| format!("`{}`", w.label()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ComparisonWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
