//! Dark/light theme preference

use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Color theme of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored preference value
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Resolve the effective theme from a stored preference, falling back to
    /// the system color scheme when nothing usable is stored.
    ///
    /// # Examples
    /// ```
    /// use debtline_domain::Theme;
    ///
    /// assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
    /// assert_eq!(Theme::resolve(None, true), Theme::Dark);
    /// assert_eq!(Theme::resolve(Some("sepia"), false), Theme::Light);
    /// ```
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        stored
            .and_then(|s| s.parse().ok())
            .unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(DomainError::parse(format!("unknown theme: {other}"))),
        }
    }
}
