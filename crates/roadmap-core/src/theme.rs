//! Light/dark display mode.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Key under which the chosen theme is persisted in durable storage.
pub const STORAGE_KEY: &str = "theme";

/// The stored value failed to parse as a theme name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme {0:?}, expected \"light\" or \"dark\"")]
pub struct ParseThemeError(pub String);

/// Display mode for the site. Light is the default; dark is applied only
/// when the persisted value says so.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The value persisted to storage and used in presentation class names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other mode. Applying this twice returns the original theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Interpret a value read from storage: only the exact string `"dark"`
    /// selects dark mode, anything else (including a missing or corrupt
    /// value) falls back to the default.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert!(!Theme::default().is_dark());
    }

    #[test]
    fn double_toggle_is_identity() {
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn round_trips_through_storage_string() {
        assert_eq!(Theme::Light.as_str().parse(), Ok(Theme::Light));
        assert_eq!(Theme::Dark.as_str().parse(), Ok(Theme::Dark));
    }

    #[test]
    fn unknown_values_fail_to_parse() {
        let err = "solarized".parse::<Theme>().unwrap_err();
        assert_eq!(err, ParseThemeError("solarized".to_string()));
    }

    #[test]
    fn stored_value_only_dark_switches_mode() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("garbage")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }
}
