//! Theme preference model.
//!
//! Light/dark mode plus a color accent, persisted to localStorage by
//! `util::theme` and applied as classes on `<html>`. This module is the
//! pure half: variants, parsing, and toggling.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Light or dark mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted value under the `theme` key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Color accent applied on top of light/dark mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorTheme {
    #[default]
    Default,
    Ocean,
    Eco,
    Warm,
}

impl ColorTheme {
    /// Every selectable accent, in display order.
    pub const ALL: [Self; 4] = [Self::Default, Self::Ocean, Self::Eco, Self::Warm];

    /// Persisted value under the `colorTheme` key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ocean => "ocean",
            Self::Eco => "eco",
            Self::Warm => "warm",
        }
    }

    /// Parse a persisted value.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "default" => Some(Self::Default),
            "ocean" => Some(Self::Ocean),
            "eco" => Some(Self::Eco),
            "warm" => Some(Self::Warm),
            _ => None,
        }
    }

    /// Class applied to `<html>` for this accent.
    #[must_use]
    pub fn class_name(self) -> String {
        format!("theme-{}", self.as_str())
    }

    /// Label shown in the settings picker.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Ocean => "Ocean Blue",
            Self::Eco => "Eco Green",
            Self::Warm => "Warm Gray",
        }
    }
}

/// The process-wide preference pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
    pub color_theme: ColorTheme,
}
