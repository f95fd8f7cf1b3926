//! Theme initialization, application, and persistence.
//!
//! Reads the preference pair from `localStorage` (falling back to the
//! system color scheme for light/dark) and applies a `dark` class plus a
//! `theme-{accent}` class to `<html>`. Writes happen on every change.
//! Requires a browser environment; native builds return defaults.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::{ColorTheme, Theme, ThemeState};

use super::persist;

/// localStorage key for the light/dark preference.
pub const THEME_KEY: &str = "theme";
/// localStorage key for the color accent.
pub const COLOR_THEME_KEY: &str = "colorTheme";

/// Read the persisted preference pair, with the system color scheme as the
/// light/dark fallback and the default accent otherwise.
#[must_use]
pub fn load() -> ThemeState {
    let theme = persist::load_string(THEME_KEY)
        .and_then(|raw| Theme::parse(&raw))
        .unwrap_or_else(system_theme);
    let color_theme = persist::load_string(COLOR_THEME_KEY)
        .and_then(|raw| ColorTheme::parse(&raw))
        .unwrap_or_default();
    ThemeState { theme, color_theme }
}

/// The operating system's preferred color scheme.
#[must_use]
pub fn system_theme() -> Theme {
    #[cfg(feature = "csr")]
    {
        let prefers_dark = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::Light
    }
}

/// Apply the preference pair as classes on `<html>`.
pub fn apply(state: ThemeState) {
    #[cfg(feature = "csr")]
    {
        let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        let classes = root.class_list();
        match state.theme {
            Theme::Dark => {
                let _ = classes.add_1("dark");
            }
            Theme::Light => {
                let _ = classes.remove_1("dark");
            }
        }
        for accent in ColorTheme::ALL {
            let _ = classes.remove_1(&accent.class_name());
        }
        let _ = classes.add_1(&state.color_theme.class_name());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = state;
    }
}

/// Write both preference keys to `localStorage`.
pub fn save(state: ThemeState) {
    persist::save_string(THEME_KEY, state.theme.as_str());
    persist::save_string(COLOR_THEME_KEY, state.color_theme.as_str());
}
