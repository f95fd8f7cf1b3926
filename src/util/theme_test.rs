#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn load_returns_defaults_without_a_browser() {
    let state = load();
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.color_theme, ColorTheme::Default);
}

#[test]
fn system_theme_defaults_to_light_without_a_browser() {
    assert_eq!(system_theme(), Theme::Light);
}

#[test]
fn apply_and_save_are_noops_but_callable() {
    let state = ThemeState { theme: Theme::Dark, color_theme: ColorTheme::Ocean };
    apply(state);
    save(state);
}
