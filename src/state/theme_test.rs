use super::*;

#[test]
fn theme_round_trips_through_persisted_values() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
    assert_eq!(Theme::parse("solarized"), None);
}

#[test]
fn theme_toggle_flips_between_modes() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn color_theme_round_trips_through_persisted_values() {
    for accent in ColorTheme::ALL {
        assert_eq!(ColorTheme::parse(accent.as_str()), Some(accent));
    }
    assert_eq!(ColorTheme::parse(""), None);
}

#[test]
fn color_theme_class_names_are_prefixed() {
    assert_eq!(ColorTheme::Default.class_name(), "theme-default");
    assert_eq!(ColorTheme::Ocean.class_name(), "theme-ocean");
}

#[test]
fn defaults_are_light_and_default_accent() {
    let state = ThemeState::default();
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.color_theme, ColorTheme::Default);
}
