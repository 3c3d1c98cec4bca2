use ratatui::style::Color;
use seekquill::theme::{
    colors::ThemeColors, get_builtin_theme, list_builtin_themes, resolve_theme,
};

// Tests for get_builtin_theme function

#[test]
fn test_default_dark_theme_exists() {
    assert!(get_builtin_theme("default-dark").is_some());
}

#[test]
fn test_default_light_theme_exists() {
    assert!(get_builtin_theme("default-light").is_some());
}

#[test]
fn test_invalid_theme_returns_none() {
    assert!(get_builtin_theme("nonexistent").is_none());
}

#[test]
fn test_every_listed_theme_loads() {
    for name in list_builtin_themes() {
        let theme = get_builtin_theme(&name).unwrap();
        assert_eq!(theme.name, name);
    }
}

#[test]
fn test_theme_list_is_sorted() {
    let themes = list_builtin_themes();
    let mut sorted = themes.clone();
    sorted.sort();
    assert_eq!(themes, sorted);
    assert_eq!(themes.len(), 5);
}

// Tests for default-dark theme colors

#[test]
fn test_dark_theme_table_colors() {
    let theme = get_builtin_theme("default-dark").unwrap();

    assert_eq!(theme.colors.description, Color::Gray);
    assert_eq!(theme.colors.bytes, Color::Magenta);
    assert_eq!(theme.colors.time, Color::Green);
    assert_eq!(theme.colors.header, Color::LightBlue);
}

#[test]
fn test_dark_theme_ui_colors() {
    let theme = get_builtin_theme("default-dark").unwrap();

    assert_eq!(theme.colors.background, Color::Reset); // Terminal default background
    assert_eq!(theme.colors.foreground, Color::Gray);
    assert_eq!(theme.colors.cursor, Color::LightBlue);
    assert_eq!(theme.colors.status_line_bg, Color::White);
    assert_eq!(theme.colors.status_line_fg, Color::Black);
}

#[test]
fn test_dark_theme_semantic_colors() {
    let colors = ThemeColors::default_dark();

    assert_eq!(colors.error, Color::Red);
    assert_eq!(colors.warning, Color::Yellow);
    assert_eq!(colors.info, Color::LightBlue);
}

// Tests for default-light theme colors

#[test]
fn test_light_theme_background() {
    let colors = ThemeColors::default_light();
    assert_eq!(colors.background, Color::Rgb(250, 250, 250));
    assert_ne!(colors.alternate_row_bg, colors.background);
}

#[test]
fn test_selection_differs_from_background() {
    for name in list_builtin_themes() {
        let colors = get_builtin_theme(&name).unwrap().colors;
        assert_ne!(colors.selection_bg, colors.background, "theme {}", name);
    }
}

// Tests for resolve_theme

#[test]
fn test_resolve_known_theme() {
    let (theme, warning) = resolve_theme("gruvbox-dark");
    assert_eq!(theme.name, "gruvbox-dark");
    assert!(warning.is_none());
}

#[test]
fn test_resolve_unknown_theme_lists_choices() {
    let (theme, warning) = resolve_theme("solarized");
    assert_eq!(theme.name, "default-dark");
    assert_eq!(theme.colors.background, Color::Reset);

    let warning = warning.unwrap();
    assert!(warning.contains("'solarized'"));
    for name in list_builtin_themes() {
        assert!(warning.contains(&name), "missing {} in {}", name, warning);
    }
}
