//! Theme system for seekquill.
//!
//! This module provides the theme infrastructure for seekquill, including:
//! - Color definitions ([`colors`] module)
//! - Theme data structure ([`Theme`])
//! - Built-in theme access ([`get_builtin_theme`])
//!
//! # Built-in Themes
//!
//! - `"default-dark"`: A dark theme built on the terminal's ANSI palette
//! - `"default-light"`: A light theme for well-lit environments
//! - `"gruvbox-dark"`: Retro groove color scheme with warm, earthy tones
//! - `"nord"`: Arctic, north-bluish color palette
//! - `"dracula"`: Dark theme with vibrant purples and pinks
//!
//! # Examples
//!
//! ```
//! use seekquill::theme::get_builtin_theme;
//!
//! let theme = get_builtin_theme("default-dark").unwrap();
//! println!("Theme: {}", theme.name);
//! ```

pub mod colors;

use colors::ThemeColors;

/// A color theme for the seekquill terminal UI.
///
/// ```
/// use seekquill::theme::get_builtin_theme;
///
/// let theme = get_builtin_theme("nord").unwrap();
/// assert_eq!(theme.name, "nord");
/// ```
#[derive(Debug, Clone)]
pub struct Theme {
    /// The name of the theme (e.g., "default-dark").
    pub name: String,
    /// The color definitions for this theme.
    pub colors: ThemeColors,
}

/// Returns a built-in theme by name, or `None` if the name is unknown.
///
/// ```
/// use seekquill::theme::get_builtin_theme;
///
/// assert!(get_builtin_theme("default-dark").is_some());
/// assert!(get_builtin_theme("nonexistent").is_none());
/// ```
pub fn get_builtin_theme(name: &str) -> Option<Theme> {
    let colors = match name {
        "default-dark" => ThemeColors::default_dark(),
        "default-light" => ThemeColors::default_light(),
        "gruvbox-dark" => ThemeColors::gruvbox_dark(),
        "nord" => ThemeColors::nord(),
        "dracula" => ThemeColors::dracula(),
        _ => return None,
    };

    Some(Theme {
        name: name.to_string(),
        colors,
    })
}

/// Returns the names of all built-in themes, sorted.
///
/// ```
/// use seekquill::theme::list_builtin_themes;
///
/// let themes = list_builtin_themes();
/// assert!(themes.contains(&"default-dark".to_string()));
/// ```
pub fn list_builtin_themes() -> Vec<String> {
    let mut themes = vec![
        "default-dark".to_string(),
        "default-light".to_string(),
        "dracula".to_string(),
        "gruvbox-dark".to_string(),
        "nord".to_string(),
    ];
    themes.sort();
    themes
}

/// Returns the named built-in theme, or `default-dark` together with a
/// warning that lists the valid names.
///
/// ```
/// use seekquill::theme::resolve_theme;
///
/// let (theme, warning) = resolve_theme("sepia");
/// assert_eq!(theme.name, "default-dark");
/// assert!(warning.unwrap().contains("nord"));
/// ```
pub fn resolve_theme(name: &str) -> (Theme, Option<String>) {
    if let Some(theme) = get_builtin_theme(name) {
        return (theme, None);
    }

    let warning = format!(
        "Theme '{}' not found, using default-dark (available: {})",
        name,
        list_builtin_themes().join(", ")
    );
    let fallback = Theme {
        name: "default-dark".to_string(),
        colors: ThemeColors::default_dark(),
    };
    (fallback, Some(warning))
}
