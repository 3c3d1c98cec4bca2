//! Color definitions for seekquill themes.
//!
//! This module defines the [`ThemeColors`] struct which contains all color
//! values used in the seekquill terminal UI. Colors are organized into three
//! categories: table cells, UI elements, and semantic colors.

use ratatui::style::Color;

/// Defines all colors used in a seekquill theme.
///
/// # Examples
///
/// ```
/// use seekquill::theme::colors::ThemeColors;
///
/// let dark = ThemeColors::default_dark();
/// println!("Background: {:?}", dark.background);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Table colors
    /// Color for bookmark descriptions.
    pub description: Color,
    /// Color for byte offsets.
    pub bytes: Color,
    /// Color for time offsets.
    pub time: Color,
    /// Color for column headers.
    pub header: Color,

    // UI colors
    /// Main background color.
    pub background: Color,
    /// Main foreground/text color.
    pub foreground: Color,
    /// Color for the edit cursor and the focused cell.
    pub cursor: Color,
    /// Color for panel borders and buttons.
    pub border: Color,
    /// Background color for the status line.
    pub status_line_bg: Color,
    /// Foreground/text color for the status line.
    pub status_line_fg: Color,
    /// Background of every other table row.
    pub alternate_row_bg: Color,
    /// Background of selected rows.
    pub selection_bg: Color,

    // Semantic colors
    /// Color for error messages.
    pub error: Color,
    /// Color for warning messages.
    pub warning: Color,
    /// Color for informational messages.
    pub info: Color,
}

impl ThemeColors {
    /// Returns the default dark color scheme.
    ///
    /// Uses ANSI colors so the palette follows the terminal's own scheme.
    ///
    /// ```
    /// use seekquill::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_dark();
    /// assert_eq!(colors.background, Color::Reset);
    /// assert_eq!(colors.status_line_bg, Color::White);
    /// ```
    pub fn default_dark() -> Self {
        Self {
            description: Color::Gray,
            bytes: Color::Magenta,
            time: Color::Green,
            header: Color::LightBlue,

            background: Color::Reset,
            foreground: Color::Gray,
            cursor: Color::LightBlue,
            border: Color::DarkGray,
            status_line_bg: Color::White,
            status_line_fg: Color::Black,
            alternate_row_bg: Color::Rgb(28, 28, 28),
            selection_bg: Color::DarkGray,

            error: Color::Red,
            warning: Color::Yellow,
            info: Color::LightBlue,
        }
    }

    /// Returns the default light color scheme.
    ///
    /// ```
    /// use seekquill::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_light();
    /// assert_eq!(colors.background, Color::Rgb(250, 250, 250));
    /// ```
    pub fn default_light() -> Self {
        Self {
            description: Color::Rgb(56, 58, 66),
            bytes: Color::Rgb(152, 104, 1),
            time: Color::Rgb(80, 161, 79),
            header: Color::Rgb(166, 38, 164),

            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(56, 58, 66),
            cursor: Color::Rgb(82, 139, 255),
            border: Color::Rgb(160, 161, 167),
            status_line_bg: Color::Rgb(238, 238, 238),
            status_line_fg: Color::Rgb(56, 58, 66),
            alternate_row_bg: Color::Rgb(240, 240, 240),
            selection_bg: Color::Rgb(220, 220, 220),

            error: Color::Rgb(202, 18, 67),
            warning: Color::Rgb(152, 104, 1),
            info: Color::Rgb(1, 132, 188),
        }
    }

    /// Returns the Gruvbox Dark color scheme.
    pub fn gruvbox_dark() -> Self {
        Self {
            description: Color::Rgb(235, 219, 178), // light fg
            bytes: Color::Rgb(211, 134, 155),       // purple
            time: Color::Rgb(184, 187, 38),         // green
            header: Color::Rgb(251, 184, 108),      // orange

            background: Color::Rgb(40, 40, 40),
            foreground: Color::Rgb(235, 219, 178),
            cursor: Color::Rgb(251, 184, 108),
            border: Color::Rgb(146, 131, 116),
            status_line_bg: Color::Rgb(60, 56, 54),
            status_line_fg: Color::Rgb(235, 219, 178),
            alternate_row_bg: Color::Rgb(50, 48, 47),
            selection_bg: Color::Rgb(80, 73, 69),

            error: Color::Rgb(251, 73, 52),
            warning: Color::Rgb(250, 189, 47),
            info: Color::Rgb(131, 165, 152),
        }
    }

    /// Returns the Nord color scheme.
    pub fn nord() -> Self {
        Self {
            description: Color::Rgb(216, 222, 233), // snow storm
            bytes: Color::Rgb(180, 142, 173),       // aurora purple
            time: Color::Rgb(163, 190, 140),        // aurora green
            header: Color::Rgb(136, 192, 208),      // frost cyan

            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(216, 222, 233),
            cursor: Color::Rgb(136, 192, 208),
            border: Color::Rgb(76, 86, 106),
            status_line_bg: Color::Rgb(59, 66, 82),
            status_line_fg: Color::Rgb(216, 222, 233),
            alternate_row_bg: Color::Rgb(52, 59, 72),
            selection_bg: Color::Rgb(67, 76, 94),

            error: Color::Rgb(191, 97, 106),
            warning: Color::Rgb(235, 203, 139),
            info: Color::Rgb(136, 192, 208),
        }
    }

    /// Returns the Dracula color scheme.
    pub fn dracula() -> Self {
        Self {
            description: Color::Rgb(248, 248, 242), // foreground
            bytes: Color::Rgb(189, 147, 249),       // purple
            time: Color::Rgb(80, 250, 123),         // green
            header: Color::Rgb(139, 233, 253),      // cyan

            background: Color::Rgb(40, 42, 54),
            foreground: Color::Rgb(248, 248, 242),
            cursor: Color::Rgb(255, 121, 198),
            border: Color::Rgb(98, 114, 164),
            status_line_bg: Color::Rgb(68, 71, 90),
            status_line_fg: Color::Rgb(248, 248, 242),
            alternate_row_bg: Color::Rgb(48, 50, 64),
            selection_bg: Color::Rgb(68, 71, 90),

            error: Color::Rgb(255, 85, 85),
            warning: Color::Rgb(241, 250, 140),
            info: Color::Rgb(139, 233, 253),
        }
    }
}
