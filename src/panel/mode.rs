//! Panel mode for modal editing.
//!
//! The panel is in `Normal` mode for navigation and button actions, and in
//! `Edit` mode while the edit prompt for a cell is open.
//!
//! # Example
//!
//! ```
//! use seekquill::panel::mode::PanelMode;
//!
//! let mode = PanelMode::default();
//! assert_eq!(mode, PanelMode::Normal);
//! assert_eq!(format!("{}", PanelMode::Edit), "EDIT");
//! ```

use std::fmt;

/// Represents the current mode of the bookmarks panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelMode {
    /// Navigation, selection and button actions.
    #[default]
    Normal,
    /// A cell is being edited in the prompt.
    Edit,
}

impl fmt::Display for PanelMode {
    /// Formats the mode as an uppercase string for the status line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelMode::Normal => write!(f, "NORMAL"),
            PanelMode::Edit => write!(f, "EDIT"),
        }
    }
}
