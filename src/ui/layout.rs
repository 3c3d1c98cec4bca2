//! Screen layout of the bookmarks panel and mouse hit-testing.
//!
//! ```text
//! ┌────────┐┌ Bookmarks ───────────────────────────┐
//! │ Create ││ Description        Bytes       Time  │
//! └────────┘│ movie.mkv_0        1250000  00:00:05 │
//! ┌────────┐│                                      │
//! │ Delete ││                                      │
//! └────────┘│                                      │
//! ┌────────┐└──────────────────────────────────────┘
//! │ Clear  │                            ┌─────────┐
//! └────────┘                            │  Close  │
//!                                       └─────────┘
//! NORMAL | movie.mkv | 00:01:23 [Description]    1/3
//! message
//! ```

use crate::panel::table::Column;
use ratatui::layout::{Constraint, Layout, Position, Rect};

/// Width of the button column.
pub const BUTTON_WIDTH: u16 = 12;

/// Column widths of the bookmarks table, in display order.
pub const COLUMN_WIDTHS: [Constraint; 3] = [
    Constraint::Fill(1),
    Constraint::Length(14),
    Constraint::Length(10),
];

/// Space between table columns.
pub const COLUMN_SPACING: u16 = 1;

/// A push button of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Create,
    Delete,
    Clear,
    Close,
}

impl Button {
    /// Text shown on the button.
    pub fn label(self) -> &'static str {
        match self {
            Button::Create => "Create",
            Button::Delete => "Delete",
            Button::Clear => "Clear",
            Button::Close => "Close",
        }
    }
}

/// What lies under a screen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Button(Button),
    /// A table cell; `row` is an index into the bookmark list.
    Cell { row: usize, column: Column },
}

/// Rectangles of every part of the panel for a given terminal area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub create: Rect,
    pub delete: Rect,
    pub clear: Rect,
    pub close: Rect,
    pub table: Rect,
    pub status: Rect,
    pub message: Rect,
}

impl PanelLayout {
    /// Splits `area` into the panel's regions.
    pub fn new(area: Rect) -> Self {
        let [main, status, message] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let [buttons, right] =
            Layout::horizontal([Constraint::Length(BUTTON_WIDTH), Constraint::Min(1)]).areas(main);

        let [create, delete, clear, _] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(buttons);

        let [table, close_row] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).areas(right);
        let [_, close] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(BUTTON_WIDTH)])
                .areas(close_row);

        Self {
            create,
            delete,
            clear,
            close,
            table,
            status,
            message,
        }
    }

    /// Area inside the table border.
    fn table_inner(&self) -> Rect {
        Rect {
            x: self.table.x.saturating_add(1),
            y: self.table.y.saturating_add(1),
            width: self.table.width.saturating_sub(2),
            height: self.table.height.saturating_sub(2),
        }
    }

    /// Number of bookmark rows that fit under the table header.
    pub fn table_viewport_height(&self) -> usize {
        usize::from(self.table_inner().height.saturating_sub(1))
    }

    /// Horizontal extents of the three table columns.
    pub fn column_areas(&self) -> [Rect; 3] {
        Layout::horizontal(COLUMN_WIDTHS)
            .spacing(COLUMN_SPACING)
            .areas(self.table_inner())
    }

    /// Finds the button or cell at `(x, y)`, 0-based.
    ///
    /// `scroll_offset` is the first visible bookmark and `row_count` the
    /// number of rows; clicks below the last row hit nothing.
    pub fn hit_test(&self, x: u16, y: u16, scroll_offset: usize, row_count: usize) -> Option<Hit> {
        let position = Position::new(x, y);

        let buttons = [
            (self.create, Button::Create),
            (self.delete, Button::Delete),
            (self.clear, Button::Clear),
            (self.close, Button::Close),
        ];
        if let Some((_, button)) = buttons.iter().find(|(rect, _)| rect.contains(position)) {
            return Some(Hit::Button(*button));
        }

        let inner = self.table_inner();
        let first_row_y = inner.y.saturating_add(1);
        if !inner.contains(position) || y < first_row_y {
            return None;
        }

        let row = scroll_offset + usize::from(y - first_row_y);
        if row >= row_count {
            return None;
        }

        let column = self
            .column_areas()
            .iter()
            .position(|rect| x >= rect.x && x < rect.x.saturating_add(rect.width))
            .and_then(Column::from_index)?;

        Some(Hit::Cell { row, column })
    }
}
