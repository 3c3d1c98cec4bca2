//! Display rows and the selection model of the bookmarks table.
//!
//! Rows are plain text; they are rebuilt from the controller's list on every
//! refresh and never carry an identity back to it. A row's position is the
//! only link to the controller's bookmark at the same index.

use crate::bookmark::time::format_time;
use crate::bookmark::SeekPoint;
use std::fmt;

/// A column of the bookmarks table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Bookmark name.
    Description,
    /// Byte offset.
    Bytes,
    /// Time offset as `HH:MM:SS`.
    Time,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; 3] = [Column::Description, Column::Bytes, Column::Time];

    /// Returns the column at `index` in display order.
    pub fn from_index(index: usize) -> Option<Column> {
        Self::ALL.get(index).copied()
    }

    /// Position of this column in display order.
    pub fn index(self) -> usize {
        match self {
            Column::Description => 0,
            Column::Bytes => 1,
            Column::Time => 2,
        }
    }

    /// Header label.
    pub fn title(self) -> &'static str {
        match self {
            Column::Description => "Description",
            Column::Bytes => "Bytes",
            Column::Time => "Time",
        }
    }

    /// The column to the right, wrapping around.
    pub fn next(self) -> Column {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The column to the left, wrapping around.
    pub fn previous(self) -> Column {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The three display strings of one bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkRow {
    cells: [String; 3],
}

impl BookmarkRow {
    /// Renders a seek point into display text.
    pub fn from_seek_point(point: &SeekPoint) -> Self {
        Self {
            cells: [
                point.name.clone(),
                point.byte_offset.to_string(),
                format_time(point.time_offset),
            ],
        }
    }

    /// Text of the given cell.
    pub fn cell(&self, column: Column) -> &str {
        &self.cells[column.index()]
    }

    /// Replaces the text of the given cell.
    pub fn set_cell(&mut self, column: Column, text: impl Into<String>) {
        self.cells[column.index()] = text.into();
    }
}

/// Rows plus the current row and an ordered, extended selection.
///
/// The selection remembers insertion order: the last entry is the
/// last-selected row, the only one whose cells may be committed.
#[derive(Debug, Clone, Default)]
pub struct BookmarkTable {
    rows: Vec<BookmarkRow>,
    current: Option<usize>,
    selection: Vec<usize>,
}

impl BookmarkTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in order.
    pub fn rows(&self) -> &[BookmarkRow] {
        &self.rows
    }

    /// Row at `index`.
    pub fn row(&self, index: usize) -> Option<&BookmarkRow> {
        self.rows.get(index)
    }

    /// Replaces one cell's text. Returns false if the row does not exist.
    pub fn set_cell(&mut self, row: usize, column: Column, text: impl Into<String>) -> bool {
        match self.rows.get_mut(row) {
            Some(r) => {
                r.set_cell(column, text);
                true
            }
            None => false,
        }
    }

    /// Removes every row.
    ///
    /// The current row index is kept so that a following
    /// [`replace_rows`](Self::replace_rows) can restore it.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.selection.clear();
    }

    /// Replaces all rows, clamping the current row to the new length and
    /// making it the only selected row.
    pub fn replace_rows(&mut self, rows: Vec<BookmarkRow>) {
        self.rows = rows;
        self.current = match self.current {
            _ if self.rows.is_empty() => None,
            Some(index) => Some(index.min(self.rows.len() - 1)),
            None => None,
        };
        self.selection = self.current.into_iter().collect();
    }

    /// The focused row, if any.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Selected rows in the order they were selected.
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// The most recently selected row.
    pub fn last_selected(&self) -> Option<usize> {
        self.selection.last().copied()
    }

    /// Returns true if `row` is selected.
    pub fn is_selected(&self, row: usize) -> bool {
        self.selection.contains(&row)
    }

    /// Focuses `row` and makes it the only selected row.
    ///
    /// Out-of-range rows are ignored.
    pub fn select(&mut self, row: usize) {
        if row < self.rows.len() {
            self.current = Some(row);
            self.selection = vec![row];
        }
    }

    /// Focuses `row` and appends it to the selection.
    pub fn extend_to(&mut self, row: usize) {
        if row < self.rows.len() {
            self.current = Some(row);
            self.selection.retain(|&r| r != row);
            self.selection.push(row);
        }
    }

    /// Toggles the focused row in the selection.
    pub fn toggle_current(&mut self) {
        let Some(row) = self.current else {
            return;
        };
        if self.is_selected(row) {
            self.selection.retain(|&r| r != row);
        } else {
            self.selection.push(row);
        }
    }

    /// Row below the current one, or the first row when nothing is focused.
    pub fn next_row(&self) -> Option<usize> {
        match self.current {
            _ if self.rows.is_empty() => None,
            Some(row) => Some((row + 1).min(self.rows.len() - 1)),
            None => Some(0),
        }
    }

    /// Row above the current one, or the first row when nothing is focused.
    pub fn previous_row(&self) -> Option<usize> {
        match self.current {
            _ if self.rows.is_empty() => None,
            Some(row) => Some(row.saturating_sub(1)),
            None => Some(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(n: usize) -> BookmarkTable {
        let mut table = BookmarkTable::new();
        table.replace_rows(
            (0..n)
                .map(|i| BookmarkRow::from_seek_point(&SeekPoint::new(format!("b{}", i), 0, 0)))
                .collect(),
        );
        table
    }

    #[test]
    fn test_row_from_seek_point() {
        let row = BookmarkRow::from_seek_point(&SeekPoint::new("x", 2048, 3_661_000_000));
        assert_eq!(row.cell(Column::Description), "x");
        assert_eq!(row.cell(Column::Bytes), "2048");
        assert_eq!(row.cell(Column::Time), "01:01:01");
    }

    #[test]
    fn test_column_cycle() {
        assert_eq!(Column::Description.next(), Column::Bytes);
        assert_eq!(Column::Time.next(), Column::Description);
        assert_eq!(Column::Description.previous(), Column::Time);
        assert_eq!(Column::from_index(2), Some(Column::Time));
        assert_eq!(Column::from_index(3), None);
    }

    #[test]
    fn test_new_table_has_no_current_row() {
        let table = table_with(3);
        assert_eq!(table.current(), None);
        assert!(table.selection().is_empty());
    }

    #[test]
    fn test_replace_rows_clamps_current() {
        let mut table = table_with(5);
        table.select(4);
        table.replace_rows(table_with(2).rows().to_vec());
        assert_eq!(table.current(), Some(1));
        assert_eq!(table.selection(), &[1]);
    }

    #[test]
    fn test_replace_rows_empty_clears_current() {
        let mut table = table_with(2);
        table.select(0);
        table.replace_rows(Vec::new());
        assert_eq!(table.current(), None);
        assert_eq!(table.last_selected(), None);
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut table = table_with(4);
        table.select(1);
        table.extend_to(2);
        table.extend_to(1);
        assert_eq!(table.selection(), &[2, 1]);
        assert_eq!(table.last_selected(), Some(1));
    }

    #[test]
    fn test_toggle_current() {
        let mut table = table_with(3);
        table.select(0);
        table.toggle_current();
        assert!(table.selection().is_empty());
        table.toggle_current();
        assert_eq!(table.selection(), &[0]);
    }

    #[test]
    fn test_select_out_of_range_ignored() {
        let mut table = table_with(2);
        table.select(5);
        assert_eq!(table.current(), None);
    }

    #[test]
    fn test_next_and_previous_row() {
        let mut table = table_with(3);
        assert_eq!(table.next_row(), Some(0));
        table.select(2);
        assert_eq!(table.next_row(), Some(2));
        assert_eq!(table.previous_row(), Some(1));
        assert_eq!(table_with(0).next_row(), None);
    }
}
