//! The bookmarks panel: display state plus the operations that forward user
//! intent to an [`InputController`].
//!
//! The panel owns its controller and keeps only display rows. Every operation
//! first checks that an input session is active and silently does nothing
//! otherwise. Controller failures abort the operation without surfacing an
//! error; only a malformed time string is reported.
//!
//! Rows are matched to the controller's bookmarks by position alone. If the
//! list changes between a refresh and an edit, the edit lands on whatever
//! bookmark now sits at that index.
//!
//! # Example
//!
//! ```
//! use seekquill::bookmark::SeekPoint;
//! use seekquill::controller::MemoryInput;
//! use seekquill::panel::BookmarksPanel;
//!
//! let input = MemoryInput::new("movie.mkv", 600_000_000)
//!     .with_bookmarks(vec![SeekPoint::new("intro", 0, 3_661_000_000)]);
//! let panel = BookmarksPanel::new(input);
//! assert_eq!(panel.table().len(), 1);
//! ```

pub mod edit;
pub mod mode;
pub mod table;

use crate::bookmark::parse_byte_offset;
use crate::bookmark::time::{format_time, parse_time};
use crate::controller::InputController;
use edit::CellEdit;
use mode::PanelMode;
use std::sync::mpsc::{self, Receiver};
use table::{BookmarkRow, BookmarkTable, Column};
use tracing::{debug, error};

/// Represents a message to display to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

/// Message severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Editor for the bookmarks of the current media input.
pub struct BookmarksPanel<C: InputController> {
    controller: C,
    table: BookmarkTable,
    column: Column,
    mode: PanelMode,
    edit: Option<CellEdit>,
    message: Option<Message>,
    show_help: bool,
    scroll_offset: usize,
    changes: Receiver<()>,
}

impl<C: InputController> BookmarksPanel<C> {
    /// Creates a panel for `controller`, subscribes to its change
    /// notifications and performs the initial refresh.
    pub fn new(mut controller: C) -> Self {
        let (tx, rx) = mpsc::channel();
        controller.subscribe(Box::new(move || {
            let _ = tx.send(());
        }));

        let mut panel = Self {
            controller,
            table: BookmarkTable::new(),
            column: Column::Description,
            mode: PanelMode::Normal,
            edit: None,
            message: None,
            show_help: false,
            scroll_offset: 0,
            changes: rx,
        };
        panel.refresh();
        panel
    }

    /// The controller this panel drives.
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Mutable access to the controller.
    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }

    /// The displayed rows and selection.
    pub fn table(&self) -> &BookmarkTable {
        &self.table
    }

    /// Applies pending change notifications.
    ///
    /// Refreshes once if at least one notification arrived since the last
    /// call and returns whether it did.
    pub fn sync(&mut self) -> bool {
        let mut changed = false;
        while self.changes.try_recv().is_ok() {
            changed = true;
        }
        if changed {
            self.refresh();
        }
        changed
    }

    /// Rebuilds every row from the controller's current list.
    pub fn refresh(&mut self) {
        if !self.controller.has_input() {
            return;
        }

        self.table.clear();

        let bookmarks = match self.controller.bookmarks() {
            Ok(bookmarks) => bookmarks,
            Err(e) => {
                debug!("refresh: could not read bookmarks: {}", e);
                self.table.replace_rows(Vec::new());
                return;
            }
        };

        let rows = bookmarks.iter().map(BookmarkRow::from_seek_point).collect();
        self.table.replace_rows(rows);
    }

    /// Bookmarks the current playback position.
    ///
    /// The new bookmark is named `<media name>_<row count>`. The table is not
    /// refreshed here; the controller's change notification does that.
    pub fn create(&mut self) {
        if !self.controller.has_input() {
            return;
        }

        let mut bookmark = match self.controller.current_bookmark() {
            Ok(bookmark) => bookmark,
            Err(e) => {
                debug!("create: no current position: {}", e);
                return;
            }
        };
        bookmark.name = format!("{}_{}", self.controller.media_name(), self.table.len());

        if let Err(e) = self.controller.add_bookmark(bookmark) {
            debug!("create: add failed: {}", e);
        }
    }

    /// Deletes the bookmark at the current row.
    pub fn delete(&mut self) {
        if !self.controller.has_input() {
            return;
        }
        let Some(row) = self.table.current() else {
            return;
        };

        if let Err(e) = self.controller.delete_bookmark(row) {
            debug!("delete: row {} failed: {}", row, e);
        }
    }

    /// Deletes every bookmark.
    pub fn clear_all(&mut self) {
        if !self.controller.has_input() {
            return;
        }

        if let Err(e) = self.controller.clear_bookmarks() {
            debug!("clear: failed: {}", e);
        }
    }

    /// Pushes an edited cell to the controller.
    ///
    /// Only the last-selected row may be edited. The controller's list is read
    /// again, the bookmark at `row` is modified according to `column`, and the
    /// single modified bookmark is submitted back. A time that is not `S`,
    /// `M:S` or `H:M:S` is logged and the edit is dropped.
    pub fn edit(&mut self, row: usize, column: Column, text: &str) {
        if self.table.last_selected() != Some(row) {
            return;
        }
        if !self.controller.has_input() {
            return;
        }

        let mut bookmarks = match self.controller.bookmarks() {
            Ok(bookmarks) => bookmarks,
            Err(e) => {
                debug!("edit: could not read bookmarks: {}", e);
                return;
            }
        };
        if row >= bookmarks.len() {
            return;
        }
        let mut bookmark = bookmarks.swap_remove(row);

        match column {
            Column::Description => bookmark.name = text.to_string(),
            Column::Bytes => bookmark.byte_offset = parse_byte_offset(text),
            Column::Time => match parse_time(text) {
                Ok(time_offset) => bookmark.time_offset = time_offset,
                Err(e) => {
                    error!("{}", e);
                    self.set_message(e.to_string(), MessageLevel::Error);
                    return;
                }
            },
        }

        if let Err(e) = self.controller.change_bookmark(row, bookmark) {
            debug!("edit: change of row {} failed: {}", row, e);
        }
    }

    /// Seeks playback to the bookmark at `row`.
    pub fn activate(&mut self, row: usize) {
        if !self.controller.has_input() {
            return;
        }

        if let Err(e) = self.controller.set_bookmark(row) {
            debug!("activate: row {} failed: {}", row, e);
        }
    }

    /// Seeks playback to the bookmark at the current row.
    pub fn activate_current(&mut self) {
        if let Some(row) = self.table.current() {
            self.activate(row);
        }
    }

    /// Exports the selected range of the media. Not implemented.
    pub fn extract(&mut self) {}

    /// Current playback position as `HH:MM:SS`, if the controller knows it.
    pub fn playback_position(&self) -> Option<String> {
        if !self.controller.has_input() {
            return None;
        }
        self.controller
            .current_bookmark()
            .ok()
            .map(|point| format_time(point.time_offset))
    }

    /// Name of the current media, or `None` without an input session.
    pub fn media_name(&self) -> Option<String> {
        self.controller
            .has_input()
            .then(|| self.controller.media_name())
    }

    pub fn mode(&self) -> PanelMode {
        self.mode
    }

    /// Column that edits apply to.
    pub fn column(&self) -> Column {
        self.column
    }

    pub fn set_column(&mut self, column: Column) {
        self.column = column;
    }

    pub fn next_column(&mut self) {
        self.column = self.column.next();
    }

    pub fn previous_column(&mut self) {
        self.column = self.column.previous();
    }

    pub fn move_down(&mut self) {
        if let Some(row) = self.table.next_row() {
            self.table.select(row);
        }
    }

    pub fn move_up(&mut self) {
        if let Some(row) = self.table.previous_row() {
            self.table.select(row);
        }
    }

    pub fn move_to_top(&mut self) {
        self.table.select(0);
    }

    pub fn move_to_bottom(&mut self) {
        if let Some(last) = self.table.len().checked_sub(1) {
            self.table.select(last);
        }
    }

    /// Moves down and adds the new row to the selection.
    pub fn extend_down(&mut self) {
        if let Some(row) = self.table.next_row() {
            self.table.extend_to(row);
        }
    }

    /// Moves up and adds the new row to the selection.
    pub fn extend_up(&mut self) {
        if let Some(row) = self.table.previous_row() {
            self.table.extend_to(row);
        }
    }

    pub fn toggle_selection(&mut self) {
        self.table.toggle_current();
    }

    /// Focuses and solely selects `row`.
    pub fn select_row(&mut self, row: usize) {
        self.table.select(row);
    }

    /// Opens the edit prompt for the current row and column.
    ///
    /// The row must already be selected. Returns true if the prompt opened.
    pub fn begin_edit(&mut self) -> bool {
        let Some(row) = self.table.current() else {
            return false;
        };
        if !self.table.is_selected(row) {
            self.set_message(
                "Select the bookmark before editing".to_string(),
                MessageLevel::Warning,
            );
            return false;
        }
        let Some(text) = self.table.row(row).map(|r| r.cell(self.column).to_string()) else {
            return false;
        };

        self.edit = Some(CellEdit::new(row, self.column, &text));
        self.mode = PanelMode::Edit;
        self.clear_message();
        true
    }

    /// The open cell edit, if any.
    pub fn cell_edit(&self) -> Option<&CellEdit> {
        self.edit.as_ref()
    }

    /// Mutable access to the open cell edit.
    pub fn cell_edit_mut(&mut self) -> Option<&mut CellEdit> {
        self.edit.as_mut()
    }

    /// Writes the edited text into its cell and forwards it with
    /// [`edit`](Self::edit).
    ///
    /// The cell keeps the new text even if the controller rejects the edit;
    /// the next refresh restores it.
    pub fn commit_edit(&mut self) {
        let Some(cell_edit) = self.edit.take() else {
            return;
        };
        self.mode = PanelMode::Normal;

        let row = cell_edit.row();
        let column = cell_edit.column();
        let text = cell_edit.into_text();
        self.table.set_cell(row, column, text.as_str());
        self.edit(row, column, &text);
    }

    /// Closes the edit prompt without changing anything.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
        self.mode = PanelMode::Normal;
        self.set_message("Edit cancelled".to_string(), MessageLevel::Info);
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn set_message(&mut self, text: String, level: MessageLevel) {
        self.message = Some(Message { text, level });
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// First row visible in the table viewport.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Adjusts the scroll offset so the current row is visible in a viewport
    /// of `viewport_height` rows.
    pub fn adjust_scroll(&mut self, viewport_height: usize) {
        let viewport_height = viewport_height.max(1);
        let max_offset = self.table.len().saturating_sub(viewport_height);

        if let Some(row) = self.table.current() {
            if row < self.scroll_offset {
                self.scroll_offset = row;
            } else if row >= self.scroll_offset + viewport_height {
                self.scroll_offset = row + 1 - viewport_height;
            }
        }
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}
