//! Single-line edit buffer for the cell edit prompt.

use super::table::Column;

/// Text being edited for one table cell, with a character cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEdit {
    row: usize,
    column: Column,
    buffer: String,
    cursor: usize,
}

impl CellEdit {
    /// Opens an edit of `row`/`column` prefilled with `text`, cursor at the end.
    pub fn new(row: usize, column: Column, text: &str) -> Self {
        Self {
            row,
            column,
            buffer: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    /// Row being edited.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column being edited.
    pub fn column(&self) -> Column {
        self.column
    }

    /// Current text.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Consumes the edit and returns its text.
    pub fn into_text(self) -> String {
        self.buffer
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    fn len_chars(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Inserts a character at the cursor.
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.buffer.remove(at);
    }

    /// Deletes the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.len_chars() {
            let at = self.byte_index(self.cursor);
            self.buffer.remove(at);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len_chars());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.len_chars();
    }

    /// Deletes from the cursor to the end of the line.
    pub fn kill_to_end(&mut self) {
        let at = self.byte_index(self.cursor);
        self.buffer.truncate(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_places_cursor_at_end() {
        let edit = CellEdit::new(0, Column::Time, "00:01:30");
        assert_eq!(edit.cursor(), 8);
        assert_eq!(edit.buffer(), "00:01:30");
    }

    #[test]
    fn test_insert_and_backspace_mid_line() {
        let mut edit = CellEdit::new(0, Column::Description, "ac");
        edit.left();
        edit.insert('b');
        assert_eq!(edit.buffer(), "abc");
        edit.backspace();
        assert_eq!(edit.buffer(), "ac");
        assert_eq!(edit.cursor(), 1);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut edit = CellEdit::new(0, Column::Description, "héllo");
        edit.home();
        edit.right();
        edit.delete();
        assert_eq!(edit.buffer(), "hllo");
        edit.insert('é');
        assert_eq!(edit.buffer(), "héllo");
    }

    #[test]
    fn test_kill_to_end() {
        let mut edit = CellEdit::new(0, Column::Bytes, "123456");
        edit.home();
        edit.right();
        edit.right();
        edit.kill_to_end();
        assert_eq!(edit.buffer(), "12");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut edit = CellEdit::new(0, Column::Bytes, "1");
        edit.home();
        edit.backspace();
        assert_eq!(edit.buffer(), "1");
    }
}
