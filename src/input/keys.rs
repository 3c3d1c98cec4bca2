//! Keyboard event mapping and input event types.

use crate::panel::mode::PanelMode;
use termion::event::{Event, Key};

/// High-level input events abstracted from raw keyboard input.
///
/// These events represent user intentions (close, create, move cursor)
/// rather than specific key presses, allowing for mode-specific keybindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Close the panel
    Close,
    /// Move to the next bookmark
    MoveDown,
    /// Move to the previous bookmark
    MoveUp,
    /// Extend the selection downward
    ExtendDown,
    /// Extend the selection upward
    ExtendUp,
    /// Jump to the first bookmark
    JumpToTop,
    /// Jump to the last bookmark
    JumpToBottom,
    /// Toggle the current bookmark in the selection
    ToggleSelection,
    /// Focus the next column
    NextColumn,
    /// Focus the previous column
    PreviousColumn,
    /// Bookmark the playback position
    Create,
    /// Delete the current bookmark
    Delete,
    /// Delete every bookmark
    Clear,
    /// Extract the selected range
    Extract,
    /// Open the edit prompt on the focused cell
    BeginEdit,
    /// Seek to the current bookmark
    Activate,
    /// Re-read the bookmark list
    Refresh,
    /// Toggle help overlay
    Help,
    /// Leave edit mode without applying
    ExitMode,
    /// Insert a character in edit mode
    InsertCharacter(char),
    /// Backspace in edit mode
    InsertBackspace,
    /// Delete at the edit cursor
    InsertDelete,
    /// Apply the edit
    InsertEnter,
    /// Move the edit cursor left
    CursorLeft,
    /// Move the edit cursor right
    CursorRight,
    /// Move the edit cursor to the start
    CursorHome,
    /// Move the edit cursor to the end
    CursorEnd,
    /// Delete from the edit cursor to the end
    KillToEnd,
    /// Unknown or unmapped key
    Unknown,
}

/// Maps a termion Event to an InputEvent based on the current panel mode.
///
/// # Example
///
/// ```
/// use termion::event::{Event, Key};
/// use seekquill::panel::mode::PanelMode;
/// use seekquill::input::keys::{map_key_event, InputEvent};
///
/// let event = Event::Key(Key::Char('j'));
/// assert_eq!(map_key_event(event, PanelMode::Normal), InputEvent::MoveDown);
/// ```
pub fn map_key_event(event: Event, mode: PanelMode) -> InputEvent {
    let key = match event {
        Event::Key(k) => k,
        _ => return InputEvent::Unknown,
    };

    match mode {
        PanelMode::Normal => match key {
            Key::Ctrl('r') => InputEvent::Refresh,
            Key::Char('q') | Key::Esc => InputEvent::Close,
            Key::Char('j') | Key::Down => InputEvent::MoveDown,
            Key::Char('k') | Key::Up => InputEvent::MoveUp,
            Key::Char('J') => InputEvent::ExtendDown,
            Key::Char('K') => InputEvent::ExtendUp,
            Key::Char('g') | Key::Home => InputEvent::JumpToTop,
            Key::Char('G') | Key::End => InputEvent::JumpToBottom,
            Key::Char(' ') => InputEvent::ToggleSelection,
            Key::Char('l') | Key::Right | Key::Char('\t') => InputEvent::NextColumn,
            Key::Char('h') | Key::Left | Key::BackTab => InputEvent::PreviousColumn,
            Key::Char('c') => InputEvent::Create,
            Key::Char('d') | Key::Delete => InputEvent::Delete,
            Key::Char('D') => InputEvent::Clear,
            Key::Char('x') => InputEvent::Extract,
            Key::Char('e') | Key::Char('i') | Key::F(2) => InputEvent::BeginEdit,
            Key::Char('\n') => InputEvent::Activate,
            Key::Char('?') | Key::F(1) => InputEvent::Help,
            _ => InputEvent::Unknown,
        },
        PanelMode::Edit => match key {
            Key::Esc => InputEvent::ExitMode,
            Key::Char('\n') => InputEvent::InsertEnter,
            Key::Backspace => InputEvent::InsertBackspace,
            Key::Delete | Key::Ctrl('d') => InputEvent::InsertDelete,
            Key::Left => InputEvent::CursorLeft,
            Key::Right => InputEvent::CursorRight,
            Key::Home | Key::Ctrl('a') => InputEvent::CursorHome,
            Key::End | Key::Ctrl('e') => InputEvent::CursorEnd,
            Key::Ctrl('k') => InputEvent::KillToEnd,
            Key::Char(c) => InputEvent::InsertCharacter(c),
            _ => InputEvent::Unknown,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_mode_close() {
        assert_eq!(
            map_key_event(Event::Key(Key::Char('q')), PanelMode::Normal),
            InputEvent::Close
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Esc), PanelMode::Normal),
            InputEvent::Close
        );
    }

    #[test]
    fn test_normal_mode_movement() {
        assert_eq!(
            map_key_event(Event::Key(Key::Char('j')), PanelMode::Normal),
            InputEvent::MoveDown
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Up), PanelMode::Normal),
            InputEvent::MoveUp
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char('\t')), PanelMode::Normal),
            InputEvent::NextColumn
        );
    }

    #[test]
    fn test_edit_mode_takes_characters() {
        assert_eq!(
            map_key_event(Event::Key(Key::Char('q')), PanelMode::Edit),
            InputEvent::InsertCharacter('q')
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char(':')), PanelMode::Edit),
            InputEvent::InsertCharacter(':')
        );
    }

    #[test]
    fn test_edit_mode_exit() {
        assert_eq!(
            map_key_event(Event::Key(Key::Esc), PanelMode::Edit),
            InputEvent::ExitMode
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char('\n')), PanelMode::Edit),
            InputEvent::InsertEnter
        );
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            map_key_event(Event::Key(Key::Char('z')), PanelMode::Normal),
            InputEvent::Unknown
        );
    }
}
