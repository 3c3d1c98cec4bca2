//! Input event handler for polling and processing terminal events.

use super::keys::{map_key_event, InputEvent};
use crate::controller::InputController;
use crate::panel::table::Column;
use crate::panel::BookmarksPanel;
use crate::ui::layout::{Button, Hit, PanelLayout};
use anyhow::{anyhow, Context, Result};
use ratatui::layout::Rect;
use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;
use termion::event::{Event, Key, MouseButton, MouseEvent};
use termion::input::TermRead;

/// Handles terminal input events and drives the bookmarks panel.
///
/// Terminal events are read on a background thread and handed over a
/// channel, so [`poll_event`](Self::poll_event) can give up after a timeout
/// and let the event loop apply bookmark change notifications.
pub struct InputHandler {
    /// Events from the reader thread, started on first poll
    events: Option<Receiver<io::Result<Event>>>,
    /// Screen area used to hit-test mouse clicks
    area: Rect,
    enable_mouse: bool,
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin.
    ///
    /// # Example
    ///
    /// ```
    /// use seekquill::input::InputHandler;
    ///
    /// let handler = InputHandler::new();
    /// ```
    pub fn new() -> Self {
        Self {
            events: None,
            area: Rect::new(0, 0, 80, 24),
            enable_mouse: true,
        }
    }

    /// Enables or disables mouse handling.
    pub fn set_enable_mouse(&mut self, enabled: bool) {
        self.enable_mouse = enabled;
    }

    /// Records the terminal area the panel was last drawn into.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Polls for a terminal event with a timeout.
    ///
    /// Returns Some(Event) if an event occurred, None if timeout elapsed.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the terminal fails or input is closed.
    pub fn poll_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        let events = self.events.get_or_insert_with(spawn_reader);

        match events.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event.context("Failed to read terminal event")?)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(anyhow!("Terminal input closed")),
        }
    }

    /// Handles a terminal event and updates the panel.
    ///
    /// Returns Ok(true) if the panel should close.
    ///
    /// # Example
    ///
    /// ```
    /// use seekquill::controller::MemoryInput;
    /// use seekquill::input::InputHandler;
    /// use seekquill::panel::BookmarksPanel;
    /// use termion::event::{Event, Key};
    ///
    /// let mut handler = InputHandler::new();
    /// let mut panel = BookmarksPanel::new(MemoryInput::without_input());
    /// let should_quit = handler.handle_event(Event::Key(Key::Char('q')), &mut panel).unwrap();
    /// assert!(should_quit);
    /// ```
    pub fn handle_event<C: InputController>(
        &mut self,
        event: Event,
        panel: &mut BookmarksPanel<C>,
    ) -> Result<bool> {
        if panel.show_help() {
            if matches!(
                event,
                Event::Key(Key::Char('?')) | Event::Key(Key::F(1)) | Event::Key(Key::Esc)
            ) {
                panel.toggle_help();
            }
            return Ok(false);
        }

        if let Event::Mouse(mouse_event) = event {
            if self.enable_mouse {
                return Ok(self.handle_mouse(mouse_event, panel));
            }
            return Ok(false);
        }

        let input = map_key_event(event, panel.mode());
        Ok(self.dispatch(input, panel))
    }

    fn handle_mouse<C: InputController>(
        &mut self,
        mouse_event: MouseEvent,
        panel: &mut BookmarksPanel<C>,
    ) -> bool {
        match mouse_event {
            MouseEvent::Press(MouseButton::WheelUp, _, _) => {
                panel.move_up();
                false
            }
            MouseEvent::Press(MouseButton::WheelDown, _, _) => {
                panel.move_down();
                false
            }
            MouseEvent::Press(MouseButton::Left, x, y) => {
                // termion reports 1-based coordinates
                let layout = PanelLayout::new(self.area);
                let hit = layout.hit_test(
                    x.saturating_sub(1),
                    y.saturating_sub(1),
                    panel.scroll_offset(),
                    panel.table().len(),
                );
                match hit {
                    Some(Hit::Button(button)) => self.press(button, panel),
                    Some(Hit::Cell { row, column }) => {
                        self.click_cell(row, column, panel);
                        false
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }

    /// Clicking an already selected row opens its cell for editing.
    fn click_cell<C: InputController>(
        &self,
        row: usize,
        column: Column,
        panel: &mut BookmarksPanel<C>,
    ) {
        if panel.cell_edit().is_some() {
            return;
        }
        let table = panel.table();
        let already_selected = table.current() == Some(row) && table.is_selected(row);

        panel.set_column(column);
        if already_selected {
            panel.begin_edit();
        } else {
            panel.select_row(row);
        }
    }

    fn press<C: InputController>(&self, button: Button, panel: &mut BookmarksPanel<C>) -> bool {
        match button {
            Button::Create => panel.create(),
            Button::Delete => panel.delete(),
            Button::Clear => panel.clear_all(),
            Button::Close => return true,
        }
        false
    }

    fn dispatch<C: InputController>(
        &mut self,
        input: InputEvent,
        panel: &mut BookmarksPanel<C>,
    ) -> bool {
        match input {
            InputEvent::Close => return self.press(Button::Close, panel),
            InputEvent::Create => {
                self.press(Button::Create, panel);
            }
            InputEvent::Delete => {
                self.press(Button::Delete, panel);
            }
            InputEvent::Clear => {
                self.press(Button::Clear, panel);
            }
            InputEvent::Extract => panel.extract(),
            InputEvent::MoveDown => panel.move_down(),
            InputEvent::MoveUp => panel.move_up(),
            InputEvent::ExtendDown => panel.extend_down(),
            InputEvent::ExtendUp => panel.extend_up(),
            InputEvent::JumpToTop => panel.move_to_top(),
            InputEvent::JumpToBottom => panel.move_to_bottom(),
            InputEvent::ToggleSelection => panel.toggle_selection(),
            InputEvent::NextColumn => panel.next_column(),
            InputEvent::PreviousColumn => panel.previous_column(),
            InputEvent::BeginEdit => {
                panel.begin_edit();
            }
            InputEvent::Activate => panel.activate_current(),
            InputEvent::Refresh => panel.refresh(),
            InputEvent::Help => panel.toggle_help(),
            InputEvent::ExitMode => panel.cancel_edit(),
            InputEvent::InsertEnter => panel.commit_edit(),
            InputEvent::InsertCharacter(c) => {
                if let Some(edit) = panel.cell_edit_mut() {
                    edit.insert(c);
                }
            }
            InputEvent::InsertBackspace => {
                if let Some(edit) = panel.cell_edit_mut() {
                    edit.backspace();
                }
            }
            InputEvent::InsertDelete => {
                if let Some(edit) = panel.cell_edit_mut() {
                    edit.delete();
                }
            }
            InputEvent::CursorLeft => {
                if let Some(edit) = panel.cell_edit_mut() {
                    edit.left();
                }
            }
            InputEvent::CursorRight => {
                if let Some(edit) = panel.cell_edit_mut() {
                    edit.right();
                }
            }
            InputEvent::CursorHome => {
                if let Some(edit) = panel.cell_edit_mut() {
                    edit.home();
                }
            }
            InputEvent::CursorEnd => {
                if let Some(edit) = panel.cell_edit_mut() {
                    edit.end();
                }
            }
            InputEvent::KillToEnd => {
                if let Some(edit) = panel.cell_edit_mut() {
                    edit.kill_to_end();
                }
            }
            InputEvent::Unknown => {}
        }
        false
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn spawn_reader() -> Receiver<io::Result<Event>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for event in io::stdin().events() {
            if tx.send(event).is_err() {
                break;
            }
        }
    });
    rx
}
