pub mod bookmark_table;
pub mod buttons;
pub mod edit_prompt;
pub mod help_overlay;
/// Screen layout and mouse hit-testing.
pub mod layout;
pub mod message_area;
pub mod status_line;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::controller::InputController;
use crate::panel::BookmarksPanel;
use crate::theme::Theme;
use bookmark_table::TableView;
use layout::PanelLayout;

/// Main UI structure that manages the terminal interface rendering.
///
/// The screen is composed of:
/// - Button column (left): Create, Delete, Clear
/// - Bookmarks table (right) with the Close button beneath it
/// - Status line: mode, media, playback position and current row
/// - Message area (bottom): messages, key hints, or the edit prompt
///
/// # Example
///
/// ```
/// use seekquill::ui::UI;
/// use seekquill::theme::get_builtin_theme;
///
/// let theme = get_builtin_theme("default-dark").unwrap();
/// let ui = UI::new(theme);
/// assert_eq!(ui.theme_name(), "default-dark");
/// ```
pub struct UI {
    theme: Theme,
    alternating_rows: bool,
}

impl UI {
    /// Creates a new UI instance with the specified theme.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            alternating_rows: true,
        }
    }

    /// Enables or disables shading of every other table row.
    pub fn with_alternating_rows(mut self, enabled: bool) -> Self {
        self.alternating_rows = enabled;
        self
    }

    /// Returns the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    /// Renders the panel to the terminal.
    ///
    /// Scrolls the table so the current row stays visible before drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend, C: InputController>(
        &self,
        terminal: &mut Terminal<B>,
        panel: &mut BookmarksPanel<C>,
    ) -> Result<()> {
        terminal.draw(|f| {
            let layout = PanelLayout::new(f.area());
            let colors = &self.theme.colors;

            let viewport_height = layout.table_viewport_height();
            panel.adjust_scroll(viewport_height);

            buttons::render_buttons(f, &layout, colors, panel.media_name().is_some());

            let view = TableView {
                column: panel.column(),
                scroll_offset: panel.scroll_offset(),
                viewport_height,
                alternating_rows: self.alternating_rows,
            };
            bookmark_table::render_bookmark_table(f, layout.table, panel.table(), view, colors);

            status_line::render_status_line(f, layout.status, panel, colors);

            if let Some(edit) = panel.cell_edit() {
                edit_prompt::render_edit_prompt(f, layout.message, edit, colors);
            } else {
                message_area::render_message_area(f, layout.message, panel, colors);
            }

            if panel.show_help() {
                help_overlay::render_help_overlay(f, colors);
            }
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmark::SeekPoint;
    use crate::controller::MemoryInput;
    use crate::theme::get_builtin_theme;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_ui_with_light_theme() {
        let theme = get_builtin_theme("default-light").unwrap();
        let ui = UI::new(theme).with_alternating_rows(false);
        assert_eq!(ui.theme_name(), "default-light");
    }

    #[test]
    fn test_render_panel() {
        let ui = UI::new(get_builtin_theme("default-dark").unwrap());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        let input = MemoryInput::new("movie.mkv", 600_000_000)
            .with_bookmarks(vec![SeekPoint::new("movie.mkv_0", 1_250_000, 5_000_000)]);
        let mut panel = BookmarksPanel::new(input);

        ui.render(&mut terminal, &mut panel).unwrap();

        let text = screen_text(&terminal);
        for label in ["Create", "Delete", "Clear", "Close"] {
            assert!(text.contains(label), "missing button {}", label);
        }
        assert!(text.contains("movie.mkv_0"));
        assert!(text.contains("1250000"));
        assert!(text.contains("00:00:05"));
    }

    #[test]
    fn test_render_edit_prompt_replaces_message_area() {
        let ui = UI::new(get_builtin_theme("nord").unwrap());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        let input = MemoryInput::new("clip", 600_000_000)
            .with_bookmarks(vec![SeekPoint::new("first", 0, 0)]);
        let mut panel = BookmarksPanel::new(input);
        panel.move_down();
        assert!(panel.begin_edit());

        ui.render(&mut terminal, &mut panel).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Description: first"));
    }

    #[test]
    fn test_render_help_overlay() {
        let ui = UI::new(get_builtin_theme("dracula").unwrap());
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut panel = BookmarksPanel::new(MemoryInput::without_input());
        panel.toggle_help();

        ui.render(&mut terminal, &mut panel).unwrap();

        assert!(screen_text(&terminal).contains("SeekQuill Help"));
    }
}
