//! Status line widget for displaying panel state information.
//!
//! The status line shows:
//! - Current mode (NORMAL, EDIT)
//! - Media name (or "[No Input]" without an input session)
//! - Playback position
//! - Focused column
//! - Current row (row/total)
//!
//! Example status line: `NORMAL | movie.mkv | 00:01:23 [Time]              2/5`

use crate::controller::InputController;
use crate::panel::BookmarksPanel;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the status line.
pub fn render_status_line<C: InputController>(
    f: &mut Frame,
    area: Rect,
    panel: &BookmarksPanel<C>,
    colors: &ThemeColors,
) {
    let default_style = Style::default()
        .fg(colors.status_line_fg)
        .bg(colors.status_line_bg);
    let column_style = Style::default().fg(colors.info).bg(colors.status_line_bg);

    let media = panel
        .media_name()
        .unwrap_or_else(|| "[No Input]".to_string());
    let mut left = format!("{} | {}", panel.mode(), media);
    if let Some(position) = panel.playback_position() {
        left.push_str(&format!(" | {}", position));
    }
    let column = format!(" [{}]", panel.column());

    let table = panel.table();
    let row = table.current().map(|r| r + 1).unwrap_or(0);
    let position = format!("{}/{}", row, table.len());

    let total_width = area.width as usize;
    let left_len = left.chars().count() + column.chars().count();
    let padding = if left_len + position.len() + 1 < total_width {
        total_width - left_len - position.len()
    } else {
        1
    };

    let line = Line::from(vec![
        Span::styled(left, default_style),
        Span::styled(column, column_style),
        Span::styled(" ".repeat(padding), default_style),
        Span::styled(position, default_style),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmark::SeekPoint;
    use crate::controller::MemoryInput;
    use crate::theme;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn status_text<C: InputController>(panel: &BookmarksPanel<C>) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = theme::get_builtin_theme("default-dark").unwrap();

        terminal
            .draw(|f| {
                let area = f.area();
                render_status_line(f, area, panel, &theme.colors);
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_status_line_no_input() {
        let panel = BookmarksPanel::new(MemoryInput::without_input());
        let text = status_text(&panel);
        assert!(text.contains("[No Input]"), "status: {}", text);
        assert!(text.contains("0/0"));
    }

    #[test]
    fn test_status_line_with_media() {
        let input = MemoryInput::new("movie.mkv", 600_000_000).with_bookmarks(vec![
            SeekPoint::new("a", 0, 0),
            SeekPoint::new("b", 0, 0),
        ]);
        let mut panel = BookmarksPanel::new(input);
        panel.move_down();
        panel.move_down();

        let text = status_text(&panel);
        assert!(text.starts_with("NORMAL | movie.mkv | 00:00:0"), "status: {}", text);
        assert!(text.contains("[Description]"));
        assert!(text.contains("2/2"));
    }
}
