use crate::panel::edit::CellEdit;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the cell edit prompt, `"<Column>: "` followed by the buffer with a
/// block cursor.
pub fn render_edit_prompt(f: &mut Frame, area: Rect, edit: &CellEdit, colors: &ThemeColors) {
    let text_style = Style::default()
        .fg(colors.foreground)
        .bg(colors.background)
        .add_modifier(Modifier::BOLD);

    let chars: Vec<char> = edit.buffer().chars().collect();
    let cursor_pos = edit.cursor().min(chars.len());
    let before: String = chars.iter().take(cursor_pos).collect();
    let after: String = chars.iter().skip(cursor_pos + 1).collect();
    let char_at_cursor = chars.get(cursor_pos).copied().unwrap_or(' ');

    let mut spans = vec![
        Span::styled(format!("{}: ", edit.column()), text_style),
        Span::styled(before, text_style),
        Span::styled(
            char_at_cursor.to_string(),
            Style::default()
                .fg(colors.background)
                .bg(colors.cursor)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if !after.is_empty() {
        spans.push(Span::styled(after, text_style));
    }

    let prompt = Paragraph::new(Line::from(spans)).style(Style::default().bg(colors.background));
    f.render_widget(prompt, area);
}
