//! Help overlay for displaying keybindings.

use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j/k / ↓/↑", "Move to next/previous bookmark"),
            ("J/K", "Extend selection down/up"),
            ("Space", "Toggle current bookmark in selection"),
            ("g / Home", "First bookmark"),
            ("G / End", "Last bookmark"),
            ("h/l / Tab", "Previous/next column"),
        ],
    ),
    (
        "Bookmarks",
        &[
            ("c", "Create a bookmark at the playback position"),
            ("d / Del", "Delete the current bookmark"),
            ("D", "Delete all bookmarks"),
            ("e / i / F2", "Edit the focused cell of a selected bookmark"),
            ("Enter", "Seek playback to the current bookmark"),
            ("Ctrl-r", "Reload bookmarks"),
        ],
    ),
    (
        "Edit prompt",
        &[
            ("Enter", "Apply"),
            ("Esc", "Cancel"),
            ("Ctrl-a/Ctrl-e", "Start/end of line"),
            ("Ctrl-k", "Delete to end of line"),
        ],
    ),
    (
        "Other",
        &[
            ("q / Esc", "Close"),
            ("? / F1", "Toggle this help"),
        ],
    ),
];

/// Renders a centered help overlay listing keybindings.
pub fn render_help_overlay(f: &mut Frame, colors: &ThemeColors) {
    let area = centered_rect(70, 80, f.area());

    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" SeekQuill Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.info))
        .style(Style::default().bg(colors.background));

    let mut help_text = Vec::new();
    for (title, bindings) in SECTIONS {
        help_text.push(Line::from(""));
        help_text.push(Line::from(vec![Span::styled(
            *title,
            Style::default()
                .fg(colors.header)
                .add_modifier(Modifier::BOLD),
        )]));
        for (keys, action) in bindings.iter() {
            help_text.push(Line::from(vec![
                Span::styled(format!("  {:<16}", keys), Style::default().fg(colors.bytes)),
                Span::raw(*action),
            ]));
        }
    }
    help_text.push(Line::from(""));
    help_text.push(Line::from(vec![Span::styled(
        "F1, ? or Esc to close",
        Style::default()
            .fg(colors.info)
            .add_modifier(Modifier::ITALIC),
    )]));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}

/// Helper function to create a centered rect using up certain percentage of the available rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
