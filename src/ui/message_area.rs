//! Message area rendering for displaying messages and key hints.

use crate::controller::InputController;
use crate::panel::{BookmarksPanel, MessageLevel};
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HINT: &str = "c create  d delete  D clear  e edit  Enter seek  ? help  q close";

/// Renders the message area at the bottom of the screen.
///
/// Shows the panel's current message, or a key hint when there is none.
pub fn render_message_area<C: InputController>(
    f: &mut Frame,
    area: Rect,
    panel: &BookmarksPanel<C>,
    colors: &ThemeColors,
) {
    let content = match panel.message() {
        Some(message) => {
            let color = match message.level {
                MessageLevel::Error => colors.error,
                MessageLevel::Warning => colors.warning,
                MessageLevel::Info => colors.info,
            };
            Line::from(vec![Span::styled(
                message.text.as_str(),
                Style::default().fg(color),
            )])
        }
        None => Line::from(vec![Span::styled(
            HINT,
            Style::default()
                .fg(colors.border)
                .add_modifier(Modifier::ITALIC),
        )]),
    };

    let paragraph =
        Paragraph::new(content).style(Style::default().bg(colors.background).fg(colors.foreground));

    f.render_widget(paragraph, area);
}
