//! Push buttons of the panel.

use super::layout::{Button, PanelLayout};
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders Create, Delete, Clear and Close.
///
/// Without an input session the three bookmark buttons are dimmed; Close is
/// always active.
pub fn render_buttons(f: &mut Frame, layout: &PanelLayout, colors: &ThemeColors, has_input: bool) {
    let buttons = [
        (layout.create, Button::Create),
        (layout.delete, Button::Delete),
        (layout.clear, Button::Clear),
        (layout.close, Button::Close),
    ];

    for (area, button) in buttons {
        let enabled = has_input || button == Button::Close;
        let style = if enabled {
            Style::default().fg(colors.foreground)
        } else {
            Style::default()
                .fg(colors.border)
                .add_modifier(Modifier::DIM)
        };

        let widget = Paragraph::new(button.label())
            .alignment(Alignment::Center)
            .style(style.bg(colors.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors.border)),
            );
        f.render_widget(widget, area);
    }
}
