//! Bookmarks table widget.

use super::layout::{COLUMN_SPACING, COLUMN_WIDTHS};
use crate::panel::table::{BookmarkTable, Column};
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

/// Options that affect how the table is drawn.
#[derive(Debug, Clone, Copy)]
pub struct TableView {
    /// Column the cursor is on.
    pub column: Column,
    /// First visible row.
    pub scroll_offset: usize,
    /// Number of rows that fit.
    pub viewport_height: usize,
    /// Shade every other row.
    pub alternating_rows: bool,
}

/// Renders the three-column bookmarks table with header and border.
///
/// Selected rows get the selection background; the focused cell of the
/// current row is drawn in the cursor color.
pub fn render_bookmark_table(
    f: &mut Frame,
    area: Rect,
    table: &BookmarkTable,
    view: TableView,
    colors: &ThemeColors,
) {
    let header = Row::new(Column::ALL.map(|column| Cell::from(column.title()))).style(
        Style::default()
            .fg(colors.header)
            .add_modifier(Modifier::BOLD),
    );

    let rows = table
        .rows()
        .iter()
        .enumerate()
        .skip(view.scroll_offset)
        .take(view.viewport_height)
        .map(|(index, row)| {
            let is_current = table.current() == Some(index);

            let row_style = if table.is_selected(index) {
                Style::default().bg(colors.selection_bg)
            } else if view.alternating_rows && index % 2 == 1 {
                Style::default().bg(colors.alternate_row_bg)
            } else {
                Style::default().bg(colors.background)
            };

            let cells = Column::ALL.map(|column| {
                let fg = match column {
                    Column::Description => colors.description,
                    Column::Bytes => colors.bytes,
                    Column::Time => colors.time,
                };
                let mut style = Style::default().fg(fg);
                if is_current && column == view.column {
                    style = style
                        .fg(colors.cursor)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                }
                Cell::from(row.cell(column).to_string()).style(style)
            });

            Row::new(cells).style(row_style)
        });

    let title = format!(" Bookmarks ({}) ", table.len());
    let widget = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        )
        .style(Style::default().bg(colors.background).fg(colors.foreground));

    f.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmark::SeekPoint;
    use crate::panel::table::BookmarkRow;
    use crate::theme;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered_text(table: &BookmarkTable) -> String {
        let backend = TestBackend::new(60, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = theme::get_builtin_theme("default-dark").unwrap();
        let view = TableView {
            column: Column::Description,
            scroll_offset: 0,
            viewport_height: 5,
            alternating_rows: true,
        };

        terminal
            .draw(|f| {
                let area = f.area();
                render_bookmark_table(f, area, table, view, &theme.colors);
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
    fn test_renders_header_and_rows() {
        let mut table = BookmarkTable::new();
        table.replace_rows(vec![BookmarkRow::from_seek_point(&SeekPoint::new(
            "opening", 4096, 3_661_000_000,
        ))]);

        let text = rendered_text(&table);
        assert!(text.contains("Description"));
        assert!(text.contains("Bytes"));
        assert!(text.contains("Time"));
        assert!(text.contains("opening"));
        assert!(text.contains("4096"));
        assert!(text.contains("01:01:01"));
    }

    #[test]
    fn test_renders_count_in_title() {
        let table = BookmarkTable::new();
        let text = rendered_text(&table);
        assert!(text.contains("Bookmarks (0)"));
    }
}
