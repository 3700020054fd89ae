use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::app::{App, Item};
use crate::ui::Colors;

/// Marker prefixed to the name of low-stock items.
pub const LOW_STOCK_MARKER: &str = "! ";

const COLUMNS: [&str; 5] = ["Name", "Category", "Quantity", "Price", "Description"];

/// Tables narrower than this drop the Description column.
pub const DESCRIPTION_MIN_WIDTH: u16 = 64;

fn item_row<'a>(item: &'a Item, colors: &Colors, with_description: bool) -> Row<'a> {
    let (marker, style) = if item.is_low_stock() {
        (
            Span::styled(LOW_STOCK_MARKER, colors.low_stock_marker_style),
            colors.low_stock_row_style,
        )
    } else {
        (Span::raw("  "), colors.row_style)
    };
    let mut cells = vec![
        Cell::from(Line::from(vec![marker, Span::raw(item.name.as_str())])),
        Cell::from(item.category.as_str()),
        Cell::from(item.quantity.to_string()),
        Cell::from(item.price_label()),
    ];
    if with_description {
        cells.push(Cell::from(item.description.as_str()));
    }
    Row::new(cells).style(style)
}

/// The filtered, sorted inventory. Low-stock rows are tinted and marked.
pub fn render(f: &mut Frame, area: Rect, app: &App, colors: &Colors) {
    let items = app.visible();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Items ({}) ", items.len()))
        .style(colors.base_style);

    if items.is_empty() {
        let empty = Paragraph::new("No items to show. Press [a] to add one.")
            .style(colors.footer_style)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let with_description = area.width >= DESCRIPTION_MIN_WIDTH;
    let columns = if with_description { &COLUMNS[..] } else { &COLUMNS[..4] };
    let header = Row::new(columns.iter().copied()).style(colors.table_header_style);
    let rows: Vec<Row> = items
        .iter()
        .map(|item| item_row(item, colors, with_description))
        .collect();
    let widths = if with_description {
        vec![
            Constraint::Percentage(24),
            Constraint::Percentage(16),
            Constraint::Length(9),
            Constraint::Length(11),
            Constraint::Min(10),
        ]
    } else {
        vec![
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Length(9),
            Constraint::Length(11),
        ]
    };
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(colors.row_selected_style)
        .highlight_symbol("▶");

    let mut state = TableState::default()
        .with_offset(app.cursor.offset)
        .with_selected(Some(app.cursor.selected.min(items.len() - 1)));
    f.render_stateful_widget(table, area, &mut state);
}
