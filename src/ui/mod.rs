use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::app::App;

pub mod colors;
pub mod themes;
pub mod util;
pub mod widgets;

pub use colors::Colors;
pub use themes::Theme;

const HEADER_ROWS: u16 = 3;
const TOOLBAR_ROWS: u16 = 3;
const FOOTER_ROWS: u16 = 3;
// Table border (2) plus its column header row.
const TABLE_CHROME_ROWS: u16 = 3;

/// Number of item rows the table can show in a terminal `height` rows tall.
pub fn table_viewport_rows(height: u16) -> usize {
    height.saturating_sub(HEADER_ROWS + TOOLBAR_ROWS + FOOTER_ROWS + TABLE_CHROME_ROWS) as usize
}

/// Draw the whole screen for `app`.
pub fn ui(f: &mut Frame, app: &App) {
    let colors = Colors::from_theme(&app.palette);
    let area = f.area();
    f.render_widget(Block::default().style(colors.base_style), area);

    // header, toolbar, table (rest), footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_ROWS),
            Constraint::Length(TOOLBAR_ROWS),
            Constraint::Min(0),
            Constraint::Length(FOOTER_ROWS),
        ])
        .split(area);

    widgets::header::render(f, chunks[0], app, &colors);
    widgets::toolbar::render(f, chunks[1], app, &colors);
    widgets::item_table::render(f, chunks[2], app, &colors);
    widgets::footer::render(f, chunks[3], app, &colors);

    // Overlays
    if let Some(draft) = app.dialog.draft() {
        widgets::item_form::render(f, area, &app.dialog, draft, &colors);
    }
    if let (Some(id), Some(choice)) = (app.delete.pending(), app.delete.choice()) {
        widgets::confirm_dialog::render(f, area, app.store.get(id), choice, &colors);
    }
}
