use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::ui::Colors;

pub const HELP: &str =
    "↑/↓ move  a add  e/Enter edit  d delete  f/F category  s sort  t theme  q quit";

/// Status message when there is one, key help otherwise.
pub fn render(f: &mut Frame, area: Rect, app: &App, colors: &Colors) {
    let block = Block::default().borders(Borders::ALL).style(colors.footer_style);
    let p = match &app.status {
        Some(msg) => Paragraph::new(msg.as_str()).style(colors.status_style),
        None => Paragraph::new(HELP).style(colors.footer_style),
    };
    f.render_widget(p.block(block), area);
}
