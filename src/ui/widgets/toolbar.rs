use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::ui::Colors;

/// Category selector and sort button.
pub fn render(f: &mut Frame, area: Rect, app: &App, colors: &Colors) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let categories = app.categories();
    let position = categories
        .iter()
        .position(|c| *c == app.category)
        .map(|i| i + 1)
        .unwrap_or(1);
    let category = Line::from(vec![
        Span::styled("◀ ", colors.footer_style),
        Span::styled(app.category.label(), colors.field_focused_style),
        Span::styled(" ▶", colors.footer_style),
        Span::styled(
            format!("  {}/{}  [f/F]", position, categories.len()),
            colors.footer_style,
        ),
    ]);
    let category_block = Block::default()
        .borders(Borders::ALL)
        .title(" Category ")
        .style(colors.toolbar_style);
    f.render_widget(Paragraph::new(category).block(category_block), halves[0]);

    let sort = Line::from(vec![
        Span::styled(
            format!("Sort by Quantity ({})", app.sort.arrow()),
            colors.button_style,
        ),
        Span::styled("  [s]", colors.footer_style),
    ]);
    let sort_block = Block::default()
        .borders(Borders::ALL)
        .title(" Sort ")
        .style(colors.toolbar_style);
    f.render_widget(Paragraph::new(sort).block(sort_block), halves[1]);
}
