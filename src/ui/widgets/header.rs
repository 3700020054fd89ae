use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, ThemePreference};
use crate::ui::Colors;

/// Label of the theme button: it names the theme a press switches to.
pub fn theme_button_label(current: ThemePreference) -> &'static str {
    match current {
        ThemePreference::Light => "☾ Dark",
        ThemePreference::Dark => "☀ Light",
    }
}

/// Title bar with the theme toggle and the add button.
pub fn render(f: &mut Frame, area: Rect, app: &App, colors: &Colors) {
    let buttons = Line::from(vec![
        Span::styled("[t] ", colors.footer_style),
        Span::styled(theme_button_label(app.theme()), colors.button_style),
        Span::raw("   "),
        Span::styled("[a] ", colors.footer_style),
        Span::styled(" + Add Item ", colors.button_focused_style),
        Span::raw(" "),
    ])
    .alignment(Alignment::Right);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Inventory Management ", colors.title_style))
        .style(colors.header_style);
    f.render_widget(Paragraph::new(buttons).block(block), area);
}
