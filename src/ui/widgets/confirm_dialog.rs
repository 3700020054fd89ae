use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{ConfirmChoice, Item};
use crate::ui::util::centered_rect;
use crate::ui::Colors;

pub const MESSAGE: &str = "Are you sure you want to delete this item? This action cannot be undone.";

/// Delete confirmation overlaid on `area`. `item` is the pending item, if
/// it still exists.
pub fn render(f: &mut Frame, area: Rect, item: Option<&Item>, choice: ConfirmChoice, colors: &Colors) {
    let rect = centered_rect(52, 9, area);
    f.render_widget(Clear, rect);

    let (cancel_style, delete_style) = match choice {
        ConfirmChoice::Cancel => (colors.button_focused_style, colors.button_style),
        ConfirmChoice::Delete => (colors.button_style, colors.danger_button_style),
    };

    let mut lines = Vec::new();
    if let Some(item) = item {
        lines.push(Line::styled(item.name.as_str(), colors.title_style));
    }
    lines.push(Line::raw(MESSAGE));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled(" Cancel [n] ", cancel_style),
        Span::raw("  "),
        Span::styled(" Delete [y] ", delete_style),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Confirm Delete ")
        .style(colors.dialog_style);
    let p = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(p, rect);
}
