use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::{Dialog, Draft, FormField};
use crate::ui::util::centered_rect;
use crate::ui::Colors;

const LABEL_WIDTH: u16 = 13;
const DIALOG_WIDTH: u16 = 64;
// borders + fields + spacer + notice + buttons
const DIALOG_HEIGHT: u16 = 2 + FormField::ALL.len() as u16 + 3;

/// Create/edit dialog overlaid on `area`.
pub fn render(f: &mut Frame, area: Rect, dialog: &Dialog, draft: &Draft, colors: &Colors) {
    let rect = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
    f.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", dialog.title()))
        .style(colors.dialog_style);
    let inner = block.inner(rect);

    let mut lines: Vec<Line> = Vec::with_capacity(FormField::ALL.len() + 3);
    for field in FormField::ALL {
        let focused = field == draft.focus;
        let style = if focused {
            colors.field_focused_style
        } else {
            colors.field_style
        };
        let label = format!("{:<width$}", format!("{}:", field.label()), width = LABEL_WIDTH as usize);
        lines.push(Line::from(vec![
            Span::styled(label, style),
            Span::styled(draft.field(field), colors.field_style),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(match &draft.notice {
        Some(n) => Line::styled(n.as_str(), colors.notice_style),
        None => Line::raw(""),
    });
    lines.push(Line::from(vec![
        Span::styled(" Cancel [Esc] ", colors.button_style),
        Span::raw("  "),
        Span::styled(
            format!(" {} [Enter] ", dialog.submit_label()),
            colors.button_focused_style,
        ),
    ]));

    f.render_widget(Paragraph::new(lines).block(block), rect);

    // Terminal cursor sits at the end of the focused field's text.
    if let Some(row) = FormField::ALL.iter().position(|field| *field == draft.focus) {
        let text_width = Span::raw(draft.field(draft.focus)).width() as u16;
        let x = (inner.x + LABEL_WIDTH + text_width).min(inner.right().saturating_sub(1));
        let y = inner.y + row as u16;
        if y < inner.bottom() {
            f.set_cursor_position(Position::new(x, y));
        }
    }
}
