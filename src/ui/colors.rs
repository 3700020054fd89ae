use ratatui::style::{Color, Modifier, Style};

use crate::ui::Theme;

/// Concrete styles derived from a `Theme`.
#[derive(Clone, Debug, PartialEq)]
pub struct Colors {
    pub base_style: Style,
    pub header_style: Style,
    pub title_style: Style,
    pub toolbar_style: Style,
    pub table_header_style: Style,
    pub row_style: Style,
    pub row_selected_style: Style,
    pub low_stock_row_style: Style,
    pub low_stock_marker_style: Style,
    pub footer_style: Style,
    pub status_style: Style,
    pub dialog_style: Style,
    pub field_style: Style,
    pub field_focused_style: Style,
    pub button_style: Style,
    pub button_focused_style: Style,
    pub danger_button_style: Style,
    pub notice_style: Style,
}

impl Colors {
    pub fn from_theme(theme: &Theme) -> Self {
        let t = &theme.tokens;
        let muted = t.muted.unwrap_or(theme.fg);
        let danger = t.danger.unwrap_or(Color::Red);
        let low_stock_bg = t.low_stock_bg.unwrap_or(theme.bg);
        let selected_bg = t.selected_bg.unwrap_or(theme.accent);

        let base = Style::default().fg(theme.fg).bg(theme.bg);
        Colors {
            base_style: base,
            header_style: base,
            title_style: base.add_modifier(Modifier::BOLD),
            toolbar_style: base,
            table_header_style: Style::default()
                .fg(muted)
                .bg(theme.bg)
                .add_modifier(Modifier::BOLD),
            row_style: base,
            row_selected_style: Style::default().fg(theme.fg).bg(selected_bg),
            low_stock_row_style: Style::default().fg(theme.fg).bg(low_stock_bg),
            low_stock_marker_style: Style::default().fg(danger).add_modifier(Modifier::BOLD),
            footer_style: Style::default().fg(muted).bg(theme.bg),
            status_style: Style::default().fg(theme.accent).bg(theme.bg),
            dialog_style: base,
            field_style: base,
            field_focused_style: Style::default()
                .fg(theme.accent)
                .bg(theme.bg)
                .add_modifier(Modifier::BOLD),
            button_style: Style::default().fg(theme.fg).bg(theme.bg),
            button_focused_style: Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
            danger_button_style: Style::default()
                .fg(theme.bg)
                .bg(danger)
                .add_modifier(Modifier::BOLD),
            notice_style: Style::default().fg(danger).bg(theme.bg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_row_uses_selected_token() {
        let mut theme = Theme::light();
        theme.tokens.selected_bg = Some(Color::Rgb(1, 2, 3));
        let c = Colors::from_theme(&theme);
        assert_eq!(c.row_selected_style.bg, Some(Color::Rgb(1, 2, 3)));
    }

    #[test]
    fn missing_tokens_fall_back_to_palette() {
        let mut theme = Theme::dark();
        theme.tokens = Default::default();
        let c = Colors::from_theme(&theme);
        assert_eq!(c.row_selected_style.bg, Some(theme.accent));
        assert_eq!(c.low_stock_row_style.bg, Some(theme.bg));
        assert_eq!(c.footer_style.fg, Some(theme.fg));
    }
}
