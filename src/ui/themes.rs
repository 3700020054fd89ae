use ratatui::style::Color;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

use crate::app::types::ThemePreference;

/// Colour palette used to derive every style in the UI.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub tokens: Tokens,
}

/// Optional fine-grained colours; unset tokens are derived from the palette.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tokens {
    pub muted: Option<Color>,
    pub danger: Option<Color>,
    pub low_stock_bg: Option<Color>,
    pub selected_bg: Option<Color>,
}

#[derive(Deserialize)]
struct ThemeFile {
    palette: Option<Pal>,
    #[serde(default)]
    tokens: TokenFile,
}

#[derive(Deserialize)]
struct Pal {
    bg: String,
    fg: String,
    accent: String,
}

#[derive(Deserialize, Default)]
struct TokenFile {
    muted: Option<String>,
    danger: Option<String>,
    low_stock_bg: Option<String>,
    selected_bg: Option<String>,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Blue,
            tokens: Tokens {
                muted: Some(Color::DarkGray),
                danger: Some(Color::Red),
                low_stock_bg: Some(Color::Rgb(254, 242, 242)),
                selected_bg: Some(Color::Rgb(219, 234, 254)),
            },
        }
    }

    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(17, 24, 39),
            fg: Color::Gray,
            accent: Color::Cyan,
            tokens: Tokens {
                muted: Some(Color::DarkGray),
                danger: Some(Color::LightRed),
                low_stock_bg: Some(Color::Rgb(69, 10, 10)),
                selected_bg: Some(Color::Rgb(55, 65, 81)),
            },
        }
    }

    pub fn builtin(pref: ThemePreference) -> Self {
        match pref {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
        }
    }

    /// Parse a palette file; anything it omits is taken from `base`.
    pub fn from_toml_over(s: &str, base: Theme) -> Result<Self, toml::de::Error> {
        let file: ThemeFile = toml::from_str(s)?;
        let mut theme = base;
        if let Some(p) = file.palette {
            theme.bg = parse_hex(&p.bg).unwrap_or(theme.bg);
            theme.fg = parse_hex(&p.fg).unwrap_or(theme.fg);
            theme.accent = parse_hex(&p.accent).unwrap_or(theme.accent);
        }
        let t = file.tokens;
        let merge = |raw: Option<String>, current: Option<Color>| {
            raw.as_deref().and_then(parse_hex).or(current)
        };
        theme.tokens = Tokens {
            muted: merge(t.muted, theme.tokens.muted),
            danger: merge(t.danger, theme.tokens.danger),
            low_stock_bg: merge(t.low_stock_bg, theme.tokens.low_stock_bg),
            selected_bg: merge(t.selected_bg, theme.tokens.selected_bg),
        };
        Ok(theme)
    }

    /// Built-in palette for `pref`, overridden by `<themes_dir>/<pref>.toml`
    /// when that file exists and parses.
    pub fn load(pref: ThemePreference, themes_dir: Option<&Path>) -> Self {
        let base = Self::builtin(pref);
        let Some(dir) = themes_dir else {
            return base;
        };
        let path = dir.join(format!("{}.toml", pref.as_str()));
        let text = match std::fs::read_to_string(&path) {
            Ok(t) => t,
            Err(_) => return base,
        };
        match Self::from_toml_over(&text, base.clone()) {
            Ok(t) => {
                debug!(path = %path.display(), "loaded custom palette");
                t
            }
            Err(e) => {
                warn!(path = %path.display(), "ignoring malformed palette: {e}");
                base
            }
        }
    }
}

fn parse_hex(s: &str) -> Option<Color> {
    let s = s.trim().trim_start_matches('#');
    if s.len() != 6 || !s.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
