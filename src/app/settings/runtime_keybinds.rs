//! Key bindings resolved at runtime.
//!
//! Defaults cover every action; the `[keybinds]` table of `config.toml`
//! replaces the keys of any action it names. The active table lives in a
//! process-wide slot installed once at startup.

use crossterm::event::KeyCode;
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard};
use tracing::warn;

const DEFAULTS: &[(&str, &[&str])] = &[
    ("quit", &["q"]),
    ("up", &["Up", "k"]),
    ("down", &["Down", "j"]),
    ("page_up", &["PageUp"]),
    ("page_down", &["PageDown"]),
    ("home", &["Home", "g"]),
    ("end", &["End", "G"]),
    ("add", &["a", "n"]),
    ("edit", &["e", "Enter"]),
    ("delete", &["d", "Delete"]),
    ("next_category", &["f", "Right"]),
    ("prev_category", &["F", "Left"]),
    ("toggle_sort", &["s"]),
    ("toggle_theme", &["t"]),
    ("enter", &["Enter"]),
    ("esc", &["Esc"]),
    ("backspace", &["Backspace"]),
    ("next_field", &["Tab", "Down"]),
    ("prev_field", &["BackTab", "Up"]),
    ("left", &["Left"]),
    ("right", &["Right"]),
    ("tab", &["Tab"]),
];

/// Parse a key name such as `q`, `Enter`, `F5` or `PageDown`.
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }
    let code = match name.to_ascii_lowercase().as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "space" => KeyCode::Char(' '),
        other => {
            let n = other.strip_prefix('f')?.parse::<u8>().ok()?;
            if (1..=12).contains(&n) {
                KeyCode::F(n)
            } else {
                return None;
            }
        }
    };
    Some(code)
}

#[derive(Clone, Debug)]
pub struct Keybinds {
    map: HashMap<String, Vec<KeyCode>>,
}

impl Keybinds {
    pub fn defaults() -> Self {
        let map = DEFAULTS
            .iter()
            .map(|(action, keys)| {
                let codes = keys.iter().filter_map(|k| parse_key(k)).collect();
                (action.to_string(), codes)
            })
            .collect();
        Keybinds { map }
    }

    /// Defaults with the actions named in `overrides` replaced. Unknown
    /// actions and unparseable key names are logged and skipped.
    pub fn with_overrides(overrides: &BTreeMap<String, Vec<String>>) -> Self {
        let mut binds = Self::defaults();
        for (action, keys) in overrides {
            if !binds.map.contains_key(action) {
                warn!(action = %action, "ignoring keybind for unknown action");
                continue;
            }
            let mut codes = Vec::new();
            for k in keys {
                match parse_key(k) {
                    Some(code) => codes.push(code),
                    None => warn!(action = %action, key = %k, "ignoring unknown key name"),
                }
            }
            if !codes.is_empty() {
                binds.map.insert(action.clone(), codes);
            }
        }
        binds
    }

    pub fn is_bound(&self, action: &str, code: &KeyCode) -> bool {
        self.map.get(action).is_some_and(|codes| codes.contains(code))
    }
}

impl Default for Keybinds {
    fn default() -> Self {
        Self::defaults()
    }
}

static CURRENT: Lazy<RwLock<Keybinds>> = Lazy::new(|| RwLock::new(Keybinds::defaults()));

/// Active bindings.
pub fn get() -> RwLockReadGuard<'static, Keybinds> {
    CURRENT.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Replace the active bindings.
pub fn install(binds: Keybinds) {
    let mut slot = CURRENT.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *slot = binds;
}
