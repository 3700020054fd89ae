// Named key predicates so handlers refer to actions rather than raw
// `KeyCode` patterns. Each one consults the runtime binding table.

use crate::app::settings::runtime_keybinds;
use crate::input::KeyCode;

fn is_bound(action: &str, code: &KeyCode) -> bool {
    runtime_keybinds::get().is_bound(action, code)
}

pub fn is_quit(code: &KeyCode) -> bool {
    is_bound("quit", code)
}

pub fn is_up(code: &KeyCode) -> bool {
    is_bound("up", code)
}

pub fn is_down(code: &KeyCode) -> bool {
    is_bound("down", code)
}

pub fn is_page_up(code: &KeyCode) -> bool {
    is_bound("page_up", code)
}

pub fn is_page_down(code: &KeyCode) -> bool {
    is_bound("page_down", code)
}

pub fn is_home(code: &KeyCode) -> bool {
    is_bound("home", code)
}

pub fn is_end(code: &KeyCode) -> bool {
    is_bound("end", code)
}

pub fn is_add(code: &KeyCode) -> bool {
    is_bound("add", code)
}

pub fn is_edit(code: &KeyCode) -> bool {
    is_bound("edit", code)
}

pub fn is_delete(code: &KeyCode) -> bool {
    is_bound("delete", code)
}

pub fn is_next_category(code: &KeyCode) -> bool {
    is_bound("next_category", code)
}

pub fn is_prev_category(code: &KeyCode) -> bool {
    is_bound("prev_category", code)
}

pub fn is_toggle_sort(code: &KeyCode) -> bool {
    is_bound("toggle_sort", code)
}

pub fn is_toggle_theme(code: &KeyCode) -> bool {
    is_bound("toggle_theme", code)
}

pub fn is_enter(code: &KeyCode) -> bool {
    is_bound("enter", code)
}

pub fn is_esc(code: &KeyCode) -> bool {
    is_bound("esc", code)
}

pub fn is_backspace(code: &KeyCode) -> bool {
    is_bound("backspace", code)
}

pub fn is_next_field(code: &KeyCode) -> bool {
    is_bound("next_field", code)
}

pub fn is_prev_field(code: &KeyCode) -> bool {
    is_bound("prev_field", code)
}

pub fn is_left(code: &KeyCode) -> bool {
    is_bound("left", code)
}

pub fn is_right(code: &KeyCode) -> bool {
    is_bound("right", code)
}

pub fn is_tab(code: &KeyCode) -> bool {
    is_bound("tab", code)
}

pub fn is_char(code: &KeyCode, want: char) -> bool {
    matches!(code, &KeyCode::Char(c) if c == want)
}
