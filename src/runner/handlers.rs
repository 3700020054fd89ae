//! Key handlers: translate key presses into `Action`s for the current mode.

pub mod confirm;
pub mod form;
pub mod normal;

pub use confirm::handle_confirm;
pub use form::handle_form;
pub use normal::handle_normal;

use crate::app::App;
use crate::input::{is_ctrl_c, KeyEvent};

/// Top-level key handler. Returns `Ok(true)` when the application should exit.
///
/// The delete confirmation takes precedence over the item dialog, which
/// takes precedence over the table.
pub fn handle_key(app: &mut App, key: KeyEvent, page_size: usize) -> anyhow::Result<bool> {
    if is_ctrl_c(&key) {
        return Ok(true);
    }
    if app.delete.is_confirming() {
        handle_confirm(app, key.code)
    } else if app.dialog.is_open() {
        handle_form(app, key)
    } else {
        handle_normal(app, key.code, page_size)
    }
}
