use crate::app::settings::keybinds;
use crate::app::{Action, App, ConfirmChoice};
use crate::input::KeyCode;

/// Keys while the delete confirmation is showing. Left/Right/Tab move
/// between Cancel and Delete; `y` and `n` answer directly.
pub fn handle_confirm(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    if keybinds::is_left(&code) || keybinds::is_right(&code) || keybinds::is_tab(&code) {
        app.delete.toggle_choice();
    } else if keybinds::is_enter(&code) {
        match app.delete.choice() {
            Some(ConfirmChoice::Delete) => app.perform(Action::ConfirmDelete),
            _ => app.perform(Action::CancelDelete),
        };
    } else if keybinds::is_char(&code, 'y') || keybinds::is_char(&code, 'Y') {
        app.perform(Action::ConfirmDelete);
    } else if keybinds::is_char(&code, 'n')
        || keybinds::is_char(&code, 'N')
        || keybinds::is_esc(&code)
    {
        app.perform(Action::CancelDelete);
    }
    Ok(false)
}
