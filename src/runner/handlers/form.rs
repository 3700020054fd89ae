use crate::app::settings::keybinds;
use crate::app::{Action, App};
use crate::input::{is_printable_key, KeyCode, KeyEvent};

/// Keys while the create/edit dialog is open.
///
/// This is the input-widget layer: it refuses submission while a required
/// field is blank and filters characters per field. The form controller
/// behind `Action::SubmitForm` does no validation of its own.
pub fn handle_form(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    let code = key.code;
    if keybinds::is_esc(&code) {
        app.perform(Action::CancelForm);
        return Ok(false);
    }
    if keybinds::is_enter(&code) {
        if let Some(draft) = app.dialog.draft_mut() {
            if let Some(missing) = draft.first_missing() {
                draft.focus = missing;
                draft.notice = Some(format!("{} is required", missing.label()));
                return Ok(false);
            }
        }
        app.perform(Action::SubmitForm);
        return Ok(false);
    }

    let Some(draft) = app.dialog.draft_mut() else {
        return Ok(false);
    };
    if keybinds::is_next_field(&code) {
        draft.focus_next();
    } else if keybinds::is_prev_field(&code) {
        draft.focus_prev();
    } else if keybinds::is_backspace(&code) {
        draft.backspace();
    } else if is_printable_key(&key) {
        if let KeyCode::Char(c) = code {
            draft.insert_char(c);
        }
    }
    Ok(false)
}
