use crate::app::settings::keybinds;
use crate::app::{Action, App};
use crate::input::KeyCode;

/// Keys while only the item table is showing.
pub fn handle_normal(app: &mut App, code: KeyCode, page_size: usize) -> anyhow::Result<bool> {
    if keybinds::is_quit(&code) {
        return Ok(app.perform(Action::Quit));
    }
    app.status = None;

    if keybinds::is_down(&code) {
        app.next(page_size);
    } else if keybinds::is_up(&code) {
        app.previous(page_size);
    } else if keybinds::is_page_down(&code) {
        app.page_down(page_size);
    } else if keybinds::is_page_up(&code) {
        app.page_up(page_size);
    } else if keybinds::is_home(&code) {
        app.first(page_size);
    } else if keybinds::is_end(&code) {
        app.last(page_size);
    } else if keybinds::is_add(&code) {
        app.perform(Action::OpenCreate);
    } else if keybinds::is_edit(&code) {
        if let Some(id) = app.selected_item().map(|i| i.id.clone()) {
            app.perform(Action::OpenEdit(id));
        }
    } else if keybinds::is_delete(&code) {
        if let Some(id) = app.selected_item().map(|i| i.id.clone()) {
            app.perform(Action::RequestDelete(id));
        }
    } else if keybinds::is_next_category(&code) {
        app.perform(Action::NextCategory);
    } else if keybinds::is_prev_category(&code) {
        app.perform(Action::PrevCategory);
    } else if keybinds::is_toggle_sort(&code) {
        app.perform(Action::ToggleSort);
    } else if keybinds::is_toggle_theme(&code) {
        app.perform(Action::ToggleTheme);
    }
    Ok(false)
}
