use tracing::{debug, info, warn};

use self::confirm::DeleteConfirm;
use self::cursor::TableCursor;
use self::form::{Dialog, Draft};
use self::store::ItemStore;
use super::settings::{Settings, SettingsStore};
use super::types::{Action, CategoryFilter, Item, ItemId, SortDirection, ThemePreference};
use crate::errors::render_settings_error;
use crate::ui::Theme;

pub mod confirm;
pub mod cursor;
pub mod form;
mod navigation;
pub mod store;
pub mod view;

/// Application state container.
///
/// Every user intent arrives as an `Action` through `perform`; derived data
/// (`visible`, `categories`) is recomputed from these fields on each call.
pub struct App {
    pub store: ItemStore,
    pub category: CategoryFilter,
    pub sort: SortDirection,
    pub dialog: Dialog,
    pub delete: DeleteConfirm,
    pub cursor: TableCursor,
    /// One-line feedback shown in the footer.
    pub status: Option<String>,
    pub settings: Settings,
    /// Palette applied for the current theme preference.
    pub palette: Theme,
    settings_store: SettingsStore,
}

impl App {
    /// Seeded inventory with preferences read from `settings_store`.
    pub fn new(settings_store: SettingsStore) -> Self {
        Self::with_items(ItemStore::seeded(), settings_store)
    }

    /// Seeded inventory with no durable preferences.
    pub fn ephemeral() -> Self {
        Self::new(SettingsStore::ephemeral())
    }

    pub fn with_items(store: ItemStore, mut settings_store: SettingsStore) -> Self {
        let settings = settings_store.load();
        let palette = Theme::load(settings.theme, settings_store.themes_dir().as_deref());
        info!(theme = %settings.theme, items = store.len(), "application state initialised");
        App {
            store,
            category: CategoryFilter::All,
            sort: SortDirection::default(),
            dialog: Dialog::Closed,
            delete: DeleteConfirm::Idle,
            cursor: TableCursor::default(),
            status: None,
            settings,
            palette,
            settings_store,
        }
    }

    pub fn theme(&self) -> ThemePreference {
        self.settings.theme
    }

    pub fn settings_store(&self) -> &SettingsStore {
        &self.settings_store
    }

    /// Filtered and sorted rows, in display order.
    pub fn visible(&self) -> Vec<&Item> {
        view::visible_items(self.store.items(), &self.category, self.sort)
    }

    pub fn categories(&self) -> Vec<CategoryFilter> {
        view::categories(self.store.items())
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.visible().get(self.cursor.selected).copied()
    }

    /// Apply one intent. Returns `true` when the application should exit.
    pub fn perform(&mut self, action: Action) -> bool {
        debug!(?action, "perform");
        match action {
            Action::OpenCreate => self.open_create(),
            Action::OpenEdit(id) => self.open_edit(&id),
            Action::RequestDelete(id) => self.request_delete(id),
            Action::ConfirmDelete => self.confirm_delete(),
            Action::CancelDelete => self.cancel_delete(),
            Action::SubmitForm => self.submit_form(),
            Action::CancelForm => self.cancel_form(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::SetCategory(filter) => self.set_category(filter),
            Action::NextCategory => self.cycle_category(true),
            Action::PrevCategory => self.cycle_category(false),
            Action::ToggleSort => self.toggle_sort(),
            Action::Quit => return true,
        }
        false
    }

    pub fn open_create(&mut self) {
        self.dialog = Dialog::Creating {
            draft: Draft::blank(),
        };
    }

    /// Open the edit dialog seeded from the item with `id`; unknown ids are ignored.
    pub fn open_edit(&mut self, id: &ItemId) {
        if let Some(item) = self.store.get(id) {
            self.dialog = Dialog::Editing {
                original: item.clone(),
                draft: Draft::from_item(item),
            };
        }
    }

    /// Normalise the draft and hand it to the store, then close the dialog.
    pub fn submit_form(&mut self) {
        match std::mem::take(&mut self.dialog) {
            Dialog::Closed => {}
            Dialog::Creating { draft } => {
                let new_item = draft.to_new_item();
                let name = new_item.name.clone();
                self.store.add(new_item);
                self.status = Some(format!("Added {}", name));
            }
            Dialog::Editing { original, draft } => {
                let updated = draft.to_item(original.id);
                let name = updated.name.clone();
                if self.store.update(updated) {
                    self.status = Some(format!("Saved {}", name));
                }
            }
        }
        self.items_changed();
    }

    pub fn cancel_form(&mut self) {
        self.dialog = Dialog::Closed;
    }

    pub fn request_delete(&mut self, id: ItemId) {
        self.delete = DeleteConfirm::request(id);
    }

    /// Remove the pending item and return to idle.
    pub fn confirm_delete(&mut self) {
        if let DeleteConfirm::Confirming { id, .. } = std::mem::take(&mut self.delete) {
            let name = self.store.get(&id).map(|i| i.name.clone());
            if self.store.remove(&id) {
                self.status = name.map(|n| format!("Deleted {}", n));
            }
        }
        self.items_changed();
    }

    pub fn cancel_delete(&mut self) {
        self.delete = DeleteConfirm::Idle;
    }

    /// Flip the theme, apply its palette and persist the preference.
    pub fn toggle_theme(&mut self) {
        self.settings.theme = self.settings.theme.toggle();
        self.palette = Theme::load(self.settings.theme, self.settings_store.themes_dir().as_deref());
        let moved_aside = self
            .settings_store
            .is_unreadable()
            .then(|| self.settings_store.backup_path())
            .flatten();
        match self.settings_store.save(&self.settings) {
            Ok(()) => {
                if let Some(backup) = moved_aside.filter(|b| b.exists()) {
                    self.status = Some(format!("Unreadable settings moved to {}", backup.display()));
                }
            }
            Err(e) => {
                warn!("failed to persist theme: {e}");
                self.status = Some(render_settings_error(&e));
            }
        }
    }

    /// Select `filter`; a category no item carries selects `All` instead.
    pub fn set_category(&mut self, filter: CategoryFilter) {
        self.category = if self.categories().contains(&filter) {
            filter
        } else {
            debug!(category = %filter, "unknown category; showing all");
            CategoryFilter::All
        };
        self.cursor = TableCursor::default();
    }

    /// Step the filter through `categories()`, wrapping at both ends.
    pub fn cycle_category(&mut self, forward: bool) {
        let cats = self.categories();
        let idx = cats.iter().position(|c| *c == self.category).unwrap_or(0);
        let next = if forward {
            (idx + 1) % cats.len()
        } else {
            (idx + cats.len() - 1) % cats.len()
        };
        self.set_category(cats[next].clone());
    }

    pub fn toggle_sort(&mut self) {
        self.sort = self.sort.toggle();
    }

    // Keep the filter pointing at an existing category and the cursor in range.
    fn items_changed(&mut self) {
        if !self.categories().contains(&self.category) {
            debug!(category = %self.category, "filtered category vanished; showing all");
            self.category = CategoryFilter::All;
        }
        let len = self.visible().len();
        self.cursor.clamp(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::core::confirm::ConfirmChoice;

    #[test]
    fn new_app_starts_closed_idle_all_descending() {
        let app = App::ephemeral();
        assert_eq!(app.dialog, Dialog::Closed);
        assert_eq!(app.delete, DeleteConfirm::Idle);
        assert_eq!(app.category, CategoryFilter::All);
        assert_eq!(app.sort, SortDirection::Descending);
        assert_eq!(app.theme(), ThemePreference::Light);
        assert_eq!(app.palette, Theme::light());
    }

    #[test]
    fn open_edit_unknown_id_keeps_dialog_closed() {
        let mut app = App::ephemeral();
        app.open_edit(&"missing".into());
        assert_eq!(app.dialog, Dialog::Closed);
    }

    #[test]
    fn submit_with_closed_dialog_changes_nothing() {
        let mut app = App::ephemeral();
        app.submit_form();
        assert_eq!(app.store.len(), 3);
        assert!(app.status.is_none());
    }

    #[test]
    fn removing_last_item_of_filtered_category_resets_filter() {
        let mut app = App::ephemeral();
        app.set_category(CategoryFilter::Only("Furniture".into()));
        app.request_delete("2".into());
        app.confirm_delete();
        assert_eq!(app.category, CategoryFilter::All);
        assert_eq!(app.visible().len(), 2);
    }

    #[test]
    fn editing_category_away_resets_filter() {
        let mut app = App::ephemeral();
        app.set_category(CategoryFilter::Only("Furniture".into()));
        app.open_edit(&"2".into());
        if let Some(d) = app.dialog.draft_mut() {
            d.category = "Office".into();
        }
        app.submit_form();
        assert_eq!(app.category, CategoryFilter::All);
        assert_eq!(app.store.get(&"2".into()).unwrap().category, "Office");
    }

    #[test]
    fn cycle_category_wraps() {
        let mut app = App::ephemeral();
        app.cycle_category(true);
        assert_eq!(app.category, CategoryFilter::Only("Electronics".into()));
        app.cycle_category(true);
        assert_eq!(app.category, CategoryFilter::Only("Furniture".into()));
        app.cycle_category(true);
        assert_eq!(app.category, CategoryFilter::All);
        app.cycle_category(false);
        assert_eq!(app.category, CategoryFilter::Only("Furniture".into()));
    }

    #[test]
    fn cursor_is_clamped_after_delete() {
        let mut app = App::ephemeral();
        app.cursor.selected = 2;
        let last = app.selected_item().unwrap().id.clone();
        app.request_delete(last);
        app.confirm_delete();
        assert_eq!(app.cursor.selected, 1);
        assert!(app.selected_item().is_some());
    }

    #[test]
    fn confirm_delete_ignores_focused_button() {
        let mut app = App::ephemeral();
        app.request_delete("1".into());
        assert_eq!(app.delete.choice(), Some(ConfirmChoice::Cancel));
        app.confirm_delete();
        assert!(app.store.get(&"1".into()).is_none());
    }

    #[test]
    fn unknown_category_selects_all() {
        let mut app = App::ephemeral();
        app.perform(Action::SetCategory(CategoryFilter::Only("Electronics".into())));
        app.perform(Action::SetCategory(CategoryFilter::Only("Nope".into())));
        assert_eq!(app.category, CategoryFilter::All);
        assert!(app.categories().contains(&app.category));
        assert_eq!(app.visible().len(), 3);
    }
}
