use super::*;

impl App {
    /// Keep the selected row visible in a table viewport of `list_height` rows.
    pub fn ensure_selection_visible(&mut self, list_height: usize) {
        let len = self.visible().len();
        self.cursor.clamp(len);
        self.cursor.ensure_selected_visible(len, list_height);
    }

    /// Move selection down by one row.
    pub fn next(&mut self, list_height: usize) {
        let len = self.visible().len();
        self.cursor.select_next(len);
        self.ensure_selection_visible(list_height);
    }

    /// Move selection up by one row.
    pub fn previous(&mut self, list_height: usize) {
        self.cursor.select_prev();
        self.ensure_selection_visible(list_height);
    }

    pub fn page_down(&mut self, list_height: usize) {
        let len = self.visible().len();
        self.cursor.page_down(len, list_height.max(1));
        self.ensure_selection_visible(list_height);
    }

    pub fn page_up(&mut self, list_height: usize) {
        self.cursor.page_up(list_height.max(1));
        self.ensure_selection_visible(list_height);
    }

    pub fn first(&mut self, list_height: usize) {
        self.cursor.select_first();
        self.ensure_selection_visible(list_height);
    }

    pub fn last(&mut self, list_height: usize) {
        let len = self.visible().len();
        self.cursor.select_last(len);
        self.ensure_selection_visible(list_height);
    }
}
