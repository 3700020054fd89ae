/// Row selection and scroll state for the item table.
///
/// The cursor only knows row indices into the currently visible list; it
/// is clamped whenever that list changes length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableCursor {
    /// Index of the selected row within the visible items.
    pub selected: usize,
    /// Index of the top-most rendered row.
    pub offset: usize,
}

impl TableCursor {
    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn page_down(&mut self, len: usize, page: usize) {
        self.selected = self.selected.saturating_add(page).min(len.saturating_sub(1));
    }

    pub fn page_up(&mut self, page: usize) {
        self.selected = self.selected.saturating_sub(page);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Keep `selected` within `0..len`.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
        self.offset = self.offset.min(len.saturating_sub(1));
    }

    /// Adjust `offset` so the selected row fits in a viewport of `height` rows.
    pub fn ensure_selected_visible(&mut self, len: usize, height: usize) {
        if height == 0 || len == 0 {
            self.offset = 0;
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
            return;
        }
        let max_offset = len.saturating_sub(height);
        if self.selected >= self.offset + height {
            self.offset = (self.selected + 1 - height).min(max_offset);
        } else if self.offset > max_offset {
            self.offset = max_offset;
        }
    }
}
