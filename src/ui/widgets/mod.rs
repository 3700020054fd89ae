pub mod confirm_dialog;
pub mod footer;
pub mod header;
pub mod item_form;
pub mod item_table;
pub mod toolbar;
