pub mod core;
pub mod settings;
pub mod types;

pub use self::core::confirm::{ConfirmChoice, DeleteConfirm};
pub use self::core::cursor::TableCursor;
pub use self::core::form::{Dialog, Draft, FormField};
pub use self::core::store::ItemStore;
pub use self::core::App;
pub use self::types::{
    Action, CategoryFilter, Item, ItemId, NewItem, SortDirection, ThemePreference,
    LOW_STOCK_THRESHOLD,
};
