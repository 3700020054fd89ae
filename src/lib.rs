pub mod app;
pub mod errors;
pub mod input;
pub mod logging;
pub mod runner;
pub mod ui;

pub use crate::app::{
    Action, App, CategoryFilter, Dialog, DeleteConfirm, Draft, Item, ItemId, ItemStore, NewItem,
    SortDirection, ThemePreference,
};
