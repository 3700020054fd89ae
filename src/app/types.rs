use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Items with a quantity below this value are flagged as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Opaque item identifier. Assigned by the store and never changed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        ItemId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId(s.to_string())
    }
}

/// A single inventory record.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub price: f64,
    pub description: String,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: u32,
        price: f64,
        description: impl Into<String>,
    ) -> Self {
        Item {
            id: ItemId::new(id),
            name: name.into(),
            category: category.into(),
            quantity,
            price,
            description: description.into(),
        }
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }

    /// Price formatted with two decimals, e.g. `$999.99`.
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// Item fields without an id; the payload of the create path.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub price: f64,
    pub description: String,
}

impl NewItem {
    pub fn with_id(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            price: self.price,
            description: self.description,
        }
    }
}

/// Category filter applied to the item table.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => item.category == *c,
        }
    }

    /// Label shown in the toolbar. The first letter is capitalised.
    pub fn label(&self) -> String {
        let raw = match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.as_str(),
        };
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "asc"),
            SortDirection::Descending => write!(f, "desc"),
        }
    }
}

/// UI colour scheme preference. Persisted in the settings file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn toggle(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

impl Serialize for ThemePreference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Unrecognised values fall back to the default rather than failing the
// whole settings file.
impl<'de> Deserialize<'de> for ThemePreference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_default())
    }
}

/// Intents produced by the key handlers and consumed by `App::perform`.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    OpenCreate,
    OpenEdit(ItemId),
    RequestDelete(ItemId),
    ConfirmDelete,
    CancelDelete,
    SubmitForm,
    CancelForm,
    ToggleTheme,
    SetCategory(CategoryFilter),
    NextCategory,
    PrevCategory,
    ToggleSort,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_toggle_is_an_involution() {
        let light = ThemePreference::Light;
        assert_eq!(light.toggle(), ThemePreference::Dark);
        assert_eq!(light.toggle().toggle(), light);
    }

    #[test]
    fn theme_parse_accepts_known_names_only() {
        assert_eq!("dark".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
        assert_eq!(" light ".parse::<ThemePreference>(), Ok(ThemePreference::Light));
        assert!("purple".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn category_label_capitalises() {
        assert_eq!(CategoryFilter::All.label(), "All");
        assert_eq!(CategoryFilter::Only("furniture".into()).label(), "Furniture");
        assert_eq!(CategoryFilter::Only(String::new()).label(), "");
    }

    #[test]
    fn low_stock_boundary() {
        let mut item = Item::new("x", "Widget", "Misc", 9, 1.0, "");
        assert!(item.is_low_stock());
        item.quantity = LOW_STOCK_THRESHOLD;
        assert!(!item.is_low_stock());
    }

    #[test]
    fn price_label_has_two_decimals() {
        let item = Item::new("x", "Widget", "Misc", 1, 150.5, "");
        assert_eq!(item.price_label(), "$150.50");
    }
}
