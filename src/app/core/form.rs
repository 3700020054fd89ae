use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::app::types::{Item, ItemId, NewItem};

// Leading numeric prefixes; trailing garbage is ignored.
static INT_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").unwrap());
static FLOAT_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").unwrap());

/// Parse a quantity from form text. Unparseable input becomes 0, negative
/// values clamp to 0 and values beyond `u32::MAX` saturate.
pub fn parse_quantity(raw: &str) -> u32 {
    let Some(caps) = INT_PREFIX.captures(raw) else {
        return 0;
    };
    let digits = &caps[1];
    if digits.starts_with('-') {
        return 0;
    }
    match digits.trim_start_matches('+').parse::<u64>() {
        Ok(v) => u32::try_from(v).unwrap_or(u32::MAX),
        // Only overflow can fail here: the regex guarantees digits.
        Err(_) => u32::MAX,
    }
}

/// Parse a price from form text. Unparseable, negative and non-finite
/// values all become 0.
pub fn parse_price(raw: &str) -> f64 {
    let value = FLOAT_PREFIX
        .captures(raw)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .unwrap_or(0.0);
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Editable fields of the item dialog, in tab order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Category,
    Quantity,
    Price,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Category,
        FormField::Quantity,
        FormField::Price,
        FormField::Description,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Category => "Category",
            FormField::Quantity => "Quantity",
            FormField::Price => "Price",
            FormField::Description => "Description",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Text buffer behind the create/edit dialog.
///
/// The draft holds raw strings only; conversion to typed fields happens in
/// `to_new_item` / `to_item` at submit time.
#[derive(Clone, Debug, PartialEq)]
pub struct Draft {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub price: String,
    pub description: String,
    /// Field receiving keystrokes.
    pub focus: FormField,
    /// Message shown when submission was refused by the input widgets.
    pub notice: Option<String>,
}

impl Draft {
    pub fn blank() -> Self {
        Draft {
            name: String::new(),
            category: String::new(),
            quantity: String::new(),
            price: String::new(),
            description: String::new(),
            focus: FormField::Name,
            notice: None,
        }
    }

    pub fn from_item(item: &Item) -> Self {
        Draft {
            name: item.name.clone(),
            category: item.category.clone(),
            quantity: item.quantity.to_string(),
            price: item.price.to_string(),
            description: item.description.clone(),
            focus: FormField::Name,
            notice: None,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Category => &self.category,
            FormField::Quantity => &self.quantity,
            FormField::Price => &self.price,
            FormField::Description => &self.description,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Category => &mut self.category,
            FormField::Quantity => &mut self.quantity,
            FormField::Price => &mut self.price,
            FormField::Description => &mut self.description,
        }
    }

    /// Append `c` to the focused field if that field's widget accepts it.
    /// Quantity takes digits only; price takes digits and a single `.`.
    pub fn insert_char(&mut self, c: char) -> bool {
        let focus = self.focus;
        let accepted = match focus {
            FormField::Quantity => c.is_ascii_digit(),
            FormField::Price => c.is_ascii_digit() || (c == '.' && !self.price.contains('.')),
            _ => !c.is_control(),
        };
        if accepted {
            self.field_mut(focus).push(c);
            self.notice = None;
        }
        accepted
    }

    /// Remove the last grapheme of the focused field.
    pub fn backspace(&mut self) {
        let buf = self.field_mut(self.focus);
        if let Some((idx, _)) = buf.grapheme_indices(true).next_back() {
            buf.truncate(idx);
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// First required field that is blank, in tab order.
    pub fn first_missing(&self) -> Option<FormField> {
        FormField::ALL
            .into_iter()
            .find(|f| self.field(*f).trim().is_empty())
    }

    /// Normalised create payload.
    pub fn to_new_item(&self) -> NewItem {
        NewItem {
            name: self.name.clone(),
            category: self.category.clone(),
            quantity: parse_quantity(&self.quantity),
            price: parse_price(&self.price),
            description: self.description.clone(),
        }
    }

    /// Normalised update payload keeping the original `id`.
    pub fn to_item(&self, id: ItemId) -> Item {
        self.to_new_item().with_id(id)
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::blank()
    }
}

/// Create/edit dialog state.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Dialog {
    #[default]
    Closed,
    Creating { draft: Draft },
    Editing { original: Item, draft: Draft },
}

impl Dialog {
    pub fn is_open(&self) -> bool {
        !matches!(self, Dialog::Closed)
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            Dialog::Closed => None,
            Dialog::Creating { draft } | Dialog::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        match self {
            Dialog::Closed => None,
            Dialog::Creating { draft } | Dialog::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dialog::Editing { .. } => "Edit Item",
            _ => "Add New Item",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Dialog::Editing { .. } => "Save Changes",
            _ => "Add Item",
        }
    }
}
