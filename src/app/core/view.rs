//! Derived views over the item list. Everything here is pure and is
//! recomputed from the current state on demand.

use crate::app::types::{CategoryFilter, Item, SortDirection};

/// `All` followed by each distinct category in first-seen order.
pub fn categories(items: &[Item]) -> Vec<CategoryFilter> {
    let mut out = vec![CategoryFilter::All];
    for item in items {
        let candidate = CategoryFilter::Only(item.category.clone());
        if !out.contains(&candidate) {
            out.push(candidate);
        }
    }
    out
}

/// Items matching `filter`, sorted by quantity. The sort is stable so equal
/// quantities keep their original relative order in both directions.
pub fn visible_items<'a>(
    items: &'a [Item],
    filter: &CategoryFilter,
    direction: SortDirection,
) -> Vec<&'a Item> {
    let mut out: Vec<&Item> = items.iter().filter(|item| filter.matches(item)).collect();
    match direction {
        SortDirection::Ascending => out.sort_by(|a, b| a.quantity.cmp(&b.quantity)),
        SortDirection::Descending => out.sort_by(|a, b| b.quantity.cmp(&a.quantity)),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::core::store::ItemStore;

    fn names(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn categories_are_first_seen_not_alphabetical() {
        let items = vec![
            Item::new("1", "a", "Tools", 1, 1.0, ""),
            Item::new("2", "b", "Garden", 1, 1.0, ""),
            Item::new("3", "c", "Tools", 1, 1.0, ""),
            Item::new("4", "d", "Books", 1, 1.0, ""),
        ];
        assert_eq!(
            categories(&items),
            vec![
                CategoryFilter::All,
                CategoryFilter::Only("Tools".into()),
                CategoryFilter::Only("Garden".into()),
                CategoryFilter::Only("Books".into()),
            ]
        );
    }

    #[test]
    fn categories_of_empty_store_is_just_all() {
        assert_eq!(categories(&[]), vec![CategoryFilter::All]);
    }

    #[test]
    fn electronics_descending_from_seed() {
        let store = ItemStore::seeded();
        let filter = CategoryFilter::Only("Electronics".into());
        let visible = visible_items(store.items(), &filter, SortDirection::Descending);
        assert_eq!(names(&visible), vec!["Laptop", "Printer"]);
        assert_eq!(visible[0].quantity, 5);
        assert_eq!(visible[1].quantity, 3);
    }

    #[test]
    fn all_returns_every_item_sorted() {
        let store = ItemStore::seeded();
        let asc = visible_items(store.items(), &CategoryFilter::All, SortDirection::Ascending);
        assert_eq!(names(&asc), vec!["Printer", "Laptop", "Desk Chair"]);
        let desc = visible_items(store.items(), &CategoryFilter::All, SortDirection::Descending);
        assert_eq!(names(&desc), vec!["Desk Chair", "Laptop", "Printer"]);
    }

    #[test]
    fn category_match_is_exact() {
        let items = vec![
            Item::new("1", "a", "Electronics", 1, 1.0, ""),
            Item::new("2", "b", "electronics", 2, 1.0, ""),
            Item::new("3", "c", "Electronics ", 3, 1.0, ""),
        ];
        let filter = CategoryFilter::Only("Electronics".into());
        let visible = visible_items(&items, &filter, SortDirection::Descending);
        assert_eq!(names(&visible), vec!["a"]);
    }

    #[test]
    fn ties_keep_original_order_in_both_directions() {
        let items = vec![
            Item::new("1", "first", "X", 4, 1.0, ""),
            Item::new("2", "second", "X", 4, 1.0, ""),
            Item::new("3", "third", "X", 1, 1.0, ""),
            Item::new("4", "fourth", "X", 4, 1.0, ""),
        ];
        let desc = visible_items(&items, &CategoryFilter::All, SortDirection::Descending);
        assert_eq!(names(&desc), vec!["first", "second", "fourth", "third"]);
        let asc = visible_items(&items, &CategoryFilter::All, SortDirection::Ascending);
        assert_eq!(names(&asc), vec!["third", "first", "second", "fourth"]);
    }

    #[test]
    fn toggling_sort_twice_restores_order() {
        let store = ItemStore::seeded();
        let dir = SortDirection::default();
        let before = names(&visible_items(store.items(), &CategoryFilter::All, dir));
        let after = names(&visible_items(store.items(), &CategoryFilter::All, dir.toggle().toggle()));
        assert_eq!(before, after);
    }

    #[test]
    fn visible_items_does_not_reorder_the_source() {
        let store = ItemStore::seeded();
        let _ = visible_items(store.items(), &CategoryFilter::All, SortDirection::Ascending);
        let ids: Vec<&str> = store.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }
}
