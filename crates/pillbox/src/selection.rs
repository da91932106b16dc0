//! The selection store.
//!
//! An ordered list of chosen items, unique by value. Readers only ever get
//! shared slices or owned copies; every mutation goes through
//! [`toggle`](Selection::toggle), [`remove_by_value`](Selection::remove_by_value),
//! [`pop_last`](Selection::pop_last) or [`insert`](Selection::insert).

use crate::item::{Item, ItemValue};

/// What a mutation did to the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// The item was appended.
    Added(Item),
    /// The item with this value was removed.
    Removed(ItemValue),
}

/// Ordered, deduplicated selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: Vec<Item>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from initial items, dropping repeated values.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut selection = Self::new();
        for item in items {
            selection.insert(item);
        }
        selection
    }

    /// Applies a checkbox transition.
    ///
    /// `checked == true` appends the item unless its value is already present;
    /// `checked == false` removes the entry with the same value. Returns the
    /// change, or `None` when nothing moved.
    pub fn toggle(&mut self, item: Item, checked: bool) -> Option<Change> {
        if checked {
            self.insert(item)
        } else {
            self.remove_by_value(&item.value)
        }
    }

    /// Appends `item` if no entry shares its value.
    pub fn insert(&mut self, item: Item) -> Option<Change> {
        if self.contains(&item.value) {
            return None;
        }
        self.items.push(item.clone());
        Some(Change::Added(item))
    }

    /// Removes the entry whose value matches, keeping the order of the rest.
    pub fn remove_by_value(&mut self, value: &ItemValue) -> Option<Change> {
        let pos = self.items.iter().position(|i| &i.value == value)?;
        let removed = self.items.remove(pos);
        Some(Change::Removed(removed.value))
    }

    /// Removes and returns the most recently added item.
    pub fn pop_last(&mut self) -> Option<Item> {
        self.items.pop()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns true if an entry has this value.
    #[must_use]
    pub fn contains(&self, value: &ItemValue) -> bool {
        self.items.iter().any(|i| &i.value == value)
    }

    /// Returns the entries in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    /// Returns an owned copy of the entries.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Returns the selected values in order.
    #[must_use]
    pub fn values(&self) -> Vec<ItemValue> {
        self.items.iter().map(|i| i.value.clone()).collect()
    }

    /// Returns the values joined with commas, as sent in `preselects`.
    #[must_use]
    pub fn values_csv(&self) -> String {
        self.items
            .iter()
            .map(|i| i.value.as_key())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banana() -> Item {
        Item::new(2, "Banana")
    }

    #[test]
    fn test_toggle_on_appends() {
        let mut sel = Selection::new();
        let change = sel.toggle(banana(), true);
        assert_eq!(change, Some(Change::Added(banana())));
        assert_eq!(sel.as_slice(), &[banana()]);
    }

    #[test]
    fn test_toggle_on_twice_keeps_one_entry() {
        let mut sel = Selection::new();
        sel.toggle(banana(), true);
        assert_eq!(sel.toggle(banana(), true), None);
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn test_toggle_off_removes_by_value() {
        let mut sel = Selection::from_items(vec![Item::new(1, "Apple"), banana()]);
        let change = sel.toggle(Item::new("2", "Banana"), false);
        assert_eq!(change, Some(Change::Removed(ItemValue::from(2))));
        assert_eq!(sel.values(), vec![ItemValue::from(1)]);
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut sel = Selection::from_items(vec![
            Item::new(1, "Apple"),
            banana(),
            Item::new(3, "Cherry"),
        ]);
        sel.remove_by_value(&ItemValue::from(2));
        assert_eq!(sel.values_csv(), "1,3");
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut sel = Selection::from_items(vec![banana()]);
        assert_eq!(sel.remove_by_value(&ItemValue::from(9)), None);
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn test_pop_last_is_stack_pop() {
        let mut sel = Selection::from_items(vec![Item::new(1, "Apple"), banana()]);
        assert_eq!(sel.pop_last(), Some(banana()));
        assert_eq!(sel.pop_last(), Some(Item::new(1, "Apple")));
        assert_eq!(sel.pop_last(), None);
    }

    #[test]
    fn test_from_items_dedups() {
        let sel = Selection::from_items(vec![banana(), Item::new("2", "Banana again")]);
        assert_eq!(sel.len(), 1);
        assert_eq!(sel.as_slice()[0].text, "Banana");
    }
}
