//! The pool of items currently available to choose from.

use crate::config::AddableMatch;
use crate::item::Item;

/// Ordered item pool, replaced wholesale by preload and remote search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Creates a catalog from items in source order.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Replaces every item.
    pub fn replace(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    /// Appends one item.
    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Drops every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the items in source order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns true if some item's label equals `text` under `mode`.
    #[must_use]
    pub fn has_text(&self, text: &str, mode: AddableMatch) -> bool {
        match mode {
            AddableMatch::Exact => self.items.iter().any(|i| i.text == text),
            AddableMatch::CaseInsensitive => {
                let lower = text.to_lowercase();
                self.items.iter().any(|i| i.text.to_lowercase() == lower)
            }
        }
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when there is nothing to pick.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
