//! Pure projections from state to views.
//!
//! Nothing here reads component state implicitly: each function takes the
//! snapshot it needs and returns a fresh view. The component calls them at
//! fixed points (after a search, after a selection mutation, on outside
//! click) and keeps the result.

use crate::catalog::Catalog;
use crate::item::{Item, ItemValue};
use crate::search::Matches;
use crate::selection::Selection;

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The item behind the row.
    pub item: Item,
    /// Checkbox state.
    pub checked: bool,
    /// Whether the row carries the keyboard-focus marker.
    pub focused: bool,
}

impl Row {
    fn new(item: Item, checked: bool) -> Self {
        Self {
            item,
            checked,
            focused: false,
        }
    }
}

/// What the dropdown list area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// Checkbox rows, possibly none.
    Rows(Vec<Row>),
    /// The no-results message.
    NoResults,
    /// The "add this term" prompt.
    Addable,
}

impl Default for ListView {
    fn default() -> Self {
        Self::Rows(Vec::new())
    }
}

impl ListView {
    /// Returns the rendered rows, empty for the message variants.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        match self {
            Self::Rows(rows) => rows,
            Self::NoResults | Self::Addable => &[],
        }
    }

    /// Returns the rows mutably, empty for the message variants.
    pub fn rows_mut(&mut self) -> &mut [Row] {
        match self {
            Self::Rows(rows) => rows,
            Self::NoResults | Self::Addable => &mut [],
        }
    }

    /// Sets the checkbox of the row with this value, if rendered.
    pub fn set_checked(&mut self, value: &ItemValue, checked: bool) {
        for row in self.rows_mut().iter_mut().filter(|r| &r.item.value == value) {
            row.checked = checked;
        }
    }

    /// Moves the focus marker to `index`, clearing it everywhere else.
    pub fn focus(&mut self, index: Option<usize>) {
        for (i, row) in self.rows_mut().iter_mut().enumerate() {
            row.focused = Some(i) == index;
        }
    }

    /// Returns the index of the focused row.
    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.rows().iter().position(|r| r.focused)
    }

    /// Returns the index of the first row with this value.
    #[must_use]
    pub fn position(&self, value: &ItemValue) -> Option<usize> {
        self.rows().iter().position(|r| &r.item.value == value)
    }
}

/// Renders the result of a local search.
///
/// Checked selection matches come first, then unchecked catalog matches. No
/// rows at all yields the addable prompt when `addable` is set, otherwise an
/// empty row list.
#[must_use]
pub fn search_view(matches: Matches, addable: bool) -> ListView {
    if matches.is_empty() && addable {
        return ListView::Addable;
    }
    let Matches { selected, rest } = matches;
    let rows = selected
        .into_iter()
        .map(|item| Row::new(item, true))
        .chain(rest.into_iter().map(|item| Row::new(item, false)))
        .collect();
    ListView::Rows(rows)
}

/// Renders the whole catalog in source order with selected rows checked.
///
/// An empty catalog shows the addable prompt or the no-results message.
#[must_use]
pub fn listing(catalog: &Catalog, selection: &Selection, addable: bool) -> ListView {
    if catalog.is_empty() {
        return if addable {
            ListView::Addable
        } else {
            ListView::NoResults
        };
    }
    ListView::Rows(
        catalog
            .items()
            .iter()
            .map(|item| Row::new(item.clone(), selection.contains(&item.value)))
            .collect(),
    )
}

/// A chip in the preview area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pill {
    /// The selected item.
    pub item: Item,
    /// Whether the delete affordance is shown.
    pub deletable: bool,
}

/// Renders one pill per selection entry, in selection order.
#[must_use]
pub fn pills(selection: &Selection, disabled: bool) -> Vec<Pill> {
    selection
        .as_slice()
        .iter()
        .map(|item| Pill {
            item: item.clone(),
            deletable: !disabled,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::filter_local;

    fn fruit() -> Catalog {
        Catalog::new(vec![
            Item::new(1, "Apple"),
            Item::new(2, "Banana"),
            Item::new(3, "Cherry"),
        ])
    }

    #[test]
    fn test_search_view_checks_selected_first() {
        let sel = Selection::from_items(vec![Item::new(2, "Banana")]);
        let view = search_view(filter_local(&fruit(), &sel, "a"), false);
        let rows = view.rows();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].checked);
        assert_eq!(rows[0].item.text, "Banana");
        assert!(!rows[1].checked);
        assert_eq!(rows[1].item.text, "Apple");
    }

    #[test]
    fn test_search_view_addable_when_empty() {
        let view = search_view(filter_local(&fruit(), &Selection::new(), "xyz"), true);
        assert_eq!(view, ListView::Addable);
        let view = search_view(filter_local(&fruit(), &Selection::new(), "xyz"), false);
        assert_eq!(view, ListView::Rows(Vec::new()));
    }

    #[test]
    fn test_listing_keeps_catalog_order() {
        let sel = Selection::from_items(vec![Item::new(3, "Cherry")]);
        let view = listing(&fruit(), &sel, false);
        let checked: Vec<bool> = view.rows().iter().map(|r| r.checked).collect();
        assert_eq!(checked, vec![false, false, true]);
    }

    #[test]
    fn test_listing_empty_catalog() {
        let empty = Catalog::default();
        assert_eq!(listing(&empty, &Selection::new(), false), ListView::NoResults);
        assert_eq!(listing(&empty, &Selection::new(), true), ListView::Addable);
    }

    #[test]
    fn test_focus_is_exclusive() {
        let mut view = listing(&fruit(), &Selection::new(), false);
        view.focus(Some(1));
        view.focus(Some(2));
        let focused: Vec<bool> = view.rows().iter().map(|r| r.focused).collect();
        assert_eq!(focused, vec![false, false, true]);
        assert_eq!(view.focused(), Some(2));
    }

    #[test]
    fn test_set_checked_by_value() {
        let mut view = listing(&fruit(), &Selection::new(), false);
        view.set_checked(&ItemValue::from("1"), true);
        assert!(view.rows()[0].checked);
        view.set_checked(&ItemValue::from(1), false);
        assert!(!view.rows()[0].checked);
    }

    #[test]
    fn test_pills_follow_disabled_flag() {
        let sel = Selection::from_items(vec![Item::new(1, "Apple")]);
        assert!(pills(&sel, false)[0].deletable);
        assert!(!pills(&sel, true)[0].deletable);
    }
}
