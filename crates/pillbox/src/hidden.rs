//! The native multi-value form field.
//!
//! A `<select multiple>` whose options mirror the selection exactly. It is the
//! only thing that survives a form submission, so it is resynchronized in full
//! after every mutation.

use crate::item::{Item, ItemValue};
use crate::selection::Selection;

/// One `<option>` of the native field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeOption {
    /// Option value.
    pub value: ItemValue,
    /// Option label.
    pub text: String,
    /// Whether the option is marked selected.
    pub selected: bool,
}

impl From<&Item> for NativeOption {
    fn from(item: &Item) -> Self {
        Self {
            value: item.value.clone(),
            text: item.text.clone(),
            selected: true,
        }
    }
}

/// Model of the hidden native select.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiddenField {
    options: Vec<NativeOption>,
}

impl HiddenField {
    /// Creates a field with no options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every option with one selected option per selection entry.
    pub fn sync(&mut self, selection: &Selection) {
        self.options.clear();
        self.options
            .extend(selection.as_slice().iter().map(NativeOption::from));
    }

    /// Returns the options in order.
    #[must_use]
    pub fn options(&self) -> &[NativeOption] {
        &self.options
    }

    /// Returns the selected values, for consumers that only need ids.
    #[must_use]
    pub fn values(&self) -> Vec<ItemValue> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.clone())
            .collect()
    }

    /// Returns true when the options equal `selection`, same order and labels.
    #[must_use]
    pub fn mirrors(&self, selection: &Selection) -> bool {
        self.options.len() == selection.len()
            && self
                .options
                .iter()
                .zip(selection.as_slice())
                .all(|(o, i)| o.selected && o.value == i.value && o.text == i.text)
    }
}
