//! Notifications for the embedding page.

use serde_json::{Value, json};

use crate::error::Error;
use crate::item::{Item, ItemValue};

/// Something the embedding page may want to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The selection settled after a mutation.
    SelectionChanged,
    /// An item was added to the selection.
    ItemAdded(Item),
    /// The item with this value left the selection.
    ItemRemoved(ItemValue),
    /// The user invoked the addable affordance.
    AddableRequested,
    /// The preload fetch failed; the catalog is unchanged.
    PreloadFailed(Error),
    /// A remote search failed; the stale catalog is kept.
    SearchFailed(Error),
    /// Creating an item failed; nothing was added.
    AddableFailed(Error),
}

impl Event {
    /// Returns the DOM event name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectionChanged => "multiselect-change",
            Self::ItemAdded(_) => "multiselect-added",
            Self::ItemRemoved(_) => "multiselect-removed",
            Self::AddableRequested => "multiselect-addable",
            Self::PreloadFailed(_) => "multiselect-preload-failed",
            Self::SearchFailed(_) => "multiselect-search-failed",
            Self::AddableFailed(_) => "multiselect-addable-failed",
        }
    }

    /// Returns the event's `detail` payload.
    pub fn detail(&self) -> Value {
        match self {
            Self::SelectionChanged | Self::AddableRequested => Value::Null,
            Self::ItemAdded(item) => json!({ "item": item }),
            Self::ItemRemoved(value) => json!({ "id": value }),
            Self::PreloadFailed(err) | Self::SearchFailed(err) | Self::AddableFailed(err) => {
                json!({ "error": err.to_string() })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::SelectionChanged.name(), "multiselect-change");
        assert_eq!(Event::AddableRequested.name(), "multiselect-addable");
        assert_eq!(
            Event::ItemRemoved(ItemValue::from(1)).name(),
            "multiselect-removed"
        );
    }

    #[test]
    fn test_added_detail_carries_item() {
        let detail = Event::ItemAdded(Item::new(4, "Durian")).detail();
        assert_eq!(detail, json!({"item": {"value": 4, "text": "Durian"}}));
    }

    #[test]
    fn test_removed_detail_carries_id() {
        let detail = Event::ItemRemoved(ItemValue::from("7")).detail();
        assert_eq!(detail, json!({"id": "7"}));
    }

    #[test]
    fn test_failure_detail() {
        let detail = Event::SearchFailed(Error::network("HTTP 502")).detail();
        assert_eq!(detail, json!({"error": "network error: HTTP 502"}));
    }
}
