//! Selectable items and their identifiers.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Identifier of an item.
///
/// Endpoints may send numeric or string ids. Two values are equal when their
/// string forms are equal, so `1` and `"1"` identify the same item. Numbers
/// keep their JSON form: `1.5` and `18446744073709551615` are valid ids, and
/// `1.0` is not the same id as `1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemValue {
    /// A numeric id, integer or float.
    Number(Number),
    /// A string id.
    Text(String),
}

impl ItemValue {
    /// Returns the canonical string form used for identity and markup.
    pub fn as_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ItemValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl PartialEq for ItemValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => self.as_key() == other.as_key(),
        }
    }
}

impl Eq for ItemValue {}

impl Hash for ItemValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_key().hash(state);
    }
}

impl From<Number> for ItemValue {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for ItemValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<i32> for ItemValue {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<u64> for ItemValue {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for ItemValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ItemValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A selectable entry: a stable identifier plus a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Identity of the item.
    pub value: ItemValue,
    /// Searchable, displayed label.
    pub text: String,
}

impl Item {
    /// Creates a new item.
    pub fn new(value: impl Into<ItemValue>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }

    /// Returns true when the label contains `term`, ignoring case.
    pub fn matches(&self, term: &str) -> bool {
        self.text.to_lowercase().contains(&term.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_value_equality_across_kinds() {
        assert_eq!(ItemValue::from(7), ItemValue::from("7"));
        assert_ne!(ItemValue::from(7), ItemValue::from("07"));
    }

    #[test]
    fn test_value_hash_matches_equality() {
        let mut set = HashSet::new();
        set.insert(ItemValue::from(3));
        assert!(set.contains(&ItemValue::from("3")));
    }

    #[test]
    fn test_item_deserializes_numeric_and_string_ids() {
        let items: Vec<Item> =
            serde_json::from_str(r#"[{"value":1,"text":"Apple"},{"value":"b","text":"Banana"}]"#)
                .unwrap();
        assert_eq!(items[0].value, ItemValue::from(1));
        assert_eq!(items[1].value, ItemValue::Text("b".into()));
    }

    #[test]
    fn test_item_deserializes_float_and_wide_ids() {
        let items: Vec<Item> = serde_json::from_str(
            r#"[{"value":1.5,"text":"A"},{"value":2,"text":"B"},{"value":18446744073709551615,"text":"C"}]"#,
        )
        .unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].value, ItemValue::from("1.5"));
        assert_eq!(items[1].value, ItemValue::from(2));
        assert_eq!(items[2].value, ItemValue::from(u64::MAX));
        assert_eq!(items[2].value.as_key(), "18446744073709551615");
    }

    #[test]
    fn test_float_and_integer_forms_are_distinct() {
        let one: ItemValue = serde_json::from_str("1").unwrap();
        let one_float: ItemValue = serde_json::from_str("1.0").unwrap();
        assert_eq!(one_float.as_key(), "1.0");
        assert_ne!(one, one_float);
    }

    #[test]
    fn test_numeric_id_serializes_unchanged() {
        let value: ItemValue = serde_json::from_str("1.5").unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), "1.5");
    }

    #[test]
    fn test_item_matches_ignores_case() {
        let item = Item::new(2, "Banana");
        assert!(item.matches("AN"));
        assert!(item.matches(""));
        assert!(!item.matches("xyz"));
    }
}
