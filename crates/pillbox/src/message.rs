//! Message types driving the component.
//!
//! Messages are the only way to update a [`Multiselect`](crate::Multiselect).
//! Page input (typing, clicks, key presses) and the results of commands
//! (debounce ticks, fetch responses) all arrive as messages.

use std::any::Any;
use std::fmt;

use crate::error::Result;
use crate::item::{Item, ItemValue};
use crate::keys::Key;

/// A type-erased message container.
///
/// Messages can be any type that is `Send + 'static`. Use [`Message::new`] to
/// create a message and [`Message::downcast`] to retrieve the original type.
///
/// # Example
///
/// ```rust
/// use pillbox::message::{InputMsg, Message};
///
/// let msg = Message::new(InputMsg::new("an"));
/// assert_eq!(msg.downcast_ref::<InputMsg>().map(|m| m.value.as_str()), Some("an"));
/// ```
pub struct Message(Box<dyn Any + Send>);

impl Message {
    /// Create a new message from any sendable type.
    pub fn new<M: Any + Send + 'static>(msg: M) -> Self {
        Self(Box::new(msg))
    }

    /// Try to downcast to a specific message type.
    pub fn downcast<M: Any + Send + 'static>(self) -> Option<M> {
        self.0.downcast::<M>().ok().map(|b| *b)
    }

    /// Try to get a reference to the message as a specific type.
    pub fn downcast_ref<M: Any + Send + 'static>(&self) -> Option<&M> {
        self.0.downcast_ref::<M>()
    }

    /// Check if the message is of a specific type.
    pub fn is<M: Any + Send + 'static>(&self) -> bool {
        self.0.is::<M>()
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message").finish_non_exhaustive()
    }
}

// Page input

/// The search field's text changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputMsg {
    /// Full text of the search field.
    pub value: String,
}

impl InputMsg {
    /// Creates an input message.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A key was pressed while focus was inside the component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMsg {
    /// The key, already mapped from its DOM name.
    pub key: Key,
}

impl KeyMsg {
    /// Creates a key message.
    pub fn new(key: Key) -> Self {
        Self { key }
    }
}

/// A list row's checkbox was clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxMsg {
    /// Value of the clicked row.
    pub value: ItemValue,
}

/// A pill's delete affordance was clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovePillMsg {
    /// Value of the pill.
    pub value: ItemValue,
}

/// The container (pills and input area) was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerClickMsg;

/// The container received focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerFocusMsg;

/// The "add this term" affordance was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddableClickMsg;

/// A click landed outside the component with this id.
///
/// Produced by [`ClickHub::click`](crate::click::ClickHub::click) only for
/// subscribed instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutsideClickMsg {
    /// Target component id.
    pub id: u64,
}

// Command results

/// The debounce delay elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceMsg {
    /// Target component id.
    pub id: u64,
    /// Debounce generation; only the latest one is honoured.
    pub(crate) tag: u64,
}

/// Response of a remote search.
#[derive(Debug, Clone)]
pub struct SearchResultMsg {
    /// Target component id.
    pub id: u64,
    /// Request token; responses for anything but the latest are dropped.
    pub token: u64,
    /// Items or the failure.
    pub result: Result<Vec<Item>>,
}

/// Response of the preload fetch.
#[derive(Debug, Clone)]
pub struct PreloadResultMsg {
    /// Target component id.
    pub id: u64,
    /// Items or the failure.
    pub result: Result<Vec<Item>>,
}

/// Response of an addable request.
#[derive(Debug, Clone)]
pub struct AddableResultMsg {
    /// Target component id.
    pub id: u64,
    /// The created item or the failure.
    pub result: Result<Item>,
}
