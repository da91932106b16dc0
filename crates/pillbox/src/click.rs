//! Outside-click routing.
//!
//! Instead of every component listening on the whole page, the page owns one
//! [`ClickHub`]. A component subscribes while it is active and holds the
//! returned [`Subscription`]; dropping the subscription unsubscribes, so torn
//! down instances never receive clicks.
//!
//! # Example
//!
//! ```rust
//! use pillbox::click::ClickHub;
//!
//! let hub = ClickHub::new();
//! let a = hub.subscribe(1);
//! let _b = hub.subscribe(2);
//!
//! // A click inside component 1 is an outside click for component 2 only.
//! let msgs = hub.click(Some(1));
//! assert_eq!(msgs.len(), 1);
//!
//! drop(a);
//! assert_eq!(hub.click(None).len(), 1);
//! ```

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::message::{Message, OutsideClickMsg};

/// Page-wide registry of components interested in outside clicks.
#[derive(Debug, Clone, Default)]
pub struct ClickHub {
    subscribers: Arc<Mutex<BTreeSet<u64>>>,
}

impl ClickHub {
    /// Creates an empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers component `id` until the returned guard is dropped.
    #[must_use]
    pub fn subscribe(&self, id: u64) -> Subscription {
        self.subscribers.lock().insert(id);
        tracing::trace!(id, "outside-click subscribed");
        Subscription {
            id,
            subscribers: Arc::clone(&self.subscribers),
        }
    }

    /// Routes a page click.
    ///
    /// `inside` is the id of the component the click landed in, if any. Every
    /// other subscriber gets an [`OutsideClickMsg`].
    pub fn click(&self, inside: Option<u64>) -> Vec<Message> {
        self.subscribers
            .lock()
            .iter()
            .copied()
            .filter(|&id| Some(id) != inside)
            .map(|id| Message::new(OutsideClickMsg { id }))
            .collect()
    }

    /// Returns the number of subscribed components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.lock().len()
    }

    /// Returns true when nothing is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.lock().is_empty()
    }
}

/// Guard that keeps a component subscribed to a [`ClickHub`].
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    subscribers: Arc<Mutex<BTreeSet<u64>>>,
}

impl Subscription {
    /// Returns the subscribed component id.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.subscribers.lock().remove(&self.id);
        tracing::trace!(id = self.id, "outside-click unsubscribed");
    }
}
