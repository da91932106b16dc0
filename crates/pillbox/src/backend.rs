//! Endpoint access.
//!
//! The component never talks to the network itself. Its commands call a
//! [`Backend`], so the transport can be HTTP (see the `pillbox-http` crate),
//! a test double, or anything else that can answer the three requests.

use std::sync::atomic::{AtomicI64, Ordering};

use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::item::Item;

/// The three endpoints the component may call.
pub trait Backend: Send + Sync + 'static {
    /// `GET <url>?q=<term>&preselects=<csv>`.
    fn search(&self, url: &str, term: &str, preselects: &str) -> Result<Vec<Item>>;

    /// `GET <url>`.
    fn preload(&self, url: &str) -> Result<Vec<Item>>;

    /// `POST <url>` with `{"addable": term}`.
    fn add(&self, url: &str, term: &str) -> Result<Item>;
}

/// A request recorded by [`StaticBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// A search request.
    Search {
        /// Endpoint.
        url: String,
        /// `q` parameter.
        term: String,
        /// `preselects` parameter.
        preselects: String,
    },
    /// A preload request.
    Preload {
        /// Endpoint.
        url: String,
    },
    /// An addable request.
    Add {
        /// Endpoint.
        url: String,
        /// Posted term.
        term: String,
    },
}

/// In-memory backend serving a fixed item list.
///
/// Searches filter the list by label, preload returns all of it, and add
/// appends a new item with the next numeric id. Every request is recorded.
#[derive(Debug)]
pub struct StaticBackend {
    items: Mutex<Vec<Item>>,
    next_id: AtomicI64,
    failure: Mutex<Option<Error>>,
    calls: Mutex<Vec<Call>>,
}

impl StaticBackend {
    /// Creates a backend serving `items`; new items get ids after the largest
    /// numeric id present.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        let max = items
            .iter()
            .filter_map(|i| i.value.as_key().parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            items: Mutex::new(items),
            next_id: AtomicI64::new(max + 1),
            failure: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Makes every following request fail with `err`; `None` heals it.
    pub fn fail_with(&self, err: Option<Error>) {
        *self.failure.lock() = err;
    }

    /// Returns the requests made so far.
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.lock().push(call);
        match self.failure.lock().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for StaticBackend {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Backend for StaticBackend {
    fn search(&self, url: &str, term: &str, preselects: &str) -> Result<Vec<Item>> {
        self.record(Call::Search {
            url: url.to_string(),
            term: term.to_string(),
            preselects: preselects.to_string(),
        })?;
        Ok(self
            .items
            .lock()
            .iter()
            .filter(|i| i.matches(term))
            .cloned()
            .collect())
    }

    fn preload(&self, url: &str) -> Result<Vec<Item>> {
        self.record(Call::Preload {
            url: url.to_string(),
        })?;
        Ok(self.items.lock().clone())
    }

    fn add(&self, url: &str, term: &str) -> Result<Item> {
        self.record(Call::Add {
            url: url.to_string(),
            term: term.to_string(),
        })?;
        let item = Item::new(self.next_id.fetch_add(1, Ordering::SeqCst), term);
        self.items.lock().push(item.clone());
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> StaticBackend {
        StaticBackend::new(vec![
            Item::new(1, "Apple"),
            Item::new(2, "Banana"),
            Item::new(3, "Cherry"),
        ])
    }

    #[test]
    fn test_search_filters_and_records() {
        let b = backend();
        let found = b.search("/s", "an", "1").unwrap();
        assert_eq!(found, vec![Item::new(2, "Banana")]);
        assert_eq!(
            b.calls(),
            vec![Call::Search {
                url: "/s".into(),
                term: "an".into(),
                preselects: "1".into(),
            }]
        );
    }

    #[test]
    fn test_add_assigns_next_id() {
        let b = backend();
        let item = b.add("/a", "Durian").unwrap();
        assert_eq!(item, Item::new(4, "Durian"));
        assert_eq!(b.preload("/p").unwrap().len(), 4);
    }

    #[test]
    fn test_failure_injection() {
        let b = backend();
        b.fail_with(Some(Error::network("HTTP 503")));
        assert!(b.preload("/p").unwrap_err().is_network());
        b.fail_with(None);
        assert!(b.preload("/p").is_ok());
        assert_eq!(b.calls().len(), 2);
    }
}
