//! The search pipeline.
//!
//! Typed text becomes either a local filter over the catalog or a remote
//! fetch that replaces it. Both go through a debounce: every keystroke bumps
//! a tag, and only the tick carrying the latest tag runs the search. Remote
//! fetches additionally carry a token so a response for a stale term can be
//! dropped whatever order responses arrive in.

use crate::catalog::Catalog;
use crate::config::SearchMode;
use crate::item::Item;
use crate::selection::Selection;

/// Result of filtering the catalog locally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matches {
    /// Selected items whose label contains the term, rendered checked.
    pub selected: Vec<Item>,
    /// Unselected catalog items whose label contains the term.
    pub rest: Vec<Item>,
}

impl Matches {
    /// Returns true when neither group has rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty() && self.rest.is_empty()
    }

    /// Returns the total row count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len() + self.rest.len()
    }
}

/// Filters `catalog` against `term`, case-insensitively.
///
/// An empty term lists the whole selection followed by every catalog item not
/// in it. Otherwise matching selection entries come first and catalog matches
/// that duplicate one of them are dropped.
#[must_use]
pub fn filter_local(catalog: &Catalog, selection: &Selection, term: &str) -> Matches {
    if term.is_empty() {
        return Matches {
            selected: selection.to_vec(),
            rest: catalog
                .items()
                .iter()
                .filter(|i| !selection.contains(&i.value))
                .cloned()
                .collect(),
        };
    }

    let selected: Vec<Item> = selection
        .as_slice()
        .iter()
        .filter(|i| i.matches(term))
        .cloned()
        .collect();
    let rest = catalog
        .items()
        .iter()
        .filter(|i| i.matches(term))
        .filter(|i| !selected.iter().any(|s| s.value == i.value))
        .cloned()
        .collect();

    Matches { selected, rest }
}

/// Search state: the current term plus debounce and request bookkeeping.
#[derive(Debug, Clone)]
pub struct SearchPipeline {
    term: String,
    mode: SearchMode,
    debounce_tag: u64,
    token: u64,
}

impl SearchPipeline {
    /// Creates a pipeline in the given mode with an empty term.
    #[must_use]
    pub fn new(mode: SearchMode) -> Self {
        Self {
            term: String::new(),
            mode,
            debounce_tag: 0,
            token: 0,
        }
    }

    /// Returns the search mode.
    #[must_use]
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Returns the current term.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Sets the term.
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    /// Clears the term.
    pub fn clear_term(&mut self) {
        self.term.clear();
    }

    /// Starts a new debounce generation and returns its tag.
    ///
    /// Any tick scheduled earlier becomes stale.
    pub fn schedule(&mut self) -> u64 {
        self.debounce_tag = self.debounce_tag.wrapping_add(1);
        self.debounce_tag
    }

    /// Returns true if a tick with this tag should run the search.
    #[must_use]
    pub fn is_current_tick(&self, tag: u64) -> bool {
        tag == self.debounce_tag
    }

    /// Issues the token for a new remote request.
    pub fn issue_token(&mut self) -> u64 {
        self.token = self.token.wrapping_add(1);
        self.token
    }

    /// Returns true if `token` belongs to the latest issued request.
    #[must_use]
    pub fn is_latest(&self, token: u64) -> bool {
        token == self.token
    }

    /// Invalidates any scheduled tick and in-flight request.
    pub fn cancel(&mut self) {
        self.schedule();
        self.issue_token();
    }
}
