//! Component configuration.
//!
//! [`Config`] is the single source of truth for everything the embedding page
//! hands the component at activation: initial items, endpoints, flags and
//! display strings. It deserializes from the JSON the page renders into the
//! component's data attributes, so keys are camelCase.
//!
//! # Examples
//!
//! ```rust
//! use pillbox::config::{Config, SearchMode};
//!
//! let config = Config::from_json(r#"{
//!     "items": [{"value": 1, "text": "Apple"}],
//!     "searchUrl": "/fruits/search"
//! }"#).unwrap();
//!
//! assert_eq!(config.search_mode(), SearchMode::Remote);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::item::Item;

/// Default quiet period before a typed term is searched.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Where search results come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Filter the in-memory catalog.
    Local,
    /// Ask the search endpoint for a fresh catalog.
    Remote,
}

/// How the addable flow decides a term already exists in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddableMatch {
    /// Label must equal the term byte for byte.
    #[default]
    Exact,
    /// Label must equal the term ignoring case, like search filtering.
    CaseInsensitive,
}

/// Runtime configuration for one component instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    // ========================================================================
    // Data
    // ========================================================================
    /// Initial catalog.
    pub items: Vec<Item>,

    /// Initial selection.
    pub selected: Vec<Item>,

    // ========================================================================
    // Endpoints
    // ========================================================================
    /// Remote search endpoint. Setting it forces remote search.
    pub search_url: Option<String>,

    /// Endpoint fetched once at activation to fill the catalog.
    pub preload_url: Option<String>,

    /// Endpoint that creates an item from an unmatched term.
    pub addable_url: Option<String>,

    // ========================================================================
    // Flags
    // ========================================================================
    /// Search remotely even without an explicit `search_url` check.
    pub search_remote: bool,

    /// Read-only mode: no pill delete affordance, search input disabled.
    pub disabled: bool,

    /// How addable terms are compared against existing labels.
    pub addable_match: AddableMatch,

    /// Debounce delay in milliseconds.
    pub debounce_ms: u64,

    // ========================================================================
    // Display strings
    // ========================================================================
    /// Search input placeholder.
    pub placeholder: String,

    /// Shown when a search matches nothing and nothing can be added.
    pub no_results_message: String,

    /// Label of the "add this term" affordance.
    pub addable_placeholder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: Vec::new(),
            search_url: None,
            preload_url: None,
            addable_url: None,
            search_remote: false,
            disabled: false,
            addable_match: AddableMatch::Exact,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            placeholder: "Search...".to_string(),
            no_results_message: "No results".to_string(),
            addable_placeholder: "Add new item".to_string(),
        }
    }
}

impl Config {
    /// Create a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration for contradictions.
    pub fn validate(&self) -> Result<()> {
        if self.search_remote && self.search_url.is_none() {
            return Err(Error::config("searchRemote requires a searchUrl"));
        }
        if let Some(url) = [&self.search_url, &self.preload_url, &self.addable_url]
            .into_iter()
            .flatten()
            .find(|u| u.trim().is_empty())
        {
            return Err(Error::config(format!("empty endpoint url {url:?}")));
        }
        Ok(())
    }

    /// Returns the effective search mode.
    #[must_use]
    pub fn search_mode(&self) -> SearchMode {
        if self.search_remote || self.search_url.is_some() {
            SearchMode::Remote
        } else {
            SearchMode::Local
        }
    }

    /// Returns true when the addable flow is configured.
    #[must_use]
    pub fn is_addable(&self) -> bool {
        self.addable_url.is_some()
    }

    /// Returns the debounce delay.
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Sets the initial catalog.
    #[must_use]
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    /// Sets the initial selection.
    #[must_use]
    pub fn with_selected(mut self, selected: Vec<Item>) -> Self {
        self.selected = selected;
        self
    }

    /// Sets the remote search endpoint.
    #[must_use]
    pub fn with_search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = Some(url.into());
        self
    }

    /// Sets the preload endpoint.
    #[must_use]
    pub fn with_preload_url(mut self, url: impl Into<String>) -> Self {
        self.preload_url = Some(url.into());
        self
    }

    /// Sets the addable endpoint.
    #[must_use]
    pub fn with_addable_url(mut self, url: impl Into<String>) -> Self {
        self.addable_url = Some(url.into());
        self
    }

    /// Sets the disabled flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the addable comparison mode.
    #[must_use]
    pub fn with_addable_match(mut self, mode: AddableMatch) -> Self {
        self.addable_match = mode;
        self
    }

    /// Sets the debounce delay.
    #[must_use]
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debounce_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }
}
