#![forbid(unsafe_code)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Pillbox HTTP
//!
//! A [`Backend`] that talks to the search, preload and addable endpoints over
//! HTTP with a blocking `reqwest` client. Component commands run off the UI
//! thread, so blocking here is fine.
//!
//! Failures map onto the component's error taxonomy: a transport failure or
//! non-2xx status is [`Error::Network`], a body that is not item JSON is
//! [`Error::Parse`]. Nothing is retried; the next user action tries again.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pillbox::{Config, Multiselect};
//! use pillbox_http::HttpBackend;
//!
//! let config = Config::new().with_search_url("https://example.com/tags/search");
//! let backend = HttpBackend::new()?;
//! let ms = Multiselect::new(config, Arc::new(backend))?;
//! # Ok::<(), pillbox::Error>(())
//! ```

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use pillbox::backend::Backend;
use pillbox::{Error, Item, Result};

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("pillbox/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize)]
struct AddableBody<'a> {
    addable: &'a str,
}

/// HTTP implementation of [`Backend`].
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
}

impl HttpBackend {
    /// Creates a backend with no request timeout.
    pub fn new() -> Result<Self> {
        Self::build(None)
    }

    /// Creates a backend whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::network(format!("failed to build http client: {e}")))?;
        Ok(Self { client })
    }

    fn decode<T: DeserializeOwned>(url: &str, resp: reqwest::Result<Response>) -> Result<T> {
        let resp = resp.map_err(|e| {
            warn!(%url, error = %e, "request failed");
            Error::network(e.to_string())
        })?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            warn!(%url, status = status.as_u16(), "non-success response");
            return Err(Error::network(format!(
                "{url}: HTTP {}: {body}",
                status.as_u16()
            )));
        }
        let text = resp.text().map_err(|e| Error::network(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| Error::parse(format!("{url}: {e}")))
    }
}

impl Backend for HttpBackend {
    fn search(&self, url: &str, term: &str, preselects: &str) -> Result<Vec<Item>> {
        debug!(%url, %term, %preselects, "GET search");
        let resp = self
            .client
            .get(url)
            .query(&[("q", term), ("preselects", preselects)])
            .send();
        Self::decode(url, resp)
    }

    fn preload(&self, url: &str) -> Result<Vec<Item>> {
        debug!(%url, "GET preload");
        Self::decode(url, self.client.get(url).send())
    }

    fn add(&self, url: &str, term: &str) -> Result<Item> {
        debug!(%url, %term, "POST addable");
        let resp = self
            .client
            .post(url)
            .json(&AddableBody { addable: term })
            .send();
        Self::decode(url, resp)
    }
}
