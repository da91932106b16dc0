#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Pillbox
//!
//! A searchable multi-select dropdown, modeled as a headless component in the
//! Elm Architecture.
//!
//! One source of truth, the selection, drives three dependent views that are
//! kept in sync after every mutation:
//! - **list** - checkbox rows for the current search, with a keyboard focus marker
//! - **pills** - one chip per selected item
//! - **hidden field** - the native multi-value form control submitted with the form
//!
//! Typed input filters the catalog locally or replaces it through a debounced
//! remote search. An optional addable endpoint creates items for terms that
//! match nothing.
//!
//! The page feeds DOM input in as [`Message`]s and runs returned [`Cmd`]s;
//! the component reports back through [`Event`]s and its rendered views.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use pillbox::prelude::*;
//!
//! let config = Config::new()
//!     .with_items(vec![Item::new(1, "Apple"), Item::new(2, "Banana")])
//!     .with_debounce(std::time::Duration::ZERO);
//! let ms = Multiselect::new(config, Arc::new(StaticBackend::default())).unwrap();
//!
//! let mut harness = Harness::new(ms);
//! harness.send(Message::new(KeyMsg::new(Key::ArrowDown)));
//! harness.send(Message::new(KeyMsg::new(Key::Enter)));
//! harness.run_until_empty();
//!
//! assert_eq!(harness.model().values(), vec![ItemValue::from(1)]);
//! ```

pub mod backend;
pub mod catalog;
pub mod click;
pub mod command;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod event;
pub mod harness;
pub mod hidden;
pub mod item;
pub mod keys;
pub mod markup;
pub mod message;
pub mod render;
pub mod search;
pub mod selection;

mod multiselect;

pub use command::Cmd;
pub use config::Config;
pub use error::{Error, Result};
pub use event::Event;
pub use item::{Item, ItemValue};
pub use message::Message;
pub use multiselect::Multiselect;

/// The Elm Architecture contract a component implements.
pub trait Model: Send + 'static {
    /// Returns the command to run once the component is mounted.
    fn init(&self) -> Option<Cmd>;

    /// Process a message and return a new command.
    fn update(&mut self, msg: Message) -> Option<Cmd>;

    /// Render the model as markup.
    fn view(&self) -> String;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::Model;
    pub use crate::backend::{Backend, StaticBackend};
    pub use crate::click::{ClickHub, Subscription};
    pub use crate::command::Cmd;
    pub use crate::config::{AddableMatch, Config, SearchMode};
    pub use crate::dropdown::{Dropdown, InputArea};
    pub use crate::error::{Error, Result};
    pub use crate::event::Event;
    pub use crate::harness::Harness;
    pub use crate::hidden::{HiddenField, NativeOption};
    pub use crate::item::{Item, ItemValue};
    pub use crate::keys::{Key, KeyAction};
    pub use crate::message::{
        AddableClickMsg, CheckboxMsg, ContainerClickMsg, ContainerFocusMsg, InputMsg, KeyMsg,
        Message, OutsideClickMsg, RemovePillMsg,
    };
    pub use crate::multiselect::Multiselect;
    pub use crate::render::{ListView, Pill, Row};
    pub use crate::selection::Selection;
}
