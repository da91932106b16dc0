//! Synchronous driver for testing components without a page.
//!
//! The harness plays the host's role: it queues messages, calls `update`,
//! executes returned commands inline and feeds their messages back. With a
//! zero debounce and an in-memory backend a whole interaction runs to
//! completion in one call.

use std::collections::VecDeque;

use crate::Model;
use crate::command::Cmd;
use crate::message::Message;

/// Statistics tracked while driving a model.
#[derive(Debug, Clone, Default)]
pub struct HarnessStats {
    /// Number of times init() was called.
    pub init_calls: usize,
    /// Number of times update() was called.
    pub update_calls: usize,
    /// Commands that were returned from init/update.
    pub commands_returned: usize,
}

/// A host stand-in for testing [`Model`] implementations.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use pillbox::{Config, Item, Multiselect};
/// use pillbox::backend::StaticBackend;
/// use pillbox::harness::Harness;
/// use pillbox::message::{InputMsg, Message};
///
/// let config = Config::new()
///     .with_items(vec![Item::new(1, "Apple"), Item::new(2, "Banana")])
///     .with_debounce(std::time::Duration::ZERO);
/// let ms = Multiselect::new(config, Arc::new(StaticBackend::default())).unwrap();
///
/// let mut harness = Harness::new(ms);
/// harness.send(Message::new(InputMsg::new("ban")));
/// harness.run_until_empty();
///
/// assert_eq!(harness.model().list().rows().len(), 1);
/// ```
pub struct Harness<M: Model> {
    model: M,
    queue: VecDeque<Message>,
    views: Vec<String>,
    stats: HarnessStats,
    initialized: bool,
}

impl<M: Model> Harness<M> {
    /// Create a new harness around the given model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            queue: VecDeque::new(),
            views: Vec::new(),
            stats: HarnessStats::default(),
            initialized: false,
        }
    }

    /// Initialize the model and queue the message its init command produces.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.stats.init_calls += 1;
        let cmd = self.model.init();
        if cmd.is_some() {
            self.stats.commands_returned += 1;
        }
        self.run_cmd(cmd);
        self.views.push(self.model.view());
    }

    /// Queue a message for processing.
    pub fn send(&mut self, msg: Message) {
        self.queue.push_back(msg);
    }

    /// Process one message from the queue and return the command it produced
    /// without executing it.
    pub fn step(&mut self) -> Option<Cmd> {
        if !self.initialized {
            self.init();
        }
        let msg = self.queue.pop_front()?;
        self.stats.update_calls += 1;
        let cmd = self.model.update(msg);
        if cmd.is_some() {
            self.stats.commands_returned += 1;
        }
        self.views.push(self.model.view());
        cmd
    }

    /// Initialize if needed, then process messages, executing commands
    /// inline, until the queue is empty.
    ///
    /// Returns the number of messages processed.
    pub fn run_until_empty(&mut self) -> usize {
        self.init();
        let mut processed = 0;
        while !self.queue.is_empty() {
            let cmd = self.step();
            self.run_cmd(cmd);
            processed += 1;
        }
        processed
    }

    fn run_cmd(&mut self, cmd: Option<Cmd>) {
        if let Some(msg) = cmd.and_then(Cmd::execute) {
            self.queue.push_back(msg);
        }
    }

    /// Get a reference to the current model state.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the current model state.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Consume the harness and return the final model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Get the statistics.
    pub fn stats(&self) -> &HarnessStats {
        &self.stats
    }

    /// Get the most recent view output.
    pub fn last_view(&self) -> Option<&str> {
        self.views.last().map(String::as_str)
    }

    /// Get the number of pending messages.
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }
}
