//! Commands for side effects.
//!
//! Commands are the only way the component performs IO: waiting out the
//! debounce delay and calling the search, preload and addable endpoints.
//! `update` stays synchronous and returns a [`Cmd`]; the host runs it on
//! whatever executor it likes and feeds the resulting [`Message`] back.

use std::time::Duration;

use crate::message::{DebounceMsg, Message};

/// A command that produces a message when executed.
///
/// Commands are lazy - they don't execute until the host runs them.
///
/// # Example
///
/// ```rust
/// use pillbox::command::Cmd;
/// use pillbox::message::{ContainerClickMsg, Message};
///
/// let cmd = Cmd::new(|| Message::new(ContainerClickMsg));
/// assert!(cmd.execute().unwrap().is::<ContainerClickMsg>());
/// ```
pub struct Cmd(Box<dyn FnOnce() -> Option<Message> + Send + 'static>);

impl Cmd {
    /// Create a new command from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Message + Send + 'static,
    {
        Self(Box::new(move || Some(f())))
    }

    /// Execute the command and return the resulting message.
    pub fn execute(self) -> Option<Message> {
        (self.0)()
    }
}

impl std::fmt::Debug for Cmd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cmd").finish_non_exhaustive()
    }
}

/// Command that yields a [`DebounceMsg`] after `delay`.
///
/// The tag identifies the keystroke that scheduled it; the component ignores
/// ticks whose tag is no longer current, so only the last of a burst of
/// keystrokes reaches the search pipeline.
pub fn debounce(delay: Duration, id: u64, tag: u64) -> Cmd {
    Cmd::new(move || {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        Message::new(DebounceMsg { id, tag })
    })
}
