//! Event handling for TraderVerse.
//!
//! Terminal input is polled and translated into [`Action`]s using the
//! configured key bindings plus per-panel hardcoded keys.
//!
//! [`Action`]: crate::state::Action

mod handler;
mod input;

pub use handler::EventHandler;
pub use input::{InputEvent, Key, Modifiers};
