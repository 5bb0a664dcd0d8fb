//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. There is no
//! repeat logic here: a held key repeats only if the terminal itself sends
//! repeat events.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
