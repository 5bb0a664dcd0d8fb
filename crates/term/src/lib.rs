//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the game is painted into a plain
//! framebuffer ([`GameView`]) and the framebuffer is flushed to the terminal
//! ([`TerminalRenderer`]). Painting never does I/O, so it can be exercised
//! headless.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, WellLayout};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
