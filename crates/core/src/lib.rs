//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains every gameplay rule and no I/O: the terminal front end
//! and the key mapper live in sibling crates and talk to it only through
//! [`GameState`] and [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of locked cells, occupancy queries and the row sweep
//! - [`shapes`]: the seven-entry shape catalog, shape grids and clockwise rotation
//! - [`collision`]: side-effect-free placement checks
//! - [`rng`]: seeded uniform shape selection
//! - [`scoring`]: exponential line clear bonus
//! - [`timer`]: gravity schedule driven by elapsed time
//! - [`game_state`]: the session object tying it all together
//! - [`snapshot`]: read-only copy handed to renderers
//!
//! # Game Rules
//!
//! - A random catalog shape spawns centred in row 0. If it does not fit the
//!   game is over for good.
//! - Left, right and rotate are applied only when the result fits; otherwise
//!   nothing happens.
//! - Gravity (timer or soft drop) moves the piece one row. When it cannot, the
//!   piece locks, full rows are removed and `10 * 2^(rows - 1)` points are added.
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! while game.apply_action(GameAction::SoftDrop) {}
//!
//! // The first piece has locked and the next one is falling.
//! assert_eq!(game.pieces_spawned(), 2);
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;
pub mod timer;

pub use blockfall_types as types;

pub use board::Board;
pub use collision::{can_move, can_place, fits};
pub use game_state::{GameConfig, GameState};
pub use rng::SimpleRng;
pub use scoring::line_clear_score;
pub use shapes::{shape, ActivePiece, ShapeDef, ShapeGrid, SHAPES};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use timer::DropTimer;
