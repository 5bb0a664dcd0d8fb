//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no dependencies, so it can be shared by
//! the gameplay core, the terminal renderer and the key mapper alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn row**: 0, horizontally centred on the shape's bounding box
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TARGET_FPS` | 60 | Nominal logical frame rate |
//! | `AUTO_DROP_INTERVAL_MS` | 166 | Gravity period (`10_000 / TARGET_FPS`) |
//!
//! The gravity period is ten times the nominal frame period. That is the pace
//! the game has always been played at, so it is kept as the default and can be
//! overridden at startup.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, GameStatus, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(GameAction::from_str("softDrop"), Some(GameAction::SoftDrop));
//! assert_eq!(GameAction::Rotate.as_str(), "rotate");
//! assert!(GameStatus::GameOver.is_over());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Number of entries in the shape catalog.
pub const SHAPE_COUNT: u8 = 7;

/// Largest bounding box side of any shape.
pub const MAX_SHAPE_SIDE: usize = 4;

/// Nominal logical frame rate.
pub const TARGET_FPS: u32 = 60;

/// Default automatic drop period in milliseconds.
pub const AUTO_DROP_INTERVAL_MS: u32 = 10_000 / TARGET_FPS;

/// Points for a single-row clear; every extra row in the same lock doubles it.
pub const LINE_CLEAR_BASE_SCORE: u32 = 10;

/// A locked board cell: `EMPTY_CELL`, or `shape id + 1` of the piece that locked there.
pub type Cell = u8;

/// Value of an empty board cell.
pub const EMPTY_CELL: Cell = 0;

/// Index into the shape catalog.
///
/// Carried on the active piece from the moment it spawns, so the locked cell
/// value and the colour never have to be recovered from the shape geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(u8);

impl ShapeId {
    /// Returns `None` when `index` is not a catalog index.
    pub const fn new(index: u8) -> Option<Self> {
        if index < SHAPE_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Value written into the board when a piece of this shape locks.
    pub const fn cell_value(self) -> Cell {
        self.0 + 1
    }

    /// Inverse of [`ShapeId::cell_value`]; `None` for empty or foreign values.
    pub const fn from_cell(cell: Cell) -> Option<Self> {
        if cell == EMPTY_CELL {
            None
        } else {
            Self::new(cell - 1)
        }
    }

    /// All catalog ids in order.
    pub fn all() -> impl Iterator<Item = ShapeId> {
        (0..SHAPE_COUNT).map(ShapeId)
    }
}

/// Colour identity paired with each catalog shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

impl PieceColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceColor::Cyan => "cyan",
            PieceColor::Blue => "blue",
            PieceColor::Orange => "orange",
            PieceColor::Yellow => "yellow",
            PieceColor::Green => "green",
            PieceColor::Purple => "purple",
            PieceColor::Red => "red",
        }
    }
}

/// Session state machine.
///
/// `GameOver` is terminal: nothing in a session leads back to `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Running,
    GameOver,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::GameOver)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Running => "running",
            GameStatus::GameOver => "game_over",
        }
    }
}

/// Commands the input layer may issue to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// One manual gravity step (locks the piece when it cannot fall)
    SoftDrop,
    /// Rotate piece 90° clockwise around its top-left anchor
    Rotate,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
        }
    }
}

/// Emitted by the engine every time a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub shape_id: ShapeId,
    pub rows_cleared: u32,
    pub score_delta: u32,
}
