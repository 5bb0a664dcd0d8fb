use crate::shapes::{ActivePiece, ShapeGrid};
use crate::types::{Cell, GameStatus, ShapeId, BOARD_HEIGHT, BOARD_WIDTH};

/// Everything a renderer needs about the falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub grid: ShapeGrid,
    pub shape_id: ShapeId,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            grid: value.grid,
            shape_id: value.shape_id,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only copy of the session, pulled once per frame by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub status: GameStatus,
    pub seed: u32,
    pub pieces_spawned: u32,
}

impl GameSnapshot {
    pub fn game_over(&self) -> bool {
        self.status.is_over()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            status: GameStatus::Running,
            seed: 0,
            pieces_spawned: 0,
        }
    }
}
