//! Collision resolver - can a grid sit at a given anchor?
//!
//! Pure queries over `&Board`; nothing here mutates, so the engine can probe
//! candidate moves and rotations freely.

use crate::board::Board;
use crate::shapes::{ActivePiece, ShapeGrid};

/// Whether every filled cell of `grid` anchored at `(x, y)` is free.
///
/// A cell is rejected when its column is outside the board, its row is below
/// the floor, or it lands on a locked cell. Rows above the top are only
/// checked on the column axis.
pub fn can_place(board: &Board, grid: &ShapeGrid, x: i8, y: i8) -> bool {
    grid.filled_cells()
        .iter()
        .all(|&(dx, dy)| !board.is_occupied(x + dx, y + dy))
}

/// Whether `piece` fits where it currently is.
pub fn fits(board: &Board, piece: &ActivePiece) -> bool {
    can_place(board, &piece.grid, piece.x, piece.y)
}

/// Whether `piece` could be shifted by `(dx, dy)`.
pub fn can_move(board: &Board, piece: &ActivePiece, dx: i8, dy: i8) -> bool {
    can_place(board, &piece.grid, piece.x + dx, piece.y + dy)
}
