//! Shapes module - the piece catalog and clockwise rotation
//!
//! Every shape is a small binary grid in its own rotation frame. Rotation
//! rebuilds the grid (an R x C grid becomes C x R); the piece anchor stays on
//! the top-left corner of the bounding box, there is no pivot and no kick.
//!
//! Catalog note: entries 1 and 3 hold the same skew geometry and the mirrored
//! skew appears only once, at entry 2. This is kept as-is because it decides
//! how often each geometry spawns.

use arrayvec::ArrayVec;

use crate::types::{PieceColor, ShapeId, BOARD_WIDTH, MAX_SHAPE_SIDE, SHAPE_COUNT};

/// Offsets `(col, row)` of the filled cells of a grid.
pub type CellOffsets = ArrayVec<(i8, i8), { MAX_SHAPE_SIDE * MAX_SHAPE_SIDE }>;

/// Fixed-capacity binary grid (up to 4x4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeGrid {
    rows: u8,
    cols: u8,
    bits: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl ShapeGrid {
    /// Build a grid from `0`/`1` rows. Cells past the 4x4 capacity are ignored.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        let mut grid = Self {
            rows: rows.len().min(MAX_SHAPE_SIDE) as u8,
            cols: 0,
            bits: [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
        };
        for (r, row) in rows.iter().take(MAX_SHAPE_SIDE).enumerate() {
            let row = row.as_ref();
            grid.cols = grid.cols.max(row.len().min(MAX_SHAPE_SIDE) as u8);
            for (c, &v) in row.iter().take(MAX_SHAPE_SIDE).enumerate() {
                grid.bits[r][c] = v != 0;
            }
        }
        grid
    }

    pub const fn rows(&self) -> u8 {
        self.rows
    }

    pub const fn cols(&self) -> u8 {
        self.cols
    }

    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.bits[row][col]
    }

    /// Filled cells as `(col, row)` offsets, row by row.
    pub fn filled_cells(&self) -> CellOffsets {
        let mut out = CellOffsets::new();
        for r in 0..self.rows as usize {
            for c in 0..self.cols as usize {
                if self.bits[r][c] {
                    out.push((c as i8, r as i8));
                }
            }
        }
        out
    }

    /// Rotate 90° clockwise: `new[c][rows - 1 - r] = old[r][c]`.
    pub fn rotate_cw(&self) -> Self {
        let mut out = Self {
            rows: self.cols,
            cols: self.rows,
            bits: [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
        };
        let h = self.rows as usize;
        for r in 0..h {
            for c in 0..self.cols as usize {
                out.bits[c][h - 1 - r] = self.bits[r][c];
            }
        }
        out
    }

    /// The grid as `0`/`1` rows, mostly for tests and debugging.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows as usize)
            .map(|r| {
                (0..self.cols as usize)
                    .map(|c| self.bits[r][c] as u8)
                    .collect()
            })
            .collect()
    }

    const fn from_bits(rows: u8, cols: u8, bits: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE]) -> Self {
        Self { rows, cols, bits }
    }
}

/// One catalog entry: geometry in spawn orientation plus its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDef {
    pub grid: ShapeGrid,
    pub color: PieceColor,
}

const O: bool = false;
const X: bool = true;
const EMPTY_ROW: [bool; MAX_SHAPE_SIDE] = [O; MAX_SHAPE_SIDE];

/// The fixed seven-entry catalog, indexed by [`ShapeId`].
pub const SHAPES: [ShapeDef; SHAPE_COUNT as usize] = [
    ShapeDef {
        grid: ShapeGrid::from_bits(1, 4, [[X, X, X, X], EMPTY_ROW, EMPTY_ROW, EMPTY_ROW]),
        color: PieceColor::Cyan,
    },
    ShapeDef {
        grid: ShapeGrid::from_bits(2, 3, [[X, X, O, O], [O, X, X, O], EMPTY_ROW, EMPTY_ROW]),
        color: PieceColor::Blue,
    },
    ShapeDef {
        grid: ShapeGrid::from_bits(2, 3, [[O, X, X, O], [X, X, O, O], EMPTY_ROW, EMPTY_ROW]),
        color: PieceColor::Orange,
    },
    // Same geometry as entry 1.
    ShapeDef {
        grid: ShapeGrid::from_bits(2, 3, [[X, X, O, O], [O, X, X, O], EMPTY_ROW, EMPTY_ROW]),
        color: PieceColor::Yellow,
    },
    ShapeDef {
        grid: ShapeGrid::from_bits(2, 3, [[X, O, O, O], [X, X, X, O], EMPTY_ROW, EMPTY_ROW]),
        color: PieceColor::Green,
    },
    ShapeDef {
        grid: ShapeGrid::from_bits(2, 3, [[O, O, X, O], [X, X, X, O], EMPTY_ROW, EMPTY_ROW]),
        color: PieceColor::Purple,
    },
    ShapeDef {
        grid: ShapeGrid::from_bits(2, 2, [[X, X, O, O], [X, X, O, O], EMPTY_ROW, EMPTY_ROW]),
        color: PieceColor::Red,
    },
];

/// Catalog lookup.
pub fn shape(id: ShapeId) -> &'static ShapeDef {
    &SHAPES[id.index()]
}

/// Anchor column for a freshly spawned grid: `floor((W - cols) / 2)`.
pub fn spawn_x(grid: &ShapeGrid) -> i8 {
    (BOARD_WIDTH as i8 - grid.cols() as i8).div_euclid(2)
}

/// The falling, player-controlled piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    /// Current rotation of the shape.
    pub grid: ShapeGrid,
    pub shape_id: ShapeId,
    /// Board column of the grid's left edge.
    pub x: i8,
    /// Board row of the grid's top edge.
    pub y: i8,
}

impl ActivePiece {
    /// Place a catalog shape at its spawn anchor.
    pub fn spawn(shape_id: ShapeId) -> Self {
        let grid = shape(shape_id).grid;
        Self {
            grid,
            shape_id,
            x: spawn_x(&grid),
            y: 0,
        }
    }

    pub fn color(&self) -> PieceColor {
        shape(self.shape_id).color
    }

    /// Board coordinates of every filled cell.
    pub fn board_cells(&self) -> CellOffsets {
        self.grid
            .filled_cells()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same anchor, grid rotated clockwise.
    pub fn rotated(&self) -> Self {
        Self {
            grid: self.grid.rotate_cw(),
            ..*self
        }
    }
}
