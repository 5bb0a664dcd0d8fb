//! GameView: paints a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: a `Score: N` line, then the well inside a box
//! border. Board cell `(col, row)` covers `cell_w x cell_h` terminal cells
//! starting at `(origin_x + 1 + col * cell_w, origin_y + 1 + row * cell_h)`.

use crate::core::{shape, GameSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{ShapeId, BOARD_HEIGHT, BOARD_WIDTH};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const OUTLINE: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the well ended up inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WellLayout {
    /// Top-left corner of the border.
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    /// Both sides are clamped to at least 1.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    pub fn cell_size(&self) -> (u16, u16) {
        (self.cell_w, self.cell_h)
    }

    /// Centre the score line plus the bordered well in the viewport.
    pub fn layout(&self, viewport: Viewport) -> WellLayout {
        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let total_h = frame_h + 1;
        WellLayout {
            frame_x: viewport.width.saturating_sub(frame_w) / 2,
            frame_y: viewport.height.saturating_sub(total_h) / 2 + 1,
            frame_w,
            frame_h,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let layout = self.layout(viewport);
        let label = CellStyle::default().bold();

        let x = fb.put_str(layout.frame_x, layout.frame_y - 1, "Score: ", label);
        fb.put_u32(x, layout.frame_y - 1, snap.score, label);

        self.draw_border(fb, &layout);

        for (row, cells) in snap.board.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                match ShapeId::from_cell(cell) {
                    Some(id) => self.draw_block(fb, &layout, col as u16, row as u16, id),
                    None => self.draw_empty(fb, &layout, col as u16, row as u16),
                }
            }
        }

        if let Some(active) = snap.active {
            for (dx, dy) in active.grid.filled_cells() {
                let col = active.x + dx;
                let row = active.y + dy;
                if (0..BOARD_WIDTH as i8).contains(&col) && (0..BOARD_HEIGHT as i8).contains(&row)
                {
                    self.draw_block(fb, &layout, col as u16, row as u16, active.shape_id);
                }
            }
        }

        if snap.game_over() {
            fb.shade_rect(0, 0, viewport.width, viewport.height);
            self.draw_centered_label(fb, &layout, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Terminal position of the top-left corner of board cell `(col, row)`.
    pub fn cell_origin(&self, layout: &WellLayout, col: u16, row: u16) -> (u16, u16) {
        (
            layout.frame_x + 1 + col * self.cell_w,
            layout.frame_y + 1 + row * self.cell_h,
        )
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &WellLayout) {
        let style = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let (x, y, w, h) = (layout.frame_x, layout.frame_y, layout.frame_w, layout.frame_h);

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, layout: &WellLayout, col: u16, row: u16) {
        let (px, py) = self.cell_origin(layout, col, row);
        let style = CellStyle {
            dim: true,
            ..CellStyle::plain(Rgb::new(90, 90, 100), WELL_BG)
        };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, '·', style);
    }

    /// A coloured square with a dark outline: `[]` on the shape colour.
    fn draw_block(&self, fb: &mut FrameBuffer, layout: &WellLayout, col: u16, row: u16, id: ShapeId) {
        let (px, py) = self.cell_origin(layout, col, row);
        let fill = Rgb::from(shape(id).color);

        if self.cell_w == 1 {
            let style = CellStyle::plain(fill, WELL_BG);
            fb.fill_rect(px, py, 1, self.cell_h, '█', style);
            return;
        }

        let style = CellStyle::plain(OUTLINE, fill).bold();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        for dy in 0..self.cell_h {
            fb.put_char(px, py + dy, '[', style);
            fb.put_char(px + self.cell_w - 1, py + dy, ']', style);
        }
    }

    fn draw_centered_label(&self, fb: &mut FrameBuffer, layout: &WellLayout, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = layout.frame_x + layout.frame_w.saturating_sub(text_w) / 2;
        let y = layout.frame_y + layout.frame_h / 2;
        let style = CellStyle::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, y, text, style);
    }
}
