//! Game state module - the session object
//!
//! `GameState` owns the board, the active piece, the RNG, the score and the
//! status. Collaborators read it (or a [`GameSnapshot`]) and change it only
//! through the four commands. Blocked commands leave the state untouched and
//! report `false`; once the session is over every command is a no-op.

use tracing::{info, trace};

use crate::board::Board;
use crate::collision::{can_move, fits};
use crate::rng::SimpleRng;
use crate::scoring::line_clear_score;
use crate::shapes::ActivePiece;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Startup options for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    /// Automatic drop period; read by the runner's [`DropTimer`](crate::timer::DropTimer).
    pub drop_interval_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            drop_interval_ms: AUTO_DROP_INTERVAL_MS,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    /// Always present once constructed. After a blocked spawn it holds the
    /// piece that did not fit, so the end state can still be drawn.
    active: Option<ActivePiece>,
    rng: SimpleRng,
    seed: u32,
    score: u32,
    status: GameStatus,
    pieces_spawned: u32,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Start a session on an empty board.
    pub fn new(seed: u32) -> Self {
        Self::from_board(Board::new(), seed)
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self::new(config.seed)
    }

    /// Start a session on a prepared board. The first piece spawns
    /// immediately and may already end the game.
    pub fn from_board(board: Board, seed: u32) -> Self {
        let mut state = Self {
            board,
            active: None,
            rng: SimpleRng::new(seed),
            seed,
            score: 0,
            status: GameStatus::Running,
            pieces_spawned: 0,
            last_event: None,
        };
        state.spawn_piece();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.status = self.status;
        out.seed = self.seed;
        out.pieces_spawned = self.pieces_spawned;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn a random catalog shape at the top.
    ///
    /// Returns `false` (and ends the game) when the spawn position is blocked.
    /// The board is never written by a spawn.
    pub fn spawn_piece(&mut self) -> bool {
        if self.game_over() {
            return false;
        }

        let shape_id = self.rng.next_shape();
        let piece = ActivePiece::spawn(shape_id);
        self.active = Some(piece);

        if !fits(&self.board, &piece) {
            self.status = GameStatus::GameOver;
            info!(
                score = self.score,
                pieces = self.pieces_spawned,
                "spawn blocked, game over"
            );
            return false;
        }

        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        trace!(
            shape = shape_id.index(),
            color = piece.color().as_str(),
            x = piece.x,
            "spawned piece"
        );
        true
    }

    /// Shift the active piece horizontally if the target is free.
    fn try_shift(&mut self, dx: i8) -> bool {
        if self.game_over() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        if !can_move(&self.board, &active, dx, 0) {
            return false;
        }
        self.active = Some(active.shifted(dx, 0));
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    /// One gravity step. Falls one row when possible, otherwise locks the
    /// piece, sweeps full rows, scores them and spawns the next piece.
    ///
    /// Returns `true` when the piece fell.
    pub fn move_down(&mut self) -> bool {
        if self.game_over() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if can_move(&self.board, &active, 0, 1) {
            self.active = Some(active.shifted(0, 1));
            return true;
        }

        self.lock_piece();
        false
    }

    /// Automatic gravity firing; same as [`GameState::move_down`].
    pub fn tick(&mut self) -> bool {
        self.move_down()
    }

    /// Rotate clockwise in place (same top-left anchor, no kicks).
    pub fn rotate(&mut self) -> bool {
        if self.game_over() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        let rotated = active.rotated();
        if !fits(&self.board, &rotated) {
            return false;
        }
        self.active = Some(rotated);
        true
    }

    /// Merge the active piece into the board and continue with a new piece.
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board
            .lock(active.board_cells(), active.shape_id.cell_value());

        let rows_cleared = self.board.sweep_full_rows();
        let score_delta = line_clear_score(rows_cleared);
        self.score = self.score.saturating_add(score_delta);

        if rows_cleared > 0 {
            info!(rows = rows_cleared, score = self.score, "rows cleared");
        }

        self.last_event = Some(LockEvent {
            shape_id: active.shape_id,
            rows_cleared: rows_cleared as u32,
            score_delta,
        });

        self.spawn_piece();
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.move_down(),
            GameAction::Rotate => self.rotate(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}
