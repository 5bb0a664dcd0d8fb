//! Terminal runner (default binary).
//!
//! Owns the one `GameState` of the session. Every loop iteration renders,
//! waits for a key until the next gravity firing is due, applies the key,
//! then fires gravity as many times as the drop timer says.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{debug, info};

use blockfall::cli::Cli;
use blockfall::core::{DropTimer, GameSnapshot, GameState};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging()?;

    let config = cli.game_config();
    info!(
        seed = config.seed,
        drop_ms = config.drop_interval_ms,
        "starting session"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(
        &mut term,
        GameState::with_config(config),
        DropTimer::new(config.drop_interval_ms),
        cli.game_view(),
    );

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    mut game: GameState,
    mut timer: DropTimer,
    view: GameView,
) -> Result<()> {
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last = Instant::now();

    loop {
        draw(term, &game, &view, &mut snap, &mut fb)?;

        let timeout = Duration::from_millis(timer.remaining_ms() as u64)
            .saturating_sub(last.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!(
                            score = game.score(),
                            status = game.status().as_str(),
                            "quit"
                        );
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let changed = game.apply_action(action);
                        debug!(action = action.as_str(), changed, "key action");
                        log_lock(&mut game);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        let elapsed_ms = now.duration_since(last).as_millis().min(u32::MAX as u128) as u32;
        let fires = timer.advance(elapsed_ms);
        // Keep the sub-millisecond remainder in `last`.
        last += Duration::from_millis(elapsed_ms as u64);

        for _ in 0..fires {
            draw(term, &game, &view, &mut snap, &mut fb)?;
            game.tick();
            log_lock(&mut game);
        }
    }
}

fn log_lock(game: &mut GameState) {
    if let Some(ev) = game.take_last_event() {
        debug!(
            shape = ev.shape_id.index(),
            rows = ev.rows_cleared,
            points = ev.score_delta,
            "piece locked"
        );
    }
}

fn draw(
    term: &mut TerminalRenderer,
    game: &GameState,
    view: &GameView,
    snap: &mut GameSnapshot,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    game.snapshot_into(snap);
    view.render_into(snap, Viewport::new(w, h), fb);
    term.draw(fb)
}
