//! Terminal Tetris runner (default binary).
//!
//! Owns the two triggers the engine needs: a fixed-interval timer that calls
//! `advance()` and a key dispatcher that calls `apply_action()`. Both run on
//! this one loop, so engine operations never overlap.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use term_tetris::config::AppConfig;
use term_tetris::core::{GameSnapshot, GameState};
use term_tetris::input::{handle_key_event, is_actionable, should_quit, should_start};
use term_tetris::session_log::SessionLog;
use term_tetris::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};

/// Redraw at least this often even when nothing changed (resizes, overlays).
const IDLE_REFRESH_MS: u64 = 250;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let mut log = match config.log_path.as_deref() {
        Some(path) => Some(SessionLog::open(path)?),
        None => None,
    };

    let mut game = GameState::with_config(config.game);
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &config, log.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(log) = log.as_mut() {
        log.record_all(&game.take_events())?;
        log.flush()?;
    }
    eprintln!(
        "[Game] score {} ({}), seed {}",
        game.score(),
        if game.game_over() { "game over" } else { "quit" },
        game.seed()
    );
    result
}

fn run<W: Write>(
    term: &mut TerminalRenderer,
    game: &mut GameState,
    config: &AppConfig,
    mut log: Option<&mut SessionLog<W>>,
) -> Result<()> {
    game.start();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut throttle = RenderThrottle::new(IDLE_REFRESH_MS);

    let clock = Instant::now();
    let drop_interval = Duration::from_millis(config.drop_interval_ms as u64);
    let mut last_drop = Instant::now();

    loop {
        if let Some(log) = log.as_deref_mut() {
            log.record_all(&game.take_events())?;
        }

        // Render.
        game.snapshot_into(&mut snap);
        if throttle.should_render(clock.elapsed().as_millis() as u64, snap.revision) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until the next descent step.
        let timeout = drop_interval
            .saturating_sub(last_drop.elapsed())
            .min(Duration::from_millis(IDLE_REFRESH_MS));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_actionable(&key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if should_start(key) {
                        game.start();
                        last_drop = Instant::now();
                    } else if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        // Timed descent.
        if last_drop.elapsed() >= drop_interval {
            last_drop = Instant::now();
            game.advance();
        }
    }
}
