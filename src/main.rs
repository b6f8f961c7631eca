//! Terminal brick breaker (default binary).
//!
//! Single-threaded driver: one fixed-rate simulation step and an input stream
//! serviced on the same thread, so every tick sees all input applied before it.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use brick_breaker::core::{Flow, GameState, Layout};
use brick_breaker::input::{is_actionable, map_key};
use brick_breaker::term::{Canvas, FrameBuffer, TerminalRenderer};
use brick_breaker::{logging, Config};

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(config.log_path.as_deref())?;
    log::info!("starting with {:?}", config);

    let mut term = TerminalRenderer::new();
    if let Err(err) = term.enter() {
        let _ = term.exit();
        return Err(err);
    }

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("exiting with error: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let (screen_w, screen_h) = config.scale.screen_size(cols, rows);
    let layout = Layout::new(screen_w, screen_h, config.rows, config.cols);
    log::info!(
        "screen {}x{} px ({}x{} cells), bricks {}x{} of {}x{} px",
        screen_w,
        screen_h,
        cols,
        rows,
        layout.rows,
        layout.cols,
        layout.brick_width,
        layout.brick_height
    );
    if (layout.rows, layout.cols) != (config.rows as usize, config.cols as usize) {
        log::warn!(
            "requested {}x{} bricks do not fit, using {}x{}",
            config.rows,
            config.cols,
            layout.rows,
            layout.cols
        );
    }

    let mut game = GameState::new(layout);
    let mut fb = FrameBuffer::new(cols, rows);

    let tick_duration = config.tick_interval();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        if game.take_redraw_request() {
            game.present(&mut Canvas::new(&mut fb, config.scale));
            term.present(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_actionable(&key) => {
                    if let Some(action) = map_key(key) {
                        if game.apply_action(action) == Flow::Quit {
                            return Ok(());
                        }
                    }
                }
                Event::Resize(w, h) => {
                    fb.resize(w, h);
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick();
        }
    }
}
