//! Terminal snake runner (default binary).
//!
//! Crossterm supplies input, a fixed-step scheduler drives the engine and a
//! framebuffer renderer draws the board. Logging goes to stderr and defaults
//! to errors only so the alternate screen stays clean; set `RUST_LOG=debug`
//! and redirect stderr to see more.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::{GameConfig, GameEngine, GameSnapshot, TickOutcome, TickScheduler};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{
    frame_fingerprint, Beeper, FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport,
};

/// Redraw interval while nothing moves (paused, idle).
const STATIC_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let config = GameConfig::from_env();
    log::info!(
        "seed {} auto_restart {} sound {}",
        config.seed,
        config.auto_restart,
        config.sound_enabled
    );
    let engine = GameEngine::new(config).context("invalid game configuration")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, engine);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("{err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, mut engine: GameEngine) -> Result<()> {
    let mut scheduler = TickScheduler::new(engine.config().tick_ms);
    let view = GameView::default();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let mut beeper = Beeper::new(io::stdout());

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let started = Instant::now();
    let mut last_advance = Instant::now();
    // Food animation clock; frozen while not running.
    let mut pulse_ms: u64 = 0;

    loop {
        // Input with timeout until next tick.
        let timeout = Duration::from_millis(scheduler.time_until_next_ms() as u64);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        let accepted = engine.apply_command(command);
                        log::debug!("{} accepted={}", command.as_str(), accepted);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.force();
                }
                _ => {}
            }
        }

        sync_scheduler(&mut scheduler, &engine);

        // Whole milliseconds only; the remainder carries to the next pass.
        let elapsed_ms = last_advance.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last_advance += Duration::from_millis(elapsed_ms as u64);

        if engine.is_running() {
            pulse_ms = pulse_ms.saturating_add(elapsed_ms as u64);
        }

        // Tick.
        for _ in 0..scheduler.advance(elapsed_ms) {
            match engine.tick() {
                TickOutcome::GameOver | TickOutcome::Won => break,
                _ => {}
            }
        }
        sync_scheduler(&mut scheduler, &engine);

        let events = engine.take_events();
        beeper.play(&events, engine.sound_enabled())?;

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        engine.snapshot_into(&mut snap);
        let now_ms = started.elapsed().as_millis() as u64;
        let fingerprint = frame_fingerprint(&snap, (w, h));
        if throttle.should_render(now_ms, fingerprint, snap.is_static()) {
            view.render_into(&snap, pulse_ms, Viewport::new(w, h), &mut fb);
            term.present(&mut fb)?;
        }
    }
}

/// Keep the scheduler's running flag in step with the engine's run state.
fn sync_scheduler(scheduler: &mut TickScheduler, engine: &GameEngine) {
    match (engine.is_running(), scheduler.is_running()) {
        (true, false) => scheduler.start(),
        (false, true) => scheduler.stop(),
        _ => {}
    }
}
