//! Terminal cake tower (default binary).
//!
//! Fixed 16ms frames: input read during a frame is collapsed by the
//! [`TapGate`] and applied once, then the game advances by one tick and the
//! frame is diffed onto the terminal.

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use cake_tower::core::GameConfig;
use cake_tower::input::{should_quit, TapGate};
use cake_tower::store::FileHighScore;
use cake_tower::term::{BellCues, FrameBuffer, GameView, TerminalRenderer, Viewport};
use cake_tower::types::TICK_MS;
use cake_tower::{App, AppConfig};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;
    info!("score file {}", config.score_path.display());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file, never to the terminal the game is drawn on.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let store = FileHighScore::new(&config.score_path);
    let cues = BellCues::new(!config.quiet);
    let mut app = App::new(GameConfig::default(), store, cues, config.seed);

    let view = GameView::default();
    let mut gate = TapGate::new().with_release_events(term.reports_key_release());
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.render_into(&view, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    gate.handle_key(key);
                }
                Event::Resize(_, _) => term.invalidate(),
                Event::FocusLost => gate.release_all(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if let Some(action) = gate.take_frame_action() {
                app.handle_action(action);
            }
            app.tick();
        }
    }
}
