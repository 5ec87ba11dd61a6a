//! Terminal bowling scorekeeper (default binary).
//!
//! Uses crossterm for input and a framebuffer-based scorecard renderer.
//! Configuration comes from `BOWLING_*` environment variables; logs go to
//! `BOWLING_LOG_PATH` when set, never to the terminal.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_bowling::input::{handle_key_event, should_quit};
use tui_bowling::term::{FrameBuffer, ScorecardView, TerminalRenderer, Viewport};
use tui_bowling::{logging, Session, SessionConfig};

/// How long to wait for input before redrawing anyway (resize handling).
const POLL_MS: u64 = 250;

fn main() -> Result<()> {
    let config = SessionConfig::from_env();
    logging::init_file(&config)?;
    tracing::info!(players = config.players, seed = config.seed, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &SessionConfig) -> Result<()> {
    let mut session = Session::new(config);
    let view = ScorecardView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let message = session.message();
        view.render_into(
            &session.snapshot(),
            message.as_deref(),
            Viewport::new(w, h),
            &mut fb,
        );
        term.draw(&fb)?;

        if !event::poll(Duration::from_millis(POLL_MS))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    // Rejections are shown on the scorecard.
                    let _ = session.apply(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
