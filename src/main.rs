//! Tetris Stack runner (default binary).
//!
//! Starts a session with a full queue and an empty reserve stack, then hands it to the
//! configured frontend: the full-screen crossterm menu, or the line-mode menu (text or
//! JSON) over stdin/stdout.

use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tetris_stack::config::{AppConfig, FrontendMode, USAGE};
use tetris_stack::core::{InventorySnapshot, Session};
use tetris_stack::input::{handle_key_event, should_quit};
use tetris_stack::logging::init_logging;
use tetris_stack::plain::{describe_error, run_plain};
use tetris_stack::term::{FrameBuffer, InventoryView, StatusLine, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = match AppConfig::load(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };
    init_logging(&config)?;
    log::info!("starting: mode={:?} seed={:?}", config.mode, config.seed);

    match config.mode {
        FrontendMode::Tui => run_tui(&config),
        FrontendMode::Plain | FrontendMode::Json => {
            let mut session = Session::new(config.generator());
            let stdin = io::stdin();
            let stdout = io::stdout();
            let summary = run_plain(
                &mut session,
                stdin.lock(),
                &mut stdout.lock(),
                config.mode == FrontendMode::Json,
            )?;
            log::info!(
                "session over: {} applied, {} rejected, {} invalid",
                summary.applied,
                summary.rejected,
                summary.invalid
            );
            Ok(())
        }
    }
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut session = Session::new(config.generator());
    let view = InventoryView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = InventorySnapshot::default();

    let mut status = String::from("Choose an action");
    let mut status_is_error = false;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        let line = if status_is_error {
            StatusLine::error(&status)
        } else {
            StatusLine::info(&status)
        };
        view.render_into(&snap, Some(line), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Blocks until the next event; resizes just fall through to a redraw.
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(());
            }
            if let Some(action) = handle_key_event(key) {
                match session.apply(action) {
                    Ok(outcome) => {
                        status = outcome.to_string();
                        status_is_error = false;
                    }
                    Err(e) => {
                        status = describe_error(&e);
                        status_is_error = true;
                    }
                }
            }
        }
    }
}
