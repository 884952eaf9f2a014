//! Line-mode menu: print the state, read one command per line, apply it.
//!
//! The reader and writer are generic so the loop runs against stdin/stdout in the binary
//! and against in-memory buffers in tests.

use std::io::{self, BufRead, Lines, Write};

use anyhow::Result;
use serde_json::json;

use crate::core::{KindSource, Session};
use crate::term::{format_menu, format_state};
use crate::types::{Container, InventoryError, MenuAction};

/// User-facing text for a rejected action.
pub fn describe_error(err: &InventoryError) -> String {
    match err {
        InventoryError::Empty {
            container: Container::Queue,
        } => "Queue is empty!".to_string(),
        InventoryError::Empty {
            container: Container::Stack,
        } => "No reserved pieces!".to_string(),
        InventoryError::Full {
            container: Container::Queue,
        } => "Queue is full!".to_string(),
        InventoryError::Full {
            container: Container::Stack,
        } => "Reserve stack is full!".to_string(),
        InventoryError::InsufficientPieces {
            needed,
            queue_len,
            stack_len,
        } => format!(
            "Not enough pieces to swap: need {} on each side (queue {}, reserve {})",
            needed, queue_len, stack_len
        ),
    }
}

/// Counters returned when the loop ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub applied: usize,
    pub rejected: usize,
    pub invalid: usize,
}

/// Run the menu until `Quit` or end of input.
///
/// With `json` set, the initial state and every response are single JSON lines instead of
/// the text menu.
pub fn run_plain<S, R, W>(
    session: &mut Session<S>,
    input: R,
    out: &mut W,
    json: bool,
) -> Result<RunSummary>
where
    S: KindSource,
    R: BufRead,
    W: Write,
{
    let mut summary = RunSummary::default();
    let mut lines = input.lines();

    if json {
        writeln!(out, "{}", json!({ "state": session.snapshot() }))?;
    }

    loop {
        if !json {
            write!(out, "{}", format_state(&session.snapshot()))?;
            write!(out, "{}", format_menu())?;
        }
        out.flush()?;

        let Some(line) = next_command(&mut lines)? else {
            log::debug!("input closed");
            break;
        };

        let Some(action) = MenuAction::from_str(&line) else {
            summary.invalid += 1;
            if json {
                writeln!(
                    out,
                    "{}",
                    json!({ "ok": false, "error": "invalid option", "input": line.trim() })
                )?;
            } else {
                writeln!(out, "Invalid option!")?;
            }
            continue;
        };

        let (ok, message) = match session.apply(action) {
            Ok(outcome) => {
                summary.applied += 1;
                (true, outcome.to_string())
            }
            Err(e) => {
                summary.rejected += 1;
                (false, describe_error(&e))
            }
        };

        if json {
            writeln!(
                out,
                "{}",
                json!({
                    "action": action.as_str(),
                    "ok": ok,
                    "message": message,
                    "state": session.snapshot(),
                })
            )?;
        } else {
            writeln!(out, "{}", message)?;
        }

        if action == MenuAction::Quit {
            break;
        }
    }

    out.flush()?;
    Ok(summary)
}

/// Next non-blank line, or `None` at end of input. Blank lines do not trigger a redraw.
fn next_command<R: BufRead>(lines: &mut Lines<R>) -> io::Result<Option<String>> {
    for line in lines {
        let line = line?;
        if !line.trim().is_empty() {
            return Ok(Some(line));
        }
    }
    Ok(None)
}
