//! Plain-text rendering of the inventory, used by the line-mode frontend.

use std::fmt::Write;

use crate::core::InventorySnapshot;
use crate::types::{MenuAction, Piece};

/// Shown in place of an empty container.
pub const EMPTY_MARKER: &str = "(empty)";

/// `[K id] [K id] ...` in the given order, or [`EMPTY_MARKER`].
pub fn format_pieces(pieces: &[Piece]) -> String {
    if pieces.is_empty() {
        return EMPTY_MARKER.to_string();
    }
    let mut out = String::with_capacity(pieces.len() * 7);
    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}", piece);
    }
    out
}

/// The state block printed before every prompt.
pub fn format_state(snap: &InventorySnapshot) -> String {
    format!(
        "\n=== Current State ===\nQueue (front -> back):  {}\nReserve (top -> base):  {}\n=====================\n",
        format_pieces(&snap.queue),
        format_pieces(&snap.stack),
    )
}

/// Numbered option list followed by the prompt.
pub fn format_menu() -> String {
    let mut out = String::from("\nOptions:\n");
    for action in MenuAction::ALL {
        let _ = writeln!(out, "{} - {}", action.menu_key(), action.label());
    }
    out.push_str("> ");
    out
}
