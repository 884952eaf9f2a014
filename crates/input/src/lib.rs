//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::MenuAction`]. Digits follow the menu
//! numbering, letters are mnemonics for the same actions.

pub mod map;

pub use tetris_stack_types as types;

pub use map::{handle_key_event, should_quit};
