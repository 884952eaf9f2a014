//! Tetris Stack (workspace facade crate).
//!
//! Re-exports the workspace crates under `tetris_stack::{core,input,term,types}` and hosts
//! the pieces the binary needs on top of them: configuration, logger setup and the line-mode menu.

pub use tetris_stack_core as core;
pub use tetris_stack_input as input;
pub use tetris_stack_term as term;
pub use tetris_stack_types as types;

pub mod config;
pub mod logging;
pub mod plain;
