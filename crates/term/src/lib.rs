//! Terminal rendering for the inventory.
//!
//! Two outputs share the same snapshot:
//! - [`inventory_view`] draws into a framebuffer that [`renderer`] flushes via crossterm
//! - [`text`] produces the plain lines used by the line-mode menu
//!
//! Neither module mutates a session; they only read [`core::InventorySnapshot`].

pub mod fb;
pub mod inventory_view;
pub mod renderer;
pub mod text;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use inventory_view::{InventoryView, StatusLine, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
pub use text::{format_menu, format_pieces, format_state, EMPTY_MARKER};
