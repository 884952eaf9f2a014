//! Core inventory logic - pure, deterministic, and testable
//!
//! This crate owns the two bounded containers of the game and the rules that move pieces
//! between them. It has no dependency on terminals or stdin, so every rule can be driven
//! directly from tests.
//!
//! # Module Structure
//!
//! - [`queue`]: fixed-capacity circular queue of upcoming pieces
//! - [`stack`]: fixed-capacity reserve stack
//! - [`exchange`]: single and batch swaps between queue front and stack top
//! - [`generator`]: piece creation with monotonically increasing ids
//! - [`rng`]: injectable kind sources (seeded LCG, scripted sequences)
//! - [`session`]: a queue + stack + generator driven by menu actions
//! - [`snapshot`]: serializable, display-ordered copy of a session
//!
//! # Rules
//!
//! - The queue starts full (5 pieces) and is topped up after every successful action
//! - The stack starts empty and holds at most 3 pieces
//! - A rejected action never changes either container
//! - Batch swaps pair the queue front with the stack top, then the next two of each
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::Session;
//! use tetris_stack_types::MenuAction;
//!
//! let mut session = Session::seeded(12345);
//! assert_eq!(session.queue().len(), 5);
//!
//! let reserved = session.reserve().unwrap();
//! assert_eq!(session.stack().peek_top(), Some(&reserved));
//!
//! // Not enough reserved pieces for a batch swap yet.
//! assert!(session.apply(MenuAction::SwapBatch).is_err());
//! ```

pub mod exchange;
pub mod generator;
pub mod queue;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod stack;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use exchange::{swap_batch, swap_front_top};
pub use generator::PieceGenerator;
pub use queue::PieceQueue;
pub use rng::{CycleKinds, KindSource, SimpleRng};
pub use session::{ActionOutcome, Session};
pub use snapshot::InventorySnapshot;
pub use stack::ReserveStack;
