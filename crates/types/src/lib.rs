//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! They are plain data with no dependency on the containers or the frontends, so the
//! core, the terminal view and the line-mode runner can all share them.
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Upcoming pieces held by the circular queue |
//! | `STACK_CAPACITY` | 3 | Reserved pieces held by the stack |
//! | `BATCH_SWAP_LEN` | 3 | Pieces exchanged by a batch swap |
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{MenuAction, Piece, PieceKind, QUEUE_CAPACITY};
//!
//! let piece = Piece::new(PieceKind::T, 5);
//! assert_eq!(piece.to_string(), "[T 5]");
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//!
//! // Menu digits and names both parse
//! assert_eq!(MenuAction::from_str("2"), Some(MenuAction::Reserve));
//! assert_eq!(MenuAction::from_str("swap"), Some(MenuAction::SwapFrontTop));
//!
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Capacity of the upcoming-piece queue.
pub const QUEUE_CAPACITY: usize = 5;

/// Capacity of the reserve stack.
pub const STACK_CAPACITY: usize = 3;

/// Number of pieces exchanged by a batch swap.
pub const BATCH_SWAP_LEN: usize = 3;

/// Unique, monotonically assigned piece identifier.
pub type PieceId = u64;

/// The four piece kinds handed out by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// Every kind, in generator order.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("L"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("s"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Single-letter tag used in every text rendering.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A game piece: a kind tag plus the id it was created with.
///
/// Pieces are copied by value when they move between containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: PieceId,
}

impl Piece {
    pub const fn new(kind: PieceKind, id: PieceId) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}

/// Which of the two containers an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Container {
    Queue,
    Stack,
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Queue => f.write_str("queue"),
            Container::Stack => f.write_str("reserve stack"),
        }
    }
}

/// Recoverable failures of the inventory operations.
///
/// A failed operation never mutates either container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("{container} is full")]
    Full { container: Container },
    #[error("{container} is empty")]
    Empty { container: Container },
    #[error("swap needs {needed} piece(s) on each side (queue has {queue_len}, stack has {stack_len})")]
    InsufficientPieces {
        needed: usize,
        queue_len: usize,
        stack_len: usize,
    },
}

/// Menu actions a frontend can apply to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Play the piece at the front of the queue
    Play,
    /// Move the queue front onto the reserve stack
    Reserve,
    /// Use the piece on top of the reserve stack
    UseReserved,
    /// Exchange queue front and stack top
    SwapFrontTop,
    /// Exchange the first three queue pieces with the top three reserved pieces
    SwapBatch,
    /// Leave the session
    Quit,
}

impl MenuAction {
    /// Actions in menu order.
    pub const ALL: [MenuAction; 6] = [
        MenuAction::Play,
        MenuAction::Reserve,
        MenuAction::UseReserved,
        MenuAction::SwapFrontTop,
        MenuAction::SwapBatch,
        MenuAction::Quit,
    ];

    /// Parse an action from a menu digit or its name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::MenuAction;
    ///
    /// assert_eq!(MenuAction::from_str("1"), Some(MenuAction::Play));
    /// assert_eq!(MenuAction::from_str("USE"), Some(MenuAction::UseReserved));
    /// assert_eq!(MenuAction::from_str(" 0 "), Some(MenuAction::Quit));
    /// assert_eq!(MenuAction::from_str("7"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "play" => Some(MenuAction::Play),
            "2" | "reserve" => Some(MenuAction::Reserve),
            "3" | "use" => Some(MenuAction::UseReserved),
            "4" | "swap" => Some(MenuAction::SwapFrontTop),
            "5" | "batch" => Some(MenuAction::SwapBatch),
            "0" | "quit" | "exit" => Some(MenuAction::Quit),
            _ => None,
        }
    }

    /// Canonical command name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuAction::Play => "play",
            MenuAction::Reserve => "reserve",
            MenuAction::UseReserved => "use",
            MenuAction::SwapFrontTop => "swap",
            MenuAction::SwapBatch => "batch",
            MenuAction::Quit => "quit",
        }
    }

    /// Digit shown next to the action in the menu.
    pub fn menu_key(&self) -> char {
        match self {
            MenuAction::Play => '1',
            MenuAction::Reserve => '2',
            MenuAction::UseReserved => '3',
            MenuAction::SwapFrontTop => '4',
            MenuAction::SwapBatch => '5',
            MenuAction::Quit => '0',
        }
    }

    /// Human-readable menu label.
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Play => "Play piece",
            MenuAction::Reserve => "Reserve piece",
            MenuAction::UseReserved => "Use reserved piece",
            MenuAction::SwapFrontTop => "Swap queue front with stack top",
            MenuAction::SwapBatch => "Swap first 3 queue pieces with top 3 reserved",
            MenuAction::Quit => "Quit",
        }
    }
}
