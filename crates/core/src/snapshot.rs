use arrayvec::ArrayVec;
use serde::Serialize;

use crate::types::{Piece, PieceId, QUEUE_CAPACITY, STACK_CAPACITY};

/// Read-only copy of a session's containers, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct InventorySnapshot {
    /// Front to back.
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    /// Top to base.
    pub stack: ArrayVec<Piece, STACK_CAPACITY>,
    pub next_id: PieceId,
}

impl InventorySnapshot {
    pub fn clear(&mut self) {
        self.queue.clear();
        self.stack.clear();
        self.next_id = 0;
    }

    pub fn queue_front(&self) -> Option<&Piece> {
        self.queue.first()
    }

    pub fn stack_top(&self) -> Option<&Piece> {
        self.stack.first()
    }
}

impl Default for InventorySnapshot {
    fn default() -> Self {
        Self {
            queue: ArrayVec::new(),
            stack: ArrayVec::new(),
            next_id: 0,
        }
    }
}
