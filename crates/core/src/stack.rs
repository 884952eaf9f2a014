//! Reserve stack - fixed-capacity LIFO buffer.

use arrayvec::ArrayVec;

use crate::types::{Container, InventoryError, Piece, STACK_CAPACITY};

/// Slot 0 is the base; the top lives at `len - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveStack {
    slots: [Option<Piece>; STACK_CAPACITY],
    len: usize,
}

impl ReserveStack {
    pub fn new() -> Self {
        Self {
            slots: [None; STACK_CAPACITY],
            len: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        STACK_CAPACITY
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == STACK_CAPACITY
    }

    pub fn push(&mut self, piece: Piece) -> Result<(), InventoryError> {
        if self.is_full() {
            return Err(InventoryError::Full {
                container: Container::Stack,
            });
        }
        self.slots[self.len] = Some(piece);
        self.len += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Piece> {
        if self.is_empty() {
            return None;
        }
        self.len -= 1;
        self.slots[self.len].take()
    }

    pub fn peek_top(&self) -> Option<&Piece> {
        self.len.checked_sub(1).and_then(|top| self.slots[top].as_ref())
    }

    /// Piece at `depth` below the top (0 = top).
    pub fn get(&self, depth: usize) -> Option<&Piece> {
        if depth >= self.len {
            return None;
        }
        self.slots[self.len - 1 - depth].as_ref()
    }

    pub(crate) fn get_mut(&mut self, depth: usize) -> Option<&mut Piece> {
        if depth >= self.len {
            return None;
        }
        self.slots[self.len - 1 - depth].as_mut()
    }

    /// Top-to-base mutable iteration.
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Piece> + '_ {
        self.slots[..self.len].iter_mut().rev().filter_map(Option::as_mut)
    }

    /// Top-to-base view.
    pub fn ordered(&self) -> ArrayVec<Piece, STACK_CAPACITY> {
        self.slots[..self.len].iter().rev().flatten().copied().collect()
    }
}

impl Default for ReserveStack {
    fn default() -> Self {
        Self::new()
    }
}
