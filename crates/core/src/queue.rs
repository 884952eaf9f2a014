//! Upcoming-piece queue - fixed-capacity circular buffer.
//!
//! Storage is a fixed array with a physical `front` index, a physical `back` index (the
//! next free slot) and an occupancy count. Both indices advance modulo the capacity, so
//! enqueue and dequeue are O(1) and never shift elements.

use arrayvec::ArrayVec;

use crate::types::{Container, InventoryError, Piece, QUEUE_CAPACITY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue {
    slots: [Option<Piece>; QUEUE_CAPACITY],
    front: usize,
    back: usize,
    len: usize,
}

impl PieceQueue {
    pub fn new() -> Self {
        Self {
            slots: [None; QUEUE_CAPACITY],
            front: 0,
            back: 0,
            len: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        QUEUE_CAPACITY
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == QUEUE_CAPACITY
    }

    /// Append at the logical back.
    ///
    /// A full queue rejects the piece and is left untouched.
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), InventoryError> {
        if self.is_full() {
            return Err(InventoryError::Full {
                container: Container::Queue,
            });
        }
        self.slots[self.back] = Some(piece);
        self.back = (self.back + 1) % QUEUE_CAPACITY;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the logical front.
    pub fn dequeue(&mut self) -> Option<Piece> {
        if self.is_empty() {
            return None;
        }
        let piece = self.slots[self.front].take();
        self.front = (self.front + 1) % QUEUE_CAPACITY;
        self.len -= 1;
        piece
    }

    pub fn peek_front(&self) -> Option<&Piece> {
        self.get(0)
    }

    /// Piece at logical position `index` (0 = front).
    pub fn get(&self, index: usize) -> Option<&Piece> {
        if index >= self.len {
            return None;
        }
        self.slots[self.physical(index)].as_ref()
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Piece> {
        if index >= self.len {
            return None;
        }
        let idx = self.physical(index);
        self.slots[idx].as_mut()
    }

    /// Front-to-back mutable iteration over the occupied slots.
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Piece> + '_ {
        let len = self.len;
        let (head, tail) = self.slots.split_at_mut(self.front);
        tail.iter_mut()
            .chain(head.iter_mut())
            .take(len)
            .filter_map(Option::as_mut)
    }

    /// Front-to-back view, independent of where the storage has wrapped.
    pub fn ordered(&self) -> ArrayVec<Piece, QUEUE_CAPACITY> {
        self.iter().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        (0..self.len).filter_map(move |i| self.get(i))
    }

    #[inline]
    fn physical(&self, index: usize) -> usize {
        (self.front + index) % QUEUE_CAPACITY
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}
