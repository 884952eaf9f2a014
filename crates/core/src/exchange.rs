//! Exchange coordinator - swaps between the queue and the reserve stack.
//!
//! Both operations check every precondition before touching storage, so a rejected swap
//! leaves the two containers exactly as they were.

use std::mem;

use crate::queue::PieceQueue;
use crate::stack::ReserveStack;
use crate::types::{InventoryError, Piece};

/// Exchange the queue's front piece with the stack's top piece.
///
/// Sizes do not change and every other piece keeps its position. Returns the new queue
/// front and the new stack top.
pub fn swap_front_top(
    queue: &mut PieceQueue,
    stack: &mut ReserveStack,
) -> Result<(Piece, Piece), InventoryError> {
    let (queue_len, stack_len) = (queue.len(), stack.len());
    match (queue.get_mut(0), stack.get_mut(0)) {
        (Some(front), Some(top)) => {
            mem::swap(front, top);
            log::debug!("swapped queue front {} with stack top {}", top, front);
            Ok((*front, *top))
        }
        _ => Err(InventoryError::InsufficientPieces {
            needed: 1,
            queue_len,
            stack_len,
        }),
    }
}

/// Exchange the first `n` queue pieces with the top `n` stack pieces.
///
/// Queue logical position `i` pairs with stack depth `i` (position `len - 1 - i` from the
/// base): the front-most queued piece trades places with the top-most reserved one. Given
/// queue `[A, B, C, ..]` and stack top-down `[X, Y, Z, ..]`, the result is queue
/// `[X, Y, Z, ..]` and stack top-down `[A, B, C, ..]`.
///
/// Fails with [`InventoryError::InsufficientPieces`] if either side holds fewer than `n`
/// pieces. `n == 0` succeeds without doing anything.
pub fn swap_batch(
    queue: &mut PieceQueue,
    stack: &mut ReserveStack,
    n: usize,
) -> Result<(), InventoryError> {
    if queue.len() < n || stack.len() < n {
        return Err(InventoryError::InsufficientPieces {
            needed: n,
            queue_len: queue.len(),
            stack_len: stack.len(),
        });
    }

    let pairs = queue.iter_mut().zip(stack.iter_mut()).take(n);
    let mut swapped = 0;
    for (q, s) in pairs {
        mem::swap(q, s);
        swapped += 1;
    }
    debug_assert_eq!(swapped, n, "length check admitted a short side");
    log::debug!("swapped {} piece(s) between queue and reserve stack", n);
    Ok(())
}
