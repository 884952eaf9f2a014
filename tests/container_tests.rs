//! Queue, stack and exchange behaviour through the public API.

use tetris_stack::core::{swap_batch, swap_front_top, PieceGenerator, PieceQueue, ReserveStack};
use tetris_stack::types::{
    Container, InventoryError, Piece, PieceKind, QUEUE_CAPACITY, STACK_CAPACITY,
};

fn p(kind: PieceKind, id: u64) -> Piece {
    Piece::new(kind, id)
}

fn ids(pieces: &[Piece]) -> Vec<u64> {
    pieces.iter().map(|p| p.id).collect()
}

// ============== Queue ==============

#[test]
fn test_queue_fifo_across_many_wraps() {
    let mut q = PieceQueue::new();
    let mut gen = PieceGenerator::seeded(3);
    let mut expected_front = 0u64;

    for _ in 0..QUEUE_CAPACITY {
        q.enqueue(gen.generate()).unwrap();
    }
    for _ in 0..50 {
        let out = q.dequeue().unwrap();
        assert_eq!(out.id, expected_front);
        expected_front += 1;
        q.enqueue(gen.generate()).unwrap();
        assert_eq!(q.len(), QUEUE_CAPACITY);
    }
}

#[test]
fn test_full_queue_rejects_and_keeps_view() {
    let mut q = PieceQueue::new();
    for id in 0..QUEUE_CAPACITY as u64 {
        q.enqueue(p(PieceKind::I, id)).unwrap();
    }
    let before = q.ordered();

    assert_eq!(
        q.enqueue(p(PieceKind::T, 99)),
        Err(InventoryError::Full {
            container: Container::Queue
        })
    );
    assert_eq!(q.ordered(), before);
}

#[test]
fn test_queue_drains_to_empty() {
    let mut q = PieceQueue::new();
    q.enqueue(p(PieceKind::O, 1)).unwrap();
    assert_eq!(q.dequeue(), Some(p(PieceKind::O, 1)));
    assert_eq!(q.dequeue(), None);
    assert_eq!(q.peek_front(), None);
    assert!(q.is_empty());
}

// ============== Stack ==============

#[test]
fn test_stack_lifo_and_bounds() {
    let mut s = ReserveStack::new();
    for id in 0..STACK_CAPACITY as u64 {
        s.push(p(PieceKind::L, id)).unwrap();
    }
    assert!(s.is_full());
    assert!(s.push(p(PieceKind::L, 50)).is_err());

    assert_eq!(s.pop().map(|p| p.id), Some(2));
    assert_eq!(s.pop().map(|p| p.id), Some(1));
    s.push(p(PieceKind::I, 7)).unwrap();
    assert_eq!(ids(&s.ordered()), vec![7, 0]);
}

#[test]
fn test_pop_on_empty_stack_leaves_it_unchanged() {
    let mut s = ReserveStack::new();
    assert_eq!(s.pop(), None);
    assert!(s.is_empty());
    assert!(s.ordered().is_empty());
}

// ============== Exchange ==============

#[test]
fn test_swap_front_top_example() {
    let mut q = PieceQueue::new();
    q.enqueue(p(PieceKind::I, 0)).unwrap();
    q.enqueue(p(PieceKind::O, 1)).unwrap();
    let mut s = ReserveStack::new();
    s.push(p(PieceKind::L, 4)).unwrap();
    s.push(p(PieceKind::T, 5)).unwrap();

    swap_front_top(&mut q, &mut s).unwrap();

    assert_eq!(q.peek_front(), Some(&p(PieceKind::T, 5)));
    assert_eq!(s.peek_top(), Some(&p(PieceKind::I, 0)));
    assert_eq!(q.get(1), Some(&p(PieceKind::O, 1)));
    assert_eq!(s.get(1), Some(&p(PieceKind::L, 4)));
    assert_eq!((q.len(), s.len()), (2, 2));
}

#[test]
fn test_swap_batch_is_all_or_nothing() {
    for stack_len in 0..3u64 {
        let mut q = PieceQueue::new();
        for id in 0..5 {
            q.enqueue(p(PieceKind::I, id)).unwrap();
        }
        let mut s = ReserveStack::new();
        for id in 0..stack_len {
            s.push(p(PieceKind::T, 100 + id)).unwrap();
        }
        let (q_before, s_before) = (q.ordered(), s.ordered());

        let err = swap_batch(&mut q, &mut s, 3).unwrap_err();
        assert_eq!(
            err,
            InventoryError::InsufficientPieces {
                needed: 3,
                queue_len: 5,
                stack_len: stack_len as usize,
            }
        );
        assert_eq!(q.ordered(), q_before);
        assert_eq!(s.ordered(), s_before);
    }
}

#[test]
fn test_swap_batch_example() {
    let (a, b, c) = (p(PieceKind::I, 0), p(PieceKind::O, 1), p(PieceKind::T, 2));
    let (x, y, z) = (p(PieceKind::L, 7), p(PieceKind::T, 8), p(PieceKind::O, 9));

    let mut q = PieceQueue::new();
    for piece in [a, b, c, p(PieceKind::L, 3), p(PieceKind::I, 4)] {
        q.enqueue(piece).unwrap();
    }
    let mut s = ReserveStack::new();
    for piece in [z, y, x] {
        s.push(piece).unwrap();
    }

    swap_batch(&mut q, &mut s, 3).unwrap();

    assert_eq!(ids(&q.ordered()), vec![7, 8, 9, 3, 4]);
    assert_eq!(s.ordered().as_slice(), &[a, b, c]);
}

#[test]
fn test_double_batch_swap_restores_state() {
    let mut q = PieceQueue::new();
    for id in 0..5 {
        q.enqueue(p(PieceKind::O, id)).unwrap();
    }
    q.dequeue();
    q.dequeue();
    q.enqueue(p(PieceKind::L, 5)).unwrap();
    let mut s = ReserveStack::new();
    for id in 10..13 {
        s.push(p(PieceKind::I, id)).unwrap();
    }
    let (q0, s0) = (q.clone(), s.clone());

    swap_batch(&mut q, &mut s, 3).unwrap();
    assert_ne!(q, q0);
    swap_batch(&mut q, &mut s, 3).unwrap();
    assert_eq!(q, q0);
    assert_eq!(s, s0);
}

// ============== Generator ==============

#[test]
fn test_generated_ids_strictly_increase() {
    let mut gen = PieceGenerator::seeded(5);
    let mut last = None;
    for _ in 0..100 {
        let piece = gen.generate();
        if let Some(prev) = last {
            assert!(piece.id > prev);
        }
        last = Some(piece.id);
    }
}
