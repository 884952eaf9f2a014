//! Session flows: the menu actions, replenishment and id monotonicity.

use std::collections::HashSet;

use tetris_stack::core::{ActionOutcome, CycleKinds, PieceGenerator, Session};
use tetris_stack::types::{
    Container, InventoryError, MenuAction, Piece, PieceKind, QUEUE_CAPACITY, STACK_CAPACITY,
};

fn scripted() -> Session<CycleKinds> {
    Session::new(PieceGenerator::new(CycleKinds::new(PieceKind::ALL)))
}

#[test]
fn test_session_lifecycle() {
    let s = Session::seeded(12345);
    assert_eq!(s.queue().len(), QUEUE_CAPACITY);
    assert!(s.stack().is_empty());
    assert_eq!(s.next_id(), QUEUE_CAPACITY as u64);
}

#[test]
fn test_same_seed_same_session() {
    let mut a = Session::seeded(99);
    let mut b = Session::seeded(99);
    for action in [
        MenuAction::Play,
        MenuAction::Reserve,
        MenuAction::Reserve,
        MenuAction::SwapFrontTop,
        MenuAction::UseReserved,
        MenuAction::Play,
    ] {
        assert_eq!(a.apply(action), b.apply(action));
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_independent_sessions_do_not_share_state() {
    let mut a = scripted();
    let b = scripted();
    a.play().unwrap();
    a.reserve().unwrap();
    assert_eq!(b.snapshot(), scripted().snapshot());
    assert_ne!(a.snapshot(), b.snapshot());
}

#[test]
fn test_ids_stay_unique_and_increasing() {
    let mut s = Session::seeded(2024);
    let mut seen = HashSet::new();
    for piece in s.queue().ordered() {
        assert!(seen.insert(piece.id));
    }

    let script = [
        MenuAction::Play,
        MenuAction::Reserve,
        MenuAction::Reserve,
        MenuAction::Reserve,
        MenuAction::Reserve, // rejected: stack full
        MenuAction::SwapBatch,
        MenuAction::UseReserved,
        MenuAction::Play,
        MenuAction::SwapFrontTop,
        MenuAction::UseReserved,
        MenuAction::UseReserved,
        MenuAction::UseReserved, // rejected: stack empty
        MenuAction::Play,
    ];
    for action in script {
        let next_before = s.next_id();
        let _ = s.apply(action);
        assert!(s.next_id() >= next_before);
        for piece in s.queue().ordered() {
            if piece.id >= next_before {
                assert!(seen.insert(piece.id), "id {} reused", piece.id);
            }
        }
        assert_eq!(s.queue().len(), QUEUE_CAPACITY);
        assert!(s.stack().len() <= STACK_CAPACITY);
    }
}

#[test]
fn test_reserve_use_round_trip() {
    let mut s = scripted();
    let reserved = s.reserve().unwrap();
    assert_eq!(reserved, Piece::new(PieceKind::I, 0));
    assert_eq!(
        s.apply(MenuAction::UseReserved),
        Ok(ActionOutcome::UsedReserved(reserved))
    );
    assert!(s.stack().is_empty());
}

#[test]
fn test_rejected_actions_report_the_container() {
    let mut s = scripted();
    assert_eq!(
        s.apply(MenuAction::UseReserved),
        Err(InventoryError::Empty {
            container: Container::Stack
        })
    );
    assert!(matches!(
        s.apply(MenuAction::SwapFrontTop),
        Err(InventoryError::InsufficientPieces { needed: 1, .. })
    ));
    for _ in 0..STACK_CAPACITY {
        s.apply(MenuAction::Reserve).unwrap();
    }
    assert_eq!(
        s.apply(MenuAction::Reserve),
        Err(InventoryError::Full {
            container: Container::Stack
        })
    );
}

#[test]
fn test_batch_swap_after_queue_wrapped() {
    let mut s = scripted();
    // Play a few times so the queue's storage has wrapped.
    for _ in 0..7 {
        s.play().unwrap();
    }
    for _ in 0..STACK_CAPACITY {
        s.reserve().unwrap();
    }
    let before = s.snapshot();
    let queue_front3: Vec<_> = before.queue[..3].to_vec();
    let stack_top3: Vec<_> = before.stack[..3].to_vec();

    assert_eq!(
        s.apply(MenuAction::SwapBatch),
        Ok(ActionOutcome::SwappedBatch { count: 3 })
    );
    let after = s.snapshot();
    assert_eq!(&after.queue[..3], stack_top3.as_slice());
    assert_eq!(&after.stack[..3], queue_front3.as_slice());
    assert_eq!(&after.queue[3..], &before.queue[3..]);
    assert_eq!(after.next_id, before.next_id);
}

#[test]
fn test_quit_is_a_no_op() {
    let mut s = scripted();
    let before = s.snapshot();
    assert_eq!(s.apply(MenuAction::Quit), Ok(ActionOutcome::Quit));
    assert_eq!(s.snapshot(), before);
}

#[test]
fn test_closure_kind_source() {
    let mut s = Session::new(PieceGenerator::with_start_id(|| PieceKind::L, 40));
    let played = s.play().unwrap();
    assert_eq!(played, Piece::new(PieceKind::L, 40));
    assert!(s.queue().ordered().iter().all(|p| p.kind == PieceKind::L));
    assert_eq!(s.next_id(), 46);
}
