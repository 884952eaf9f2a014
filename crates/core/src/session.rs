//! Session - the queue, the reserve stack and the generator that feeds them.
//!
//! A session is the unit a frontend drives: it maps each [`MenuAction`] onto the
//! container operations and keeps the queue topped up after every successful action.

use std::fmt;

use crate::exchange;
use crate::generator::PieceGenerator;
use crate::queue::PieceQueue;
use crate::rng::{KindSource, SimpleRng};
use crate::snapshot::InventorySnapshot;
use crate::stack::ReserveStack;
use crate::types::{Container, InventoryError, MenuAction, Piece, PieceId, BATCH_SWAP_LEN};

/// What a successfully applied action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Played(Piece),
    Reserved(Piece),
    UsedReserved(Piece),
    /// `to_queue` came off the stack, `to_stack` left the queue front.
    SwappedFrontTop { to_queue: Piece, to_stack: Piece },
    SwappedBatch { count: usize },
    Quit,
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionOutcome::Played(p) => write!(f, "Played piece {}", p),
            ActionOutcome::Reserved(p) => write!(f, "Reserved piece {}", p),
            ActionOutcome::UsedReserved(p) => write!(f, "Used reserved piece {}", p),
            ActionOutcome::SwappedFrontTop { to_queue, to_stack } => {
                write!(f, "Swapped {} (to queue) with {} (to reserve)", to_queue, to_stack)
            }
            ActionOutcome::SwappedBatch { count } => {
                write!(f, "Swapped the first {} queue pieces with the top {} reserved", count, count)
            }
            ActionOutcome::Quit => f.write_str("Quitting..."),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session<S = SimpleRng> {
    queue: PieceQueue,
    stack: ReserveStack,
    generator: PieceGenerator<S>,
}

impl Session<SimpleRng> {
    /// Session fed by a seeded LCG.
    pub fn seeded(seed: u32) -> Self {
        Self::new(PieceGenerator::seeded(seed))
    }
}

impl<S: KindSource> Session<S> {
    /// Start a session: the queue is filled to capacity, the stack starts empty.
    pub fn new(generator: PieceGenerator<S>) -> Self {
        let mut session = Self {
            queue: PieceQueue::new(),
            stack: ReserveStack::new(),
            generator,
        };
        session.replenish();
        session
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn stack(&self) -> &ReserveStack {
        &self.stack
    }

    pub fn next_id(&self) -> PieceId {
        self.generator.next_id()
    }

    /// Play the front piece of the queue.
    pub fn play(&mut self) -> Result<Piece, InventoryError> {
        let piece = self.queue.dequeue().ok_or(InventoryError::Empty {
            container: Container::Queue,
        })?;
        self.replenish();
        Ok(piece)
    }

    /// Move the front piece of the queue onto the reserve stack.
    ///
    /// A full stack rejects the move before the queue is touched.
    pub fn reserve(&mut self) -> Result<Piece, InventoryError> {
        if self.stack.is_full() {
            return Err(InventoryError::Full {
                container: Container::Stack,
            });
        }
        let piece = self.queue.dequeue().ok_or(InventoryError::Empty {
            container: Container::Queue,
        })?;
        self.stack.push(piece)?;
        self.replenish();
        Ok(piece)
    }

    /// Take the top piece off the reserve stack.
    pub fn use_reserved(&mut self) -> Result<Piece, InventoryError> {
        let piece = self.stack.pop().ok_or(InventoryError::Empty {
            container: Container::Stack,
        })?;
        self.replenish();
        Ok(piece)
    }

    /// Returns the new queue front and the new stack top.
    pub fn swap_front_top(&mut self) -> Result<(Piece, Piece), InventoryError> {
        exchange::swap_front_top(&mut self.queue, &mut self.stack)
    }

    pub fn swap_batch(&mut self) -> Result<(), InventoryError> {
        exchange::swap_batch(&mut self.queue, &mut self.stack, BATCH_SWAP_LEN)
    }

    /// Apply one menu action.
    pub fn apply(&mut self, action: MenuAction) -> Result<ActionOutcome, InventoryError> {
        let result = match action {
            MenuAction::Play => self.play().map(ActionOutcome::Played),
            MenuAction::Reserve => self.reserve().map(ActionOutcome::Reserved),
            MenuAction::UseReserved => self.use_reserved().map(ActionOutcome::UsedReserved),
            MenuAction::SwapFrontTop => self
                .swap_front_top()
                .map(|(to_queue, to_stack)| ActionOutcome::SwappedFrontTop { to_queue, to_stack }),
            MenuAction::SwapBatch => self.swap_batch().map(|()| ActionOutcome::SwappedBatch {
                count: BATCH_SWAP_LEN,
            }),
            MenuAction::Quit => Ok(ActionOutcome::Quit),
        };

        match &result {
            Ok(outcome) => log::debug!("{}: {}", action.as_str(), outcome),
            Err(e) => log::warn!("{} rejected: {}", action.as_str(), e),
        }
        result
    }

    pub fn snapshot(&self) -> InventorySnapshot {
        let mut snap = InventorySnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Refill an existing snapshot without allocating.
    pub fn snapshot_into(&self, snap: &mut InventorySnapshot) {
        snap.clear();
        snap.queue.extend(self.queue.iter().copied());
        snap.stack.extend(self.stack.ordered());
        snap.next_id = self.generator.next_id();
    }

    /// Top the queue up to capacity. Ids are only spent on pieces that fit.
    fn replenish(&mut self) {
        while !self.queue.is_full() {
            let piece = self.generator.generate();
            if self.queue.enqueue(piece).is_err() {
                break;
            }
        }
    }
}
