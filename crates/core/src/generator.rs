//! Piece generator - kind selection plus id assignment.

use crate::rng::{KindSource, SimpleRng};
use crate::types::{Piece, PieceId};

/// Produces pieces with strictly increasing ids.
///
/// The id counter never goes backwards and is independent of what happens to pieces after
/// they are handed out, so ids stay unique for the life of the generator.
#[derive(Debug, Clone)]
pub struct PieceGenerator<S = SimpleRng> {
    source: S,
    next_id: PieceId,
}

impl PieceGenerator<SimpleRng> {
    /// Generator backed by a seeded LCG, starting at id 0.
    pub fn seeded(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl<S: KindSource> PieceGenerator<S> {
    pub fn new(source: S) -> Self {
        Self::with_start_id(source, 0)
    }

    pub fn with_start_id(source: S, next_id: PieceId) -> Self {
        Self { source, next_id }
    }

    /// Create the next piece, consuming one id and one kind draw.
    pub fn generate(&mut self) -> Piece {
        let kind = self.source.next_kind();
        let piece = Piece::new(kind, self.next_id);
        self.next_id += 1;
        piece
    }

    /// Id the next generated piece will carry.
    pub fn next_id(&self) -> PieceId {
        self.next_id
    }
}
