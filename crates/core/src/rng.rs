//! RNG module - piece kind selection
//!
//! The generator picks each kind uniformly at random. The randomness is injected through
//! [`KindSource`] so sessions can run on a seeded LCG in production and on scripted
//! sequences in tests.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::PieceKind;

/// Anything that can hand out the next piece kind.
///
/// Implemented by [`SimpleRng`] and by any `FnMut() -> PieceKind` closure.
pub trait KindSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<F> KindSource for F
where
    F: FnMut() -> PieceKind,
{
    fn next_kind(&mut self) -> PieceKind {
        self()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the wall clock.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
            .unwrap_or(1);
        Self::new(nanos)
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// The low bits of a power-of-two LCG cycle with a tiny period, so only the high half
    /// of the state is used.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }

    /// Current state; feeding it back into [`SimpleRng::new`] resumes the sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl KindSource for SimpleRng {
    fn next_kind(&mut self) -> PieceKind {
        let idx = self.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }
}

/// Cycles through a fixed list of kinds forever.
#[derive(Debug, Clone)]
pub struct CycleKinds {
    kinds: Vec<PieceKind>,
    pos: usize,
}

impl CycleKinds {
    /// An empty list falls back to `I` pieces.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let mut kinds = kinds.into();
        if kinds.is_empty() {
            kinds.push(PieceKind::I);
        }
        Self { kinds, pos: 0 }
    }
}

impl KindSource for CycleKinds {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.pos];
        self.pos = (self.pos + 1) % self.kinds.len();
        kind
    }
}
