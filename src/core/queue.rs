//! Queue module - 7-bag random piece generation with look-ahead
//!
//! Implements the "7-bag" randomization used by modern falling-block games.
//! Each bag holds one of each kind (I, O, T, S, Z, J, L), shuffled; bags are
//! appended to a buffer that always covers the preview window, so the same
//! seed reproduces the exact piece sequence.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, PREVIEW_LEN};

/// Seeded linear congruential generator, the crate's only randomness source.
/// Good enough for bag shuffling and keeps piece sequences reproducible.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    /// A seed of 0 is remapped to 1 so the stream is never all zeros.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Next value in the stream.
    /// Numerical Recipes constants: a=1664525, c=1013904223, m=2^32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform value in [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Fisher-Yates shuffle in place
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// 7-bag piece generator with a bounded preview
#[derive(Debug, Clone)]
pub struct PieceQueue {
    /// Buffered upcoming kinds, front is next
    buffer: Vec<PieceKind>,
    /// Look-ahead over the front of the buffer
    preview: ArrayVec<PieceKind, PREVIEW_LEN>,
    /// RNG for shuffling bags
    rng: SimpleRng,
}

impl PieceQueue {
    /// Create a new piece queue with the given seed
    pub fn new(seed: u32) -> Self {
        let mut queue = Self {
            buffer: Vec::with_capacity(2 * PieceKind::ALL.len()),
            preview: ArrayVec::new(),
            rng: SimpleRng::new(seed),
        };
        queue.reset();
        queue
    }

    /// Clear the buffer and refill with two fresh bags.
    ///
    /// Two bags guarantee a full preview immediately. The RNG state is not
    /// rewound, so a reset continues the seeded stream.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.refill();
        self.refill();
        self.refresh_preview();
    }

    /// Append one shuffled bag of all seven kinds
    fn refill(&mut self) {
        let mut bag = PieceKind::ALL;
        self.rng.shuffle(&mut bag);
        self.buffer.extend_from_slice(&bag);
    }

    /// Dequeue the next kind, refilling first whenever the buffer has
    /// dropped below the preview window.
    pub fn next(&mut self) -> PieceKind {
        if self.buffer.len() < PREVIEW_LEN {
            self.refill();
        }
        let kind = self.buffer.remove(0);
        self.refresh_preview();
        kind
    }

    /// Upcoming kinds, at most `PREVIEW_LEN` of them.
    ///
    /// Holds exactly `PREVIEW_LEN` entries except right after the dequeue
    /// that lands the buffer on the window boundary, where it briefly holds
    /// one fewer until the next dequeue refills.
    pub fn preview(&self) -> &[PieceKind] {
        &self.preview
    }

    fn refresh_preview(&mut self) {
        self.preview.clear();
        for &kind in self.buffer.iter().take(PREVIEW_LEN) {
            self.preview.push(kind);
        }
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
