//! fnf-rng: random sources for table-driven content generation
//!
//! Every generator in the toolkit draws its randomness through the narrow
//! [`Rnd`] capability. Production code uses the seeded [`GameRng`]; tests
//! substitute the deterministic fakes: [`FixedRnd`], [`AscendingRnd`] and
//! the scripted [`SequenceRnd`].

mod fake;
mod game_rng;

pub use fake::{AscendingRnd, FixedRnd, SequenceRnd};
pub use game_rng::GameRng;

/// Source of uniformly distributed integers.
pub trait Rnd {
    /// Returns a value in the inclusive range `min..=max`.
    ///
    /// Implementations return `min` when `min > max`.
    fn next_uniform(&mut self, min: i32, max: i32) -> i32;

    /// Returns an index in `0..count`, or 0 if `count` is 0.
    fn next_index(&mut self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        let max = i32::try_from(count - 1).unwrap_or(i32::MAX);
        self.next_uniform(0, max) as usize
    }

    /// Returns the indices `0..count` in shuffled order (Fisher-Yates).
    fn shuffled_indices(&mut self, count: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..count).collect();
        for i in (1..count).rev() {
            let j = self.next_index(i + 1);
            indices.swap(i, j);
        }
        indices
    }
}

impl<R: Rnd + ?Sized> Rnd for &mut R {
    fn next_uniform(&mut self, min: i32, max: i32) -> i32 {
        (**self).next_uniform(min, max)
    }
}
