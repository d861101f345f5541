//! Random sources for fallback selection

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::domain::traits::RandomSource;

/// Thread-local generator, used in normal runs
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl ThreadRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Seeded generator for reproducible sessions
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed list of indices, cycling when exhausted
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    indices: Vec<usize>,
    draws: usize,
}

#[cfg(test)]
impl SequenceRandom {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, draws: 0 }
    }

    /// Number of indices handed out so far
    pub fn draws(&self) -> usize {
        self.draws
    }
}

#[cfg(test)]
impl RandomSource for SequenceRandom {
    // Indices are returned as scripted, even when out of range.
    fn next_index(&mut self, _len: usize) -> usize {
        let index = if self.indices.is_empty() {
            0
        } else {
            self.indices[self.draws % self.indices.len()]
        };
        self.draws += 1;
        index
    }
}
