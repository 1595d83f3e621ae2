//! Randomness abstraction for the simulation core.
//!
//! The engine's only nondeterministic input is a source of bounded random
//! integers. Keeping that behind [`RandomSource`] makes the engine swappable
//! between a real system RNG for gameplay, a seeded generator for
//! reproducible runs, and a scripted source for tests.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// A source of bounded random integers.
///
/// Contract: `next_int(upper_bound)` returns a value uniformly distributed in
/// `[0, upper_bound)`. An `upper_bound` of `0` returns `0` without error.
/// The engine queries nothing else from its randomness source.
pub trait RandomSource {
    fn next_int(&mut self, upper_bound: u32) -> u32;
}

/// Production randomness backed by the thread-local system RNG.
#[derive(Debug, Clone, Default)]
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for SystemRandom {
    fn next_int(&mut self, upper_bound: u32) -> u32 {
        if upper_bound == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..upper_bound)
    }
}

/// Deterministic randomness backed by a seeded PCG generator.
///
/// Same seed, same sequence within a process run. Useful for demo playback
/// and reproducing reported boards.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    inner: Pcg32,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg32::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_int(&mut self, upper_bound: u32) -> u32 {
        if upper_bound == 0 {
            return 0;
        }
        self.inner.gen_range(0..upper_bound)
    }
}

/// Scripted randomness: replays a fixed queue of values.
///
/// Each `next_int` call pops the front of the queue; values are reduced
/// modulo the requested bound, and an exhausted queue yields `0`. Tests use
/// this to steer exactly which lanes spawn cars.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<u32>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_int(&mut self, upper_bound: u32) -> u32 {
        if upper_bound == 0 {
            return 0;
        }
        match self.values.pop_front() {
            Some(value) => value % upper_bound,
            None => 0,
        }
    }
}
