//! Generation-scoped memo of live-neighbor counts.
//!
//! A coordinate next to several live cells is reached up to 8 times per step;
//! the cache makes sure its 3×3 block is scanned only once. Counts are taken
//! against the world as it stands before the step, and the cache is dropped
//! with the step, so stale entries can never leak into the next generation.

use super::coord::{CoordMap, Coordinate};
use super::world::World;

#[derive(Debug, Default)]
pub struct NeighborCache {
    counts: CoordMap<u8>,
}

impl NeighborCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            counts: CoordMap::with_capacity_and_hasher(cap, Default::default()),
        }
    }

    /// Live neighbors of `at` (self excluded), computed on first request.
    #[inline]
    pub fn count(&mut self, world: &World, at: Coordinate) -> u8 {
        *self
            .counts
            .entry(at)
            .or_insert_with(|| count_live_neighbors(world, at))
    }

    #[inline]
    pub fn cached(&self, at: Coordinate) -> Option<u8> {
        self.counts.get(&at).copied()
    }

    /// Number of distinct coordinates counted so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Live cells in the 3×3 block around `at`, minus one if `at` itself is live.
#[inline]
pub fn count_live_neighbors(world: &World, at: Coordinate) -> u8 {
    let block = at.block().filter(|&c| world.is_alive(c)).count() as u8;
    block - u8::from(world.is_alive(at))
}
