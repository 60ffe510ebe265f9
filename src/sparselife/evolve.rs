//! One-generation evolution under B3/S23.
//!
//! Only a live cell or a neighbor of one can change state, so the candidate
//! set is the union of the 3×3 blocks around live cells. Each step therefore
//! costs O(live cells) no matter how far apart they sit on the plane.
//!
//! A step runs in two phases:
//! 1. analysis: read-only over `&World`, fills a [`NeighborCache`] and a
//!    [`ChangeSet`] that live only for this call;
//! 2. commit: bumps the generation, records the change count and applies the
//!    set in one [`World::apply_changes`] call.

use tracing::trace;

use super::changes::{Change, ChangeSet};
use super::coord::Coordinate;
use super::neighbors::NeighborCache;
use super::world::World;

const BIRTH_NEIGHBORS: u8 = 3;
const MIN_SURVIVAL_NEIGHBORS: u8 = 2;
const MAX_SURVIVAL_NEIGHBORS: u8 = 3;

/// Counters describing the work done by one [`World::evolve`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Candidate visits: 9 per cell that was alive before the step.
    pub candidates_visited: usize,
    /// Distinct coordinates whose neighbor count was computed.
    pub counts_computed: usize,
    pub births: usize,
    pub deaths: usize,
}

impl StepStats {
    #[inline]
    pub fn changes(&self) -> usize {
        self.births + self.deaths
    }
}

/// B3/S23 decision for one coordinate, `None` when its state is unchanged.
#[inline]
pub fn decide(alive: bool, neighbors: u8, generation: u64) -> Option<Change> {
    match (alive, neighbors) {
        (false, BIRTH_NEIGHBORS) => Some(Change::birth(generation)),
        (true, n) if !(MIN_SURVIVAL_NEIGHBORS..=MAX_SURVIVAL_NEIGHBORS).contains(&n) => {
            Some(Change::death(generation))
        }
        _ => None,
    }
}

/// Decide the fate of `at` unless it already has a decision this step.
fn analyze(
    world: &World,
    at: Coordinate,
    generation: u64,
    cache: &mut NeighborCache,
    changes: &mut ChangeSet,
) {
    if changes.contains(at) {
        return;
    }
    let alive = world.is_alive(at);
    let neighbors = cache.count(world, at);
    if let Some(change) = decide(alive, neighbors, generation) {
        changes.record(at, change);
    }
}

/// Build the change set that takes `world` to its next generation, without
/// mutating it. Decisions are stamped with `world.generation() + 1`.
pub fn compute_changes(world: &World) -> (ChangeSet, StepStats) {
    let next_generation = world.generation() + 1;
    let live = world.population();
    let mut cache = NeighborCache::with_capacity(live.saturating_mul(4));
    let mut changes = ChangeSet::with_capacity(live);
    let mut candidates_visited = 0usize;

    for origin in world.live_cells() {
        for at in origin.block() {
            candidates_visited += 1;
            analyze(world, at, next_generation, &mut cache, &mut changes);
        }
    }

    let stats = StepStats {
        candidates_visited,
        counts_computed: cache.len(),
        births: changes.births(),
        deaths: changes.deaths(),
    };
    (changes, stats)
}

impl World {
    /// Advance exactly one generation.
    pub fn evolve(&mut self) -> StepStats {
        let (changes, stats) = compute_changes(self);

        self.generation += 1;
        self.last_change_count = changes.len();
        self.apply_changes(changes);

        trace!(
            generation = self.generation,
            population = self.population(),
            births = stats.births,
            deaths = stats.deaths,
            candidates = stats.candidates_visited,
            counted = stats.counts_computed,
            "world evolved"
        );
        stats
    }

    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.evolve();
        }
    }
}
