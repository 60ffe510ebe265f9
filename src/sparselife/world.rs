//! World state: the live-cell map, generation counter and bounding box.

use std::time::{Duration, Instant};

use super::bounds::BoundingBox;
use super::changes::{ChangeKind, ChangeSet};
use super::coord::{CoordMap, Coordinate};

/// A sparse Game of Life universe.
///
/// `cells` holds exactly the live coordinates, each mapped to the generation
/// it was born in. A coordinate missing from the map is dead; there are no
/// dead-cell entries. The only mutation paths are [`World::insert`],
/// [`World::insert_all`] and [`World::apply_changes`], and every one of them
/// ends with a full bounding-box rescan.
#[derive(Clone, Debug)]
pub struct World {
    cells: CoordMap<u64>,
    pub(super) generation: u64,
    pub(super) last_change_count: usize,
    bounds: BoundingBox,
    created_at: Instant,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Empty world at generation 0 with the origin bounding box.
    pub fn new() -> Self {
        Self {
            cells: CoordMap::default(),
            generation: 0,
            last_change_count: 0,
            bounds: BoundingBox::EMPTY,
            created_at: Instant::now(),
        }
    }

    /// Mark `at` alive, born at `generation`. Overwrites any existing entry.
    pub fn insert(&mut self, at: Coordinate, generation: u64) {
        self.cells.insert(at, generation);
        self.recompute_bounds();
    }

    /// Insert a batch of cells as one mutation: the bounding box is rescanned
    /// once after the whole batch instead of after every cell.
    pub fn insert_all<I>(&mut self, cells: I, generation: u64)
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let iter = cells.into_iter();
        self.cells.reserve(iter.size_hint().0);
        for at in iter {
            self.cells.insert(at, generation);
        }
        self.recompute_bounds();
    }

    #[inline]
    pub fn is_alive(&self, at: Coordinate) -> bool {
        self.cells.contains_key(&at)
    }

    /// Generation in which the cell at `at` was born, if it is alive.
    #[inline]
    pub fn birth_generation(&self, at: Coordinate) -> Option<u64> {
        self.cells.get(&at).copied()
    }

    /// Commit a change set: births insert, deaths remove, then the bounding
    /// box is rescanned. Holding `&mut self` for the whole call means no
    /// reader can observe a half-applied set.
    pub fn apply_changes(&mut self, changes: ChangeSet) {
        for (at, change) in changes {
            match change.kind {
                ChangeKind::Birth => {
                    self.cells.insert(at, change.generation);
                }
                ChangeKind::Death => {
                    self.cells.remove(&at);
                }
            }
        }
        self.recompute_bounds();
    }

    fn recompute_bounds(&mut self) {
        self.bounds = BoundingBox::enclosing(self.cells.keys().copied());
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Births plus deaths applied by the most recent evolution step.
    #[inline]
    pub fn last_change_count(&self) -> usize {
        self.last_change_count
    }

    #[inline]
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Wall-clock time since the world was created.
    #[inline]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Live coordinates in unspecified order.
    pub fn live_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.keys().copied()
    }

    pub fn for_each_live<F: FnMut(Coordinate)>(&self, mut f: F) {
        for &at in self.cells.keys() {
            f(at);
        }
    }
}

impl FromIterator<Coordinate> for World {
    /// A generation-0 world with every yielded coordinate alive.
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut world = Self::new();
        world.insert_all(iter, 0);
        world
    }
}

#[cfg(test)]
mod tests {
    use super::{BoundingBox, World};
    use crate::sparselife::changes::{Change, ChangeSet};
    use crate::sparselife::coord::Coordinate;

    fn c(x: i64, y: i64) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn new_world_is_empty_at_origin() {
        let world = World::new();
        assert!(world.is_empty());
        assert_eq!(world.generation(), 0);
        assert_eq!(world.last_change_count(), 0);
        assert_eq!(world.bounds(), BoundingBox::EMPTY);
    }

    #[test]
    fn insert_marks_alive_in_every_quadrant() {
        for at in [c(0, 0), c(5, 5), c(-3, -3)] {
            let mut world = World::new();
            world.insert(at, 0);
            assert!(world.is_alive(at));
            assert_eq!(world.bounds(), BoundingBox::new(at, at));
        }
    }

    #[test]
    fn insert_overwrites_birth_generation() {
        let mut world = World::new();
        world.insert(c(2, 2), 0);
        world.insert(c(2, 2), 7);
        assert_eq!(world.population(), 1);
        assert_eq!(world.birth_generation(c(2, 2)), Some(7));
        assert_eq!(world.birth_generation(c(2, 3)), None);
    }

    #[test]
    fn apply_births() {
        let mut world = World::new();
        world.insert(c(0, 0), 0);
        let changes: ChangeSet = [(c(1, 1), Change::birth(1)), (c(2, 2), Change::birth(1))]
            .into_iter()
            .collect();
        world.apply_changes(changes);

        assert_eq!(world.population(), 3);
        assert_eq!(world.birth_generation(c(2, 2)), Some(1));
        assert_eq!(world.bounds(), BoundingBox::new(c(0, 0), c(2, 2)));
    }

    #[test]
    fn apply_deaths_keeps_outer_bounds() {
        let mut world: World = [c(0, 0), c(1, 1), c(2, 2)].into_iter().collect();
        world.apply_changes([(c(1, 1), Change::death(1))].into_iter().collect());

        assert!(!world.is_alive(c(1, 1)));
        assert_eq!(world.population(), 2);
        assert_eq!(world.bounds(), BoundingBox::new(c(0, 0), c(2, 2)));
    }

    #[test]
    fn apply_mixed_changes_grows_bounds() {
        let mut world: World = [c(0, 0), c(1, 1)].into_iter().collect();
        let changes: ChangeSet = [
            (c(1, 1), Change::death(1)),
            (c(-1, -1), Change::birth(1)),
            (c(2, 2), Change::birth(1)),
        ]
        .into_iter()
        .collect();
        world.apply_changes(changes);

        let mut live: Vec<_> = world.live_cells().collect();
        live.sort();
        assert_eq!(live, vec![c(-1, -1), c(0, 0), c(2, 2)]);
        assert_eq!(world.bounds(), BoundingBox::new(c(-1, -1), c(2, 2)));
    }

    #[test]
    fn removing_last_cell_resets_bounds() {
        let mut world: World = [c(9, -4)].into_iter().collect();
        world.apply_changes([(c(9, -4), Change::death(1))].into_iter().collect());
        assert!(world.is_empty());
        assert_eq!(world.bounds(), BoundingBox::EMPTY);
    }

    #[test]
    fn insert_all_matches_repeated_insert() {
        let cells = [c(3, -1), c(-4, 6), c(0, 0), c(3, -1)];
        let mut one_by_one = World::new();
        for &at in &cells {
            one_by_one.insert(at, 0);
        }
        let batch: World = cells.into_iter().collect();

        assert_eq!(batch.population(), 3);
        assert_eq!(batch.population(), one_by_one.population());
        assert_eq!(batch.bounds(), one_by_one.bounds());
    }
}
