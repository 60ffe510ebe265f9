//! Pending births and deaths for one generation transition.

use super::coord::{CoordMap, Coordinate};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Birth,
    Death,
}

/// A decision for one coordinate, taking effect at `generation`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Change {
    pub kind: ChangeKind,
    pub generation: u64,
}

impl Change {
    #[inline]
    pub const fn birth(generation: u64) -> Self {
        Self {
            kind: ChangeKind::Birth,
            generation,
        }
    }

    #[inline]
    pub const fn death(generation: u64) -> Self {
        Self {
            kind: ChangeKind::Death,
            generation,
        }
    }
}

/// At most one [`Change`] per coordinate.
///
/// The first decision recorded for a coordinate wins; later attempts are
/// rejected, so a cell reached from several live neighbors is settled once.
#[derive(Clone, Debug, Default)]
pub struct ChangeSet {
    entries: CoordMap<Change>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            entries: CoordMap::with_capacity_and_hasher(cap, Default::default()),
        }
    }

    /// Record `change` for `at`.
    /// Returns `true` if recorded, `false` if `at` already had a decision.
    #[inline]
    pub fn record(&mut self, at: Coordinate, change: Change) -> bool {
        use std::collections::hash_map::Entry;
        match self.entries.entry(at) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(change);
                true
            }
        }
    }

    #[inline]
    pub fn contains(&self, at: Coordinate) -> bool {
        self.entries.contains_key(&at)
    }

    #[inline]
    pub fn get(&self, at: Coordinate) -> Option<Change> {
        self.entries.get(&at).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn births(&self) -> usize {
        self.count_kind(ChangeKind::Birth)
    }

    pub fn deaths(&self) -> usize {
        self.count_kind(ChangeKind::Death)
    }

    fn count_kind(&self, kind: ChangeKind) -> usize {
        self.entries.values().filter(|c| c.kind == kind).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Change)> + '_ {
        self.entries.iter().map(|(&at, &change)| (at, change))
    }
}

impl IntoIterator for ChangeSet {
    type Item = (Coordinate, Change);
    type IntoIter = std::collections::hash_map::IntoIter<Coordinate, Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(Coordinate, Change)> for ChangeSet {
    /// First occurrence of a coordinate wins, same as [`ChangeSet::record`].
    fn from_iter<I: IntoIterator<Item = (Coordinate, Change)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (at, change) in iter {
            set.record(at, change);
        }
        set
    }
}
