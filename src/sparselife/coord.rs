//! Plane coordinates and the hash-map plumbing keyed by them.
//!
//! A `Coordinate` is a plain `(i64, i64)` value. Hashing is specialised: the
//! key is folded into a single `u64` with two distinct odd multipliers, and
//! `CoordHasher` passes that word straight through instead of running
//! SipHash over sixteen bytes on every neighbor probe.

use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasherDefault, Hash, Hasher};

// ── Hash function ───────────────────────────────────────────────────────

/// Separate multipliers for x and y so that grid-aligned patterns (rows,
/// columns, diagonals) do not collide systematically.
const MX: u64 = 0x517c_c1b7_2722_0a95;
const MY: u64 = 0x6c62_272e_07bb_0142;

#[inline(always)]
pub(crate) fn coord_hash(x: i64, y: i64) -> u64 {
    // Rotate y's lane so both axes feed the low bucket bits.
    (x as u64).wrapping_mul(MX) ^ (y as u64).wrapping_mul(MY).rotate_right(31)
}

// ── Coordinate ──────────────────────────────────────────────────────────

/// A position on the unbounded plane. `y` grows downwards, matching the row
/// order of pattern files and rendered viewports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Coordinate shifted by `(dx, dy)`. Arithmetic wraps at the `i64`
    /// limits, so the plane closes on itself there instead of faulting.
    #[inline]
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// The 3×3 block centred on this coordinate, the coordinate itself
    /// included. Column-major, top-left first.
    #[inline]
    pub fn block(self) -> impl Iterator<Item = Coordinate> {
        (-1..=1i64).flat_map(move |dx| (-1..=1i64).map(move |dy| self.offset(dx, dy)))
    }

    /// The 8 Moore neighbors (the block without its centre).
    #[inline]
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        self.block().filter(move |&c| c != self)
    }
}

impl Hash for Coordinate {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(coord_hash(self.x, self.y));
    }
}

impl From<(i64, i64)> for Coordinate {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<Coordinate> for (i64, i64) {
    #[inline]
    fn from(c: Coordinate) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

// ── Hasher ──────────────────────────────────────────────────────────────

/// Pass-through hasher for keys that already mix themselves into one `u64`.
///
/// Anything other than a single `write_u64` falls back to an FNV-style byte
/// fold, which keeps the hasher correct (if slower) for foreign key types.
#[derive(Clone, Copy, Default)]
pub struct CoordHasher {
    hash: u64,
}

impl Hasher for CoordHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.hash = (self.hash ^ b as u64).wrapping_mul(MX);
        }
    }

    #[inline(always)]
    fn write_u64(&mut self, word: u64) {
        self.hash ^= word;
    }

    #[inline(always)]
    fn finish(&self) -> u64 {
        self.hash
    }
}

pub type BuildCoordHasher = BuildHasherDefault<CoordHasher>;

/// Hash map keyed by plane coordinates.
pub type CoordMap<V> = HashMap<Coordinate, V, BuildCoordHasher>;
