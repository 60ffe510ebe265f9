//! Sparse Game of Life engine: world state, evolution and viewport rendering.

mod bounds;
mod changes;
mod coord;
mod evolve;
mod neighbors;
mod render;
mod world;

pub use bounds::BoundingBox;
pub use changes::{Change, ChangeKind, ChangeSet};
pub use coord::{BuildCoordHasher, CoordHasher, CoordMap, Coordinate};
pub use evolve::{StepStats, compute_changes, decide};
pub use neighbors::{NeighborCache, count_live_neighbors};
pub use render::{ALIVE_GLYPH, DEAD_GLYPH};
pub use world::World;
