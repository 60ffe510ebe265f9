//! Conway's Game of Life (B3/S23) on an unbounded sparse plane.
//!
//! [`sparselife`] is the engine; [`pattern`] and [`viewer`] are the loader
//! and terminal front end built on top of it.

pub mod pattern;
pub mod sparselife;
pub mod viewer;

pub use pattern::{PatternError, SampleLibrary, load_world, parse_world};
pub use sparselife::{BoundingBox, ChangeSet, Coordinate, StepStats, World};
pub use viewer::{ViewEvent, ViewState, ViewerConfig};
