//! Text rendering of an arbitrary viewport.
//!
//! Layout: one header line, then one line per viewport row (top to bottom),
//! each holding one glyph per column (left to right). Bounds are inclusive.
//! An inverted viewport yields no rows (or empty rows for an inverted x
//! range) rather than an error.

use std::fmt::{self, Write};

use super::coord::Coordinate;
use super::world::World;

pub const ALIVE_GLYPH: char = 'x';
pub const DEAD_GLYPH: char = ' ';

impl World {
    /// Header line plus the rows of the `top_left..=bottom_right` rectangle.
    pub fn render_viewport(&self, top_left: Coordinate, bottom_right: Coordinate) -> String {
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.write_viewport(&mut out, top_left, bottom_right);
        out
    }

    /// Streaming form of [`World::render_viewport`].
    pub fn write_viewport<W: Write>(
        &self,
        out: &mut W,
        top_left: Coordinate,
        bottom_right: Coordinate,
    ) -> fmt::Result {
        self.write_header(out)?;
        for y in top_left.y..=bottom_right.y {
            for x in top_left.x..=bottom_right.x {
                let glyph = if self.is_alive(Coordinate::new(x, y)) {
                    ALIVE_GLYPH
                } else {
                    DEAD_GLYPH
                };
                out.write_char(glyph)?;
            }
            out.write_char('\n')?;
        }
        Ok(())
    }

    /// Status line: generation, population, bounding box, last change count
    /// and age.
    pub fn write_header<W: Write>(&self, out: &mut W) -> fmt::Result {
        let bounds = self.bounds();
        writeln!(
            out,
            "Generation: {}  Live Cells: {}  Limits: {} -> {}  Changes: {}  Age: {:.1?}",
            self.generation(),
            self.population(),
            bounds.top_left,
            bounds.bottom_right,
            self.last_change_count(),
            self.age(),
        )
    }
}
