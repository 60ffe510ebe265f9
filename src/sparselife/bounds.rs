//! Axis-aligned bounding box over the live cells.
//!
//! The box is always rebuilt from scratch with one linear pass over the live
//! set. That pass is O(live cells), the same order as a generation step, so
//! it never changes the asymptotic cost of evolution.

use super::coord::Coordinate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub top_left: Coordinate,
    pub bottom_right: Coordinate,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl BoundingBox {
    /// Degenerate origin box reported for an empty world.
    pub const EMPTY: Self = Self {
        top_left: Coordinate::ORIGIN,
        bottom_right: Coordinate::ORIGIN,
    };

    #[inline]
    pub const fn new(top_left: Coordinate, bottom_right: Coordinate) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Tight box around `coords`, or [`BoundingBox::EMPTY`] when there are
    /// none.
    pub fn enclosing<I>(coords: I) -> Self
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut iter = coords.into_iter();
        let Some(first) = iter.next() else {
            return Self::EMPTY;
        };

        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for c in iter {
            min_x = min_x.min(c.x);
            min_y = min_y.min(c.y);
            max_x = max_x.max(c.x);
            max_y = max_y.max(c.y);
        }

        Self {
            top_left: Coordinate::new(min_x, min_y),
            bottom_right: Coordinate::new(max_x, max_y),
        }
    }

    #[inline]
    pub fn contains(&self, c: Coordinate) -> bool {
        (self.top_left.x..=self.bottom_right.x).contains(&c.x)
            && (self.top_left.y..=self.bottom_right.y).contains(&c.y)
    }

    /// Number of columns, 0 for an inverted box. Saturates at `u64::MAX`.
    #[inline]
    pub fn width(&self) -> u64 {
        span(self.top_left.x, self.bottom_right.x)
    }

    /// Number of rows, 0 for an inverted box. Saturates at `u64::MAX`.
    #[inline]
    pub fn height(&self) -> u64 {
        span(self.top_left.y, self.bottom_right.y)
    }
}

#[inline]
fn span(lo: i64, hi: i64) -> u64 {
    if hi < lo {
        0
    } else {
        hi.abs_diff(lo).saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::{BoundingBox, Coordinate};

    fn coords(cells: &[(i64, i64)]) -> Vec<Coordinate> {
        cells.iter().copied().map(Coordinate::from).collect()
    }

    #[test]
    fn empty_input_is_origin_box() {
        assert_eq!(BoundingBox::enclosing(Vec::new()), BoundingBox::EMPTY);
        assert_eq!(BoundingBox::EMPTY.top_left, Coordinate::ORIGIN);
        assert_eq!(BoundingBox::EMPTY.bottom_right, Coordinate::ORIGIN);
    }

    #[test]
    fn single_cell_box_is_that_cell() {
        let b = BoundingBox::enclosing(coords(&[(5, 5)]));
        assert_eq!(b.top_left, Coordinate::new(5, 5));
        assert_eq!(b.bottom_right, Coordinate::new(5, 5));
        assert_eq!((b.width(), b.height()), (1, 1));
    }

    #[test]
    fn mixed_quadrants() {
        let b = BoundingBox::enclosing(coords(&[(-2, -2), (3, 4), (-1, 2), (1, -3)]));
        assert_eq!(b.top_left, Coordinate::new(-2, -3));
        assert_eq!(b.bottom_right, Coordinate::new(3, 4));
        assert_eq!((b.width(), b.height()), (6, 8));
        assert!(b.contains(Coordinate::new(0, 0)));
        assert!(!b.contains(Coordinate::new(4, 0)));
    }

    #[test]
    fn inverted_box_has_no_area() {
        let b = BoundingBox::new(Coordinate::new(3, 3), Coordinate::new(1, 1));
        assert_eq!(b.width(), 0);
        assert_eq!(b.height(), 0);
        assert!(!b.contains(Coordinate::new(2, 2)));
    }

    #[test]
    fn full_plane_width_saturates() {
        let b = BoundingBox::new(Coordinate::new(i64::MIN, 0), Coordinate::new(i64::MAX, 0));
        assert_eq!(b.width(), u64::MAX);
        assert_eq!(b.height(), 1);
    }
}
