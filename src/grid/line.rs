use std::fmt;

use rustc_hash::FxHashSet;

use super::{Coordinate, Direction};

/// A straight run of coordinates that is horizontal, vertical or a 45 degree diagonal.
///
/// Like [`Coordinate`], a line is not tied to a grid and may extend past its edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    start: Coordinate,
    end: Coordinate,
}

impl Line {
    /// # Panics
    ///
    /// Panics if `start` and `end` are neither on the same row, the same column nor the same
    /// 45 degree diagonal.
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        let diff = end - start;
        assert!(
            diff.x == 0 || diff.y == 0 || diff.x.abs() == diff.y.abs(),
            "only horizontal, vertical or 45 degree diagonal lines are allowed: {start} -> {end}"
        );
        Self { start, end }
    }

    /// Line of `length` cells starting at `start` and heading towards `direction`.
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero.
    pub fn from_direction(start: Coordinate, direction: Direction, length: usize) -> Self {
        assert!(length > 0, "a line covers at least one coordinate");
        let end = start.moved(direction, length as isize - 1);
        Self { start, end }
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn end(&self) -> Coordinate {
        self.end
    }

    /// Number of coordinates on the line, both endpoints included.
    pub fn len(&self) -> usize {
        let diff = self.end - self.start;
        diff.x.unsigned_abs().max(diff.y.unsigned_abs()) + 1
    }

    /// Always `false`, a line covers at least its start.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All coordinates on the line, ordered from `start` to `end`.
    pub fn coordinates(&self) -> Vec<Coordinate> {
        let diff = self.end - self.start;
        let step = Coordinate::new(diff.x.signum(), diff.y.signum());
        (0..self.len() as isize)
            .map(|i| self.start + step * i)
            .collect()
    }

    /// Whether both lines share at least one coordinate.
    ///
    /// Two diagonals on different parities never share a cell even if they visually cross.
    pub fn intersects(&self, other: &Line) -> bool {
        let ours: FxHashSet<Coordinate> = self.coordinates().into_iter().collect();
        other.coordinates().iter().any(|c| ours.contains(c))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({} -> {})", self.start, self.end)
    }
}
