//! Bounds-safe helpers for rectangular puzzle inputs.
//!
//! A [`Grid`] is built once from parsed rows and only queried afterwards. Every query goes through
//! [`Grid::value`], so out-of-range coordinates simply yield `None` instead of panicking.

mod coordinate;
mod line;

pub use coordinate::{Coordinate, Direction};
pub use line::Line;

/// An in-bounds cell next to some origin, as returned by [`Grid::neighbors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor<T> {
    pub value: T,
    pub coordinate: Coordinate,
    /// Where the neighbor lies as seen from the origin.
    pub direction: Direction,
}

/// Axis for [`Grid::linear_search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Both headings along the axis, the one towards the origin first.
    pub const fn directions(self) -> [Direction; 2] {
        match self {
            Axis::Horizontal => [Direction::W, Direction::E],
            Axis::Vertical => [Direction::N, Direction::S],
        }
    }
}

/// Immutable rectangular matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Grid<T> {
    /// # Panics
    ///
    /// Panics if `rows` is empty, the first row is empty or the rows differ in length.
    pub fn new(rows: Vec<Vec<T>>) -> Self {
        assert!(
            rows.first().is_some_and(|row| !row.is_empty()),
            "cannot build a grid from empty data"
        );
        let width = rows[0].len();
        let height = rows.len();

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.into_iter().enumerate() {
            assert_eq!(
                row.len(),
                width,
                "row {y} has {} cells, expected {width}",
                row.len()
            );
            cells.extend(row);
        }

        Self {
            cells,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Every coordinate of the grid in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.height as isize)
            .flat_map(move |y| (0..self.width as isize).map(move |x| Coordinate::new(x, y)))
    }

    pub fn is_valid(&self, coordinate: Coordinate) -> bool {
        (0..self.width as isize).contains(&coordinate.x)
            && (0..self.height as isize).contains(&coordinate.y)
    }

    pub fn value(&self, coordinate: Coordinate) -> Option<&T> {
        self.is_valid(coordinate)
            .then(|| &self.cells[coordinate.y as usize * self.width + coordinate.x as usize])
    }

    /// Coordinates of all cells for which `matching` holds, in row-major order.
    pub fn find_all_matching(&self, mut matching: impl FnMut(&T) -> bool) -> Vec<Coordinate> {
        self.coordinates()
            .zip(&self.cells)
            .filter(|&(_, value)| matching(value))
            .map(|(coordinate, _)| coordinate)
            .collect()
    }

    pub fn find_all(&self, target: &T) -> Vec<Coordinate>
    where
        T: PartialEq,
    {
        self.find_all_matching(|value| value == target)
    }

    /// In-bounds cells around `coordinate`, in [`Direction::ALL`] order. Without
    /// `allow_diagonals` only [`Direction::CARDINALS`] are considered.
    pub fn neighbors(&self, coordinate: Coordinate, allow_diagonals: bool) -> Vec<Neighbor<&T>> {
        let directions: &[Direction] = if allow_diagonals {
            &Direction::ALL
        } else {
            &Direction::CARDINALS
        };
        directions
            .iter()
            .filter_map(|&direction| {
                let neighbor = coordinate + direction.offset();
                self.value(neighbor).map(|value| Neighbor {
                    value,
                    coordinate: neighbor,
                    direction,
                })
            })
            .collect()
    }

    /// Values along `line` from start to end. Points outside the grid are skipped.
    pub fn values_on(&self, line: &Line) -> Vec<&T> {
        line.coordinates()
            .into_iter()
            .filter_map(|coordinate| self.value(coordinate))
            .collect()
    }

    /// Walks from `start` towards `direction` while cells match and returns the last matching
    /// coordinate, which is `start` itself if its neighbor already fails.
    ///
    /// Returns `None` if `start` is outside the grid or doesn't match.
    pub fn ray_search(
        &self,
        start: Coordinate,
        direction: Direction,
        mut matching: impl FnMut(&T) -> bool,
    ) -> Option<Coordinate> {
        if !matching(self.value(start)?) {
            return None;
        }
        let mut last = start;
        loop {
            let next = last + direction.offset();
            match self.value(next) {
                Some(value) if matching(value) => last = next,
                _ => return Some(last),
            }
        }
    }

    /// Contiguous run of matching cells through `start` along `axis`, ordered west to east or
    /// north to south.
    pub fn linear_search(
        &self,
        start: Coordinate,
        axis: Axis,
        mut matching: impl FnMut(&T) -> bool,
    ) -> Option<Line> {
        let [backward, forward] = axis.directions();
        let min = self.ray_search(start, backward, &mut matching)?;
        let max = self.ray_search(start, forward, &mut matching)?;
        Some(Line::new(min, max))
    }
}

impl Grid<u8> {
    /// Byte grid with one row per non-empty line of `input`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Grid::new`].
    pub fn from_ascii(input: &str) -> Self {
        Self::new(
            input
                .lines()
                .filter(|line| !line.is_empty())
                .map(|line| line.as_bytes().to_vec())
                .collect(),
        )
    }
}
