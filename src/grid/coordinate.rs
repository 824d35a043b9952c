use std::{
    fmt,
    ops::{Add, Mul, Sub},
};

/// A point on a grid, `x` being the column and `y` the row.
///
/// Coordinates are not tied to any particular [`Grid`](super::Grid) and may lie outside of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: isize,
    pub y: isize,
}

impl Coordinate {
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    pub fn scaled_by(self, scale: isize) -> Self {
        Self::new(self.x * scale, self.y * scale)
    }

    /// Projects the coordinate `distance` steps towards `direction`.
    pub fn moved(self, direction: Direction, distance: isize) -> Self {
        self + direction.offset() * distance
    }

    /// With `allow_diagonal` coordinates sharing a corner count as adjacent, otherwise they need to
    /// share an edge. A coordinate is never adjacent to itself.
    pub fn is_adjacent_to(self, other: Coordinate, allow_diagonal: bool) -> bool {
        if self == other {
            return false;
        }
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        if allow_diagonal {
            dx <= 1 && dy <= 1
        } else {
            dx + dy == 1
        }
    }

    pub fn is_horizontally_adjacent_to(self, other: Coordinate) -> bool {
        self.y == other.y && self.x.abs_diff(other.x) == 1
    }

    pub fn is_vertically_adjacent_to(self, other: Coordinate) -> bool {
        self.x == other.x && self.y.abs_diff(other.y) == 1
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Coordinate {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Coordinate {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<isize> for Coordinate {
    type Output = Self;

    fn mul(self, scale: isize) -> Self {
        self.scaled_by(scale)
    }
}

/// Compass heading on a grid. North is towards row 0, east towards increasing columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    pub const CARDINALS: [Direction; 4] = [Direction::N, Direction::E, Direction::S, Direction::W];

    /// Unit step taken when moving one cell in this direction.
    pub const fn offset(self) -> Coordinate {
        match self {
            Direction::N => Coordinate::new(0, -1),
            Direction::NE => Coordinate::new(1, -1),
            Direction::E => Coordinate::new(1, 0),
            Direction::SE => Coordinate::new(1, 1),
            Direction::S => Coordinate::new(0, 1),
            Direction::SW => Coordinate::new(-1, 1),
            Direction::W => Coordinate::new(-1, 0),
            Direction::NW => Coordinate::new(-1, -1),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::N => Direction::S,
            Direction::NE => Direction::SW,
            Direction::E => Direction::W,
            Direction::SE => Direction::NW,
            Direction::S => Direction::N,
            Direction::SW => Direction::NE,
            Direction::W => Direction::E,
            Direction::NW => Direction::SE,
        }
    }

    pub fn is_cardinal(self) -> bool {
        Self::CARDINALS.contains(&self)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::N => "n",
            Direction::NE => "ne",
            Direction::E => "e",
            Direction::SE => "se",
            Direction::S => "s",
            Direction::SW => "sw",
            Direction::W => "w",
            Direction::NW => "nw",
        };
        f.write_str(name)
    }
}
