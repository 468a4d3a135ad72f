use core::fmt;
use grid_util::point::Point;

/// Identity of a cell: its row and column on the grid. Rows run along the `y` axis of a
/// [Point] and columns along `x`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    /// Row-major index of this position on a grid with `rows` rows and columns.
    pub fn index(&self, rows: usize) -> usize {
        self.row * rows + self.col
    }

    /// Inverse of [index](Self::index).
    pub fn from_index(index: usize, rows: usize) -> Position {
        Position::new(index / rows, index % rows)
    }

    pub fn point(&self) -> Point {
        Point::new(self.col as i32, self.row as i32)
    }

    /// Converts back from a [Point], [None] if it lies left of or above the grid.
    pub fn from_point(point: Point) -> Option<Position> {
        Some(Position::new(
            usize::try_from(point.y).ok()?,
            usize::try_from(point.x).ok()?,
        ))
    }

    /// The up to four axis-aligned neighbours of this position that are inside a
    /// `rows` by `rows` grid.
    pub fn neumann_neighborhood(&self, rows: usize) -> impl Iterator<Item = Position> {
        self.point()
            .neumann_neighborhood_smallvec()
            .into_iter()
            .filter_map(Position::from_point)
            .filter(move |p| p.row < rows && p.col < rows)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Position {
        Position::new(row, col)
    }
}

impl From<Position> for Point {
    fn from(pos: Position) -> Point {
        pos.point()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
