use core::fmt;
use smallvec::SmallVec;

use crate::position::Position;

/// Neighbour lists hold at most the four axis-aligned cells.
pub const N_NEIGHBORS: usize = 4;

pub type Neighbors = SmallVec<[Position; N_NEIGHBORS]>;

/// What a cell currently is. Roles are mutually exclusive; the search only ever writes
/// [Frontier](Role::Frontier), [Visited](Role::Visited) and [Path](Role::Path), and never
/// overwrites [Start](Role::Start) or [End](Role::End).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    Empty,
    Start,
    End,
    Barrier,
    Frontier,
    Visited,
    Path,
}

impl Role {
    /// Character used by the text form of a [Grid](crate::grid::Grid).
    pub fn symbol(self) -> char {
        match self {
            Role::Empty => '.',
            Role::Start => 'S',
            Role::End => 'E',
            Role::Barrier => '#',
            Role::Frontier => 'o',
            Role::Visited => 'x',
            Role::Path => '*',
        }
    }

    pub fn from_symbol(c: char) -> Option<Role> {
        Some(match c {
            '.' => Role::Empty,
            'S' => Role::Start,
            'E' => Role::End,
            '#' => Role::Barrier,
            'o' => Role::Frontier,
            'x' => Role::Visited,
            '*' => Role::Path,
            _ => return None,
        })
    }

    /// Roles left behind by a search, as opposed to ones placed by the host.
    pub fn is_search_mark(self) -> bool {
        matches!(self, Role::Frontier | Role::Visited | Role::Path)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Role::Empty => "empty",
            Role::Start => "start",
            Role::End => "end",
            Role::Barrier => "barrier",
            Role::Frontier => "frontier",
            Role::Visited => "visited",
            Role::Path => "path",
        };
        f.write_str(name)
    }
}

/// A single grid position. Besides its role, a cell carries the pixel geometry a renderer
/// would draw it with, and the positions of its passable neighbours as of the last refresh.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    x: u32,
    y: u32,
    width: u32,
    role: Role,
    pub(crate) neighbors: Neighbors,
}

/// Offset of the `index`-th cell along an axis, clamped to [u32::MAX].
fn pixel_offset(index: usize, width: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(width)
}

impl Cell {
    pub fn new(position: Position, width: u32) -> Cell {
        Cell {
            position,
            x: pixel_offset(position.row, width),
            y: pixel_offset(position.col, width),
            width,
            role: Role::Empty,
            neighbors: Neighbors::new(),
        }
    }
    pub fn position(&self) -> Position {
        self.position
    }
    pub fn row(&self) -> usize {
        self.position.row
    }
    pub fn col(&self) -> usize {
        self.position.col
    }
    /// Pixel offset along the row axis.
    pub fn x(&self) -> u32 {
        self.x
    }
    /// Pixel offset along the column axis.
    pub fn y(&self) -> u32 {
        self.y
    }
    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn role(&self) -> Role {
        self.role
    }
    /// Overwrites the role. Keeping a single start and end is up to the caller, see
    /// [Grid::set_start](crate::grid::Grid::set_start).
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }
    pub fn is_barrier(&self) -> bool {
        self.role == Role::Barrier
    }
    pub fn is_start(&self) -> bool {
        self.role == Role::Start
    }
    pub fn is_end(&self) -> bool {
        self.role == Role::End
    }
    /// Passable neighbours as of the last refresh. These go stale when barriers change.
    pub fn neighbors(&self) -> &[Position] {
        &self.neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_follows_position() {
        let cell = Cell::new(Position::new(2, 3), 10);
        assert_eq!((cell.x(), cell.y(), cell.width()), (20, 30, 10));
        assert_eq!(cell.role(), Role::Empty);
        assert!(cell.neighbors().is_empty());
    }

    #[test]
    fn geometry_clamps_far_cells() {
        let cell = Cell::new(Position::new(usize::MAX, 1 << 20), 1 << 16);
        assert_eq!(cell.x(), u32::MAX);
        assert_eq!(cell.y(), u32::MAX);
    }

    #[test]
    fn symbols_are_distinct() {
        let roles = [
            Role::Empty,
            Role::Start,
            Role::End,
            Role::Barrier,
            Role::Frontier,
            Role::Visited,
            Role::Path,
        ];
        for role in roles {
            assert_eq!(Role::from_symbol(role.symbol()), Some(role));
        }
        assert_eq!(Role::from_symbol('?'), None);
    }
}
