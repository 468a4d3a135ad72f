use core::fmt;
use core::str::FromStr;
use grid_util::{Grid as _, SimpleGrid};
use itertools::iproduct;
use log::debug;
use petgraph::unionfind::UnionFind;

use crate::cell::{Cell, Neighbors, Role};
use crate::error::{Error, Result};
use crate::position::Position;

/// [Grid] owns a square array of [Cell]s, stored in a [SimpleGrid] with rows along the `y`
/// axis. The size is fixed at construction.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    width: u32,
    cells: SimpleGrid<Cell>,
}

impl Grid {
    /// Allocates `rows * rows` empty cells. `width` is the pixel size of the whole grid and is
    /// split evenly between the rows to give each cell its geometry.
    pub fn build(rows: usize, width: u32) -> Result<Grid> {
        if rows == 0 {
            return Err(Error::InvalidSize);
        }
        let gap = width / rows as u32;
        let mut cells: SimpleGrid<Cell> =
            SimpleGrid::new(rows, rows, Cell::new(Position::default(), gap));
        for (row, col) in iproduct!(0..rows, 0..rows) {
            let pos = Position::new(row, col);
            if let Some(cell) = cells.get_point_mut(pos.point()) {
                *cell = Cell::new(pos, gap);
            }
        }
        Ok(Grid { rows, width, cells })
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.rows
    }
    /// Returns [Error::OutOfBounds] unless `pos` is on the grid.
    pub fn check(&self, pos: Position) -> Result<()> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                position: pos,
                rows: self.rows,
            })
        }
    }
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        if self.contains(pos) {
            self.cells.get_point(pos.point())
        } else {
            None
        }
    }
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        if self.contains(pos) {
            self.cells.get_point_mut(pos.point())
        } else {
            None
        }
    }
    /// Bounds-checked access. A position outside the grid is a programming error and panics.
    pub fn cell(&self, pos: Position) -> &Cell {
        match self.get(pos) {
            Some(cell) => cell,
            None => panic!("{pos} is outside the {0}x{0} grid", self.rows),
        }
    }
    pub fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        let rows = self.rows;
        match self.get_mut(pos) {
            Some(cell) => cell,
            None => panic!("{pos} is outside the {rows}x{rows} grid"),
        }
    }
    pub fn role(&self, pos: Position) -> Role {
        self.cell(pos).role()
    }
    pub fn set_role(&mut self, pos: Position, role: Role) {
        self.cell_mut(pos).set_role(role);
    }
    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.positions().map(move |pos| self.cell(pos))
    }
    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        iproduct!(0..self.rows, 0..self.rows)
            .map(|(row, col)| Position::new(row, col))
    }
    pub fn find_role(&self, role: Role) -> impl Iterator<Item = Position> + '_ {
        self.cells()
            .filter(move |c| c.role() == role)
            .map(Cell::position)
    }
    /// The single cell holding `role`, or the precondition error describing why there is none.
    pub fn designated(&self, role: Role) -> Result<Position> {
        let mut found = self.find_role(role);
        let first = found.next().ok_or(Error::MissingRole(role))?;
        let extra = found.count();
        if extra > 0 {
            return Err(Error::DuplicateRole {
                role,
                count: extra + 1,
            });
        }
        Ok(first)
    }
    pub fn designated_endpoints(&self) -> Result<(Position, Position)> {
        Ok((self.designated(Role::Start)?, self.designated(Role::End)?))
    }
    /// Marks `pos` as the start, demoting any previous start to [Role::Empty].
    pub fn set_start(&mut self, pos: Position) -> Result<()> {
        self.designate(pos, Role::Start)
    }
    /// Marks `pos` as the end, demoting any previous end to [Role::Empty].
    pub fn set_end(&mut self, pos: Position) -> Result<()> {
        self.designate(pos, Role::End)
    }
    fn designate(&mut self, pos: Position, role: Role) -> Result<()> {
        self.check(pos)?;
        let previous: Vec<Position> = self.find_role(role).collect();
        for p in previous {
            self.set_role(p, Role::Empty);
        }
        self.set_role(pos, role);
        Ok(())
    }
    /// Sets every cell back to [Role::Empty]. Neighbour lists are left as they are.
    pub fn reset_all(&mut self) {
        for pos in self.positions() {
            self.set_role(pos, Role::Empty);
        }
    }
    /// Removes the marks of a previous search but keeps start, end and barriers.
    pub fn clear_search_marks(&mut self) {
        for pos in self.positions() {
            if self.role(pos).is_search_mark() {
                self.set_role(pos, Role::Empty);
            }
        }
    }
    pub fn is_passable(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(|c| !c.is_barrier())
    }
    /// Neighbours of `pos` computed from the current barriers.
    pub fn passable_neighbors(&self, pos: Position) -> Neighbors {
        pos.neumann_neighborhood(self.rows)
            .filter(|&p| !self.cell(p).is_barrier())
            .collect()
    }
    pub fn refresh_neighbors_at(&mut self, pos: Position) {
        let neighbors = self.passable_neighbors(pos);
        self.cell_mut(pos).neighbors = neighbors;
    }
    /// Recomputes the neighbour list of every cell against the current barriers.
    pub fn refresh_all_neighbors(&mut self) {
        debug!("Refreshing neighbours of {} cells", self.rows * self.rows);
        for pos in self.positions() {
            self.refresh_neighbors_at(pos);
        }
    }

    /// Generates a [UnionFind] structure over row-major cell indices in which passable cells
    /// that touch along an axis share a component.
    pub fn generate_components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.rows * self.rows);
        for pos in self.positions().filter(|&p| self.is_passable(p)) {
            let ix = pos.index(self.rows);
            pos.neumann_neighborhood(self.rows)
                .filter(|&p| self.is_passable(p))
                .for_each(|p| {
                    components.union(ix, p.index(self.rows));
                });
        }
        components
    }
    /// Checks whether some barrier-free route connects `a` and `b`.
    pub fn reachable(&self, a: Position, b: Position) -> bool {
        if !self.is_passable(a) || !self.is_passable(b) {
            return false;
        }
        self.generate_components()
            .equiv(a.index(self.rows), b.index(self.rows))
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.width == other.width && self.cells().eq(other.cells())
    }
}

impl Eq for Grid {}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = (0..self.rows)
                .map(|col| self.role(Position::new(row, col)).symbol())
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Parses the text form produced by [Display](fmt::Display): one line per row using the
/// symbols of [Role::symbol]. Blank lines and surrounding whitespace are ignored. Cells get a
/// pixel width of one.
impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Grid> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let rows = lines.len();
        let mut grid = Grid::build(rows, rows as u32)?;
        for (row, line) in lines.iter().enumerate() {
            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() != rows {
                return Err(Error::Parse {
                    line: row + 1,
                    reason: format!("expected {rows} cells, found {}", symbols.len()),
                });
            }
            for (col, c) in symbols.into_iter().enumerate() {
                let role = Role::from_symbol(c).ok_or_else(|| Error::Parse {
                    line: row + 1,
                    reason: format!("unknown cell symbol '{c}'"),
                })?;
                grid.set_role(Position::new(row, col), role);
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_rejects_empty_grid() {
        assert_eq!(Grid::build(0, 800), Err(Error::InvalidSize));
        let grid = Grid::build(4, 800).unwrap();
        assert_eq!(grid.cells().count(), 16);
        assert_eq!(grid.cell(Position::new(1, 2)).x(), 200);
        assert_eq!(grid.cell(Position::new(1, 2)).y(), 400);
    }

    #[test]
    fn cells_are_row_major() {
        let grid = Grid::build(3, 3).unwrap();
        let positions: Vec<Position> = grid.cells().map(Cell::position).collect();
        assert_eq!(positions, grid.positions().collect::<Vec<_>>());
        assert_eq!(positions[5], Position::new(1, 2));
    }

    #[test]
    #[should_panic]
    fn cell_out_of_range_panics() {
        let grid = Grid::build(3, 3).unwrap();
        grid.cell(Position::new(0, 3));
    }

    #[test]
    fn designation_keeps_single_start() {
        let mut grid = Grid::build(3, 3).unwrap();
        grid.set_start(Position::new(0, 0)).unwrap();
        grid.set_start(Position::new(1, 0)).unwrap();
        assert_eq!(grid.role(Position::new(0, 0)), Role::Empty);
        assert_eq!(grid.designated(Role::Start), Ok(Position::new(1, 0)));
        assert_eq!(grid.designated(Role::End), Err(Error::MissingRole(Role::End)));
        assert!(matches!(
            grid.set_end(Position::new(5, 5)),
            Err(Error::OutOfBounds { .. })
        ));
        grid.set_role(Position::new(2, 2), Role::Start);
        assert_eq!(
            grid.designated(Role::Start),
            Err(Error::DuplicateRole {
                role: Role::Start,
                count: 2,
            })
        );
    }

    /// Barriers are excluded from the neighbours of the cells around them, not from their own.
    #[test]
    fn neighbors_skip_barriers() {
        let mut grid: Grid = "...\n.#.\n...".parse().unwrap();
        grid.refresh_all_neighbors();
        let mut top: Vec<Position> = grid.cell(Position::new(0, 1)).neighbors().to_vec();
        top.sort();
        assert_eq!(top, vec![Position::new(0, 0), Position::new(0, 2)]);
        assert_eq!(grid.cell(Position::new(1, 1)).neighbors().len(), 4);
        assert_eq!(grid.cell(Position::new(0, 0)).neighbors().len(), 2);
    }

    /// Neighbour lists only change on refresh.
    #[test]
    fn neighbors_go_stale_until_refreshed() {
        let mut grid = Grid::build(2, 2).unwrap();
        grid.refresh_all_neighbors();
        grid.set_role(Position::new(0, 1), Role::Barrier);
        assert_eq!(grid.cell(Position::new(0, 0)).neighbors().len(), 2);
        grid.refresh_neighbors_at(Position::new(0, 0));
        assert_eq!(
            grid.cell(Position::new(0, 0)).neighbors(),
            &[Position::new(1, 0)]
        );
    }

    #[test]
    fn reset_and_clear() {
        let mut grid: Grid = "S#o\nx*.\n..E".parse().unwrap();
        grid.clear_search_marks();
        assert_eq!(grid.to_string(), "S#.\n...\n..E\n");
        grid.reset_all();
        assert!(grid.cells().all(|c| c.role() == Role::Empty));
    }

    #[test]
    fn parse_errors_point_at_line() {
        assert_eq!(
            "..\n...".parse::<Grid>(),
            Err(Error::Parse {
                line: 2,
                reason: "expected 2 cells, found 3".to_owned(),
            })
        );
        assert!(matches!(
            "..\n.?".parse::<Grid>(),
            Err(Error::Parse { line: 2, .. })
        ));
        assert_eq!("".parse::<Grid>(), Err(Error::InvalidSize));
    }

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // |.#.|
        // |.#.|
        // |.#.|
        let mut grid: Grid = ".#.\n.#.\n.#.".parse().unwrap();
        assert!(!grid.reachable(Position::new(0, 0), Position::new(0, 2)));
        assert!(grid.reachable(Position::new(0, 0), Position::new(2, 0)));
        assert!(!grid.reachable(Position::new(0, 0), Position::new(0, 1)));
        grid.set_role(Position::new(2, 1), Role::Empty);
        assert!(grid.reachable(Position::new(0, 0), Position::new(0, 2)));
    }
}
