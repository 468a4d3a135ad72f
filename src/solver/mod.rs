use crate::cell::Role;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::observer::StepObserver;
use crate::position::Position;
use crate::search::{astar, SearchOutcome};

pub mod astar;
pub mod dijkstra;

/// Checks everything a search relies on before the grid is touched: both positions on the grid
/// and distinct, and exactly one start and one end, sitting at `start` and `end`.
pub fn validate(grid: &Grid, start: Position, end: Position) -> Result<()> {
    grid.check(start)?;
    grid.check(end)?;
    if start == end {
        return Err(Error::StartIsEnd(start));
    }
    if grid.designated(Role::Start)? != start {
        return Err(Error::MissingRole(Role::Start));
    }
    if grid.designated(Role::End)? != end {
        return Err(Error::MissingRole(Role::End));
    }
    Ok(())
}

pub trait GridSolver {
    /// Estimate of the remaining cost from `p1` to `p2`. Must not overestimate for the returned
    /// paths to be shortest.
    fn heuristic(&self, p1: &Position, p2: &Position) -> u32;

    /// Whether neighbour lists are recomputed from the current barriers before each search.
    fn refresh_neighbors(&self) -> bool {
        true
    }

    /// Searches for a shortest path from `start` to `end`, marking explored cells on `grid` and
    /// reporting every mark to `observer`. Fails without touching the grid if the endpoints are
    /// not valid, see [validate].
    fn solve<O>(
        &self,
        grid: &mut Grid,
        start: Position,
        goal: Position,
        observer: &mut O,
    ) -> Result<SearchOutcome>
    where
        O: StepObserver + ?Sized,
    {
        validate(grid, start, goal)?;
        if self.refresh_neighbors() {
            grid.refresh_all_neighbors();
        }
        Ok(astar(
            grid,
            start,
            goal,
            |point| self.heuristic(&point, &goal),
            observer,
        ))
    }

    /// Like [solve](Self::solve), using the start and end designated on the grid.
    fn solve_designated<O>(&self, grid: &mut Grid, observer: &mut O) -> Result<SearchOutcome>
    where
        O: StepObserver + ?Sized,
    {
        let (start, goal) = grid.designated_endpoints()?;
        self.solve(grid, start, goal, observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoopObserver;

    /// Wildly overestimates every remaining distance.
    struct Pessimist;

    impl GridSolver for Pessimist {
        fn heuristic(&self, _: &Position, _: &Position) -> u32 {
            u32::MAX
        }
    }

    fn designated_grid() -> Grid {
        "S..\n...\n..E".parse().unwrap()
    }

    #[test]
    fn validate_accepts_designated_endpoints() {
        let grid = designated_grid();
        assert_eq!(validate(&grid, Position::new(0, 0), Position::new(2, 2)), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_endpoints() {
        let grid = designated_grid();
        assert!(matches!(
            validate(&grid, Position::new(0, 0), Position::new(3, 2)),
            Err(Error::OutOfBounds { .. })
        ));
        assert_eq!(
            validate(&grid, Position::new(1, 1), Position::new(1, 1)),
            Err(Error::StartIsEnd(Position::new(1, 1)))
        );
        assert_eq!(
            validate(&grid, Position::new(0, 1), Position::new(2, 2)),
            Err(Error::MissingRole(Role::Start))
        );
        assert_eq!(
            validate(&grid, Position::new(0, 0), Position::new(2, 1)),
            Err(Error::MissingRole(Role::End))
        );
        let no_end: Grid = "S..\n...\n...".parse().unwrap();
        assert_eq!(
            validate(&no_end, Position::new(0, 0), Position::new(2, 2)),
            Err(Error::MissingRole(Role::End))
        );
        let two_ends: Grid = "S.E\n...\n..E".parse().unwrap();
        assert_eq!(
            validate(&two_ends, Position::new(0, 0), Position::new(2, 2)),
            Err(Error::DuplicateRole {
                role: Role::End,
                count: 2,
            })
        );
    }

    /// Estimates near the top of the range saturate instead of overflowing.
    #[test]
    fn saturating_heuristic_still_reaches_end() {
        let mut grid: Grid = "S..\n.#.\n..E".parse().unwrap();
        let outcome = Pessimist
            .solve_designated(&mut grid, &mut NoopObserver)
            .unwrap();
        assert_eq!(outcome.path_len(), Some(4));
        assert_eq!(grid.role(Position::new(1, 1)), Role::Barrier);
    }
}
