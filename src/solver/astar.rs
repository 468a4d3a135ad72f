use crate::{heuristic::manhattan, position::Position, solver::GridSolver};

/// A* with the Manhattan distance as heuristic.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Recompute neighbour lists before each search. Switching this off makes the search trust
    /// whatever lists the caller refreshed last.
    pub refresh_neighbors: bool,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            refresh_neighbors: true,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    fn heuristic(&self, p1: &Position, p2: &Position) -> u32 {
        manhattan(*p1, *p2)
    }

    fn refresh_neighbors(&self) -> bool {
        self.refresh_neighbors
    }
}
