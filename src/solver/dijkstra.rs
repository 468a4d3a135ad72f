use crate::{position::Position, solver::GridSolver};

/// Uniform-cost search: A* without a heuristic. Explores more cells than
/// [AstarSolver](super::astar::AstarSolver) and serves as a reference for path lengths.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &Position, _: &Position) -> u32 {
        0
    }
}
