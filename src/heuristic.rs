//! Distance estimates for the search. The Manhattan distance is admissible and consistent on a
//! 4-connected grid with unit edge cost, which A* needs to return optimal paths.
use crate::position::Position;

/// Manhattan distance between two positions.
pub fn manhattan(a: Position, b: Position) -> u32 {
    a.point().manhattan_distance(&b.point()) as u32
}
