//! # grid_astar
//!
//! Shortest paths on a square grid with barriers, using
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic. Moves go
//! up, down, left or right and all cost one, so the heuristic is consistent and returned paths
//! are shortest.
//!
//! A host designates a start and an end on a [Grid], places barriers and calls a
//! [GridSolver]. While searching, the solver marks cells as frontier, visited and finally path,
//! and reports every mark to a [StepObserver] so that progress can be drawn.
//!
//! ```
//! use grid_astar::{AstarSolver, Grid, GridSolver, NoopObserver, Position, Role};
//!
//! let mut grid = Grid::build(3, 300).unwrap();
//! grid.set_start(Position::new(0, 0)).unwrap();
//! grid.set_end(Position::new(2, 2)).unwrap();
//! grid.set_role(Position::new(1, 1), Role::Barrier);
//! let outcome = AstarSolver::new()
//!     .solve_designated(&mut grid, &mut NoopObserver)
//!     .unwrap();
//! assert_eq!(outcome.path_len(), Some(4));
//! ```
pub mod cell;
pub mod error;
pub mod grid;
pub mod heuristic;
pub mod observer;
pub mod position;
pub mod search;
pub mod solver;

pub use cell::{Cell, Role};
pub use error::{Error, Result};
pub use grid::Grid;
pub use heuristic::manhattan;
pub use observer::{Cancellable, NoopObserver, Step, StepObserver};
pub use position::Position;
pub use search::SearchOutcome;
pub use solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver};
