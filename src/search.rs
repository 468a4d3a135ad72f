//! The A* loop over a [Grid]. Costs are kept in dense tables indexed by the row-major index of a
//! cell, and the frontier is a [BinaryHeap] keyed by `(f_score, insertion sequence)` so that ties
//! are expanded in the order they were discovered.
use log::{debug, info, warn};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::cell::{Neighbors, Role};
use crate::grid::Grid;
use crate::observer::{Step, StepObserver};
use crate::position::Position;

/// Cost of a cell that has not been reached yet.
pub const UNREACHED: u32 = u32::MAX;

/// How a search ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The cells of a shortest path, start and end included.
    Found(Vec<Position>),
    /// The frontier ran dry: the barriers separate start from end.
    NotFound,
    /// The observer asked the search to stop before it finished.
    Cancelled,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
    pub fn path(&self) -> Option<&[Position]> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }
    /// Number of moves along the found path.
    pub fn path_len(&self) -> Option<usize> {
        self.path().map(|p| p.len() - 1)
    }
}

struct SmallestCostHolder {
    estimated_cost: u32,
    sequence: u64,
    index: usize,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost == other.estimated_cost && self.sequence == other.sequence
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed since BinaryHeap is a max-heap: lowest estimate first, then earliest insertion
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Per-call bookkeeping, dropped when the search returns.
struct SearchState {
    rows: usize,
    g_score: Vec<u32>,
    f_score: Vec<u32>,
    came_from: Vec<Option<usize>>,
    in_frontier: Vec<bool>,
    frontier: BinaryHeap<SmallestCostHolder>,
    next_sequence: u64,
}

impl SearchState {
    fn new(rows: usize) -> SearchState {
        let n = rows * rows;
        SearchState {
            rows,
            g_score: vec![UNREACHED; n],
            f_score: vec![UNREACHED; n],
            came_from: vec![None; n],
            in_frontier: vec![false; n],
            frontier: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    /// Queues a cell under its current f-score and the next insertion sequence.
    fn push(&mut self, index: usize) {
        self.frontier.push(SmallestCostHolder {
            estimated_cost: self.f_score[index],
            sequence: self.next_sequence,
            index,
        });
        self.next_sequence += 1;
        self.in_frontier[index] = true;
    }

    fn pop(&mut self) -> Option<usize> {
        let SmallestCostHolder { index, .. } = self.frontier.pop()?;
        self.in_frontier[index] = false;
        Some(index)
    }

    /// Records a cheaper way to reach `index` through `parent`. Returns [true] if the cell was
    /// queued as a result; a cell that is already pending keeps the entry it was queued with.
    fn improve(&mut self, index: usize, parent: usize, g: u32, h: u32) -> bool {
        self.came_from[index] = Some(parent);
        self.g_score[index] = g;
        self.f_score[index] = g.saturating_add(h);
        if self.in_frontier[index] {
            return false;
        }
        self.push(index);
        true
    }

    fn reverse_path(&self, end: usize) -> Vec<Position> {
        let mut path: Vec<Position> = std::iter::successors(Some(end), |&ix| self.came_from[ix])
            .map(|ix| Position::from_index(ix, self.rows))
            .collect();
        path.reverse();
        path
    }
}

/// Sets a role the search is allowed to write and tells the observer. Start, end and barrier
/// cells are left alone.
fn mark<O>(grid: &mut Grid, position: Position, role: Role, observer: &mut O)
where
    O: StepObserver + ?Sized,
{
    if matches!(grid.role(position), Role::Start | Role::End | Role::Barrier) {
        return;
    }
    grid.set_role(position, role);
    observer.on_step(&Step {
        grid: &*grid,
        position,
        role,
    });
}

/// Runs A* from `start` to `end` over the neighbour lists currently stored in `grid`, with unit
/// edge costs and the given heuristic. Positions are assumed to be validated by the caller.
pub fn astar<FH, O>(
    grid: &mut Grid,
    start: Position,
    end: Position,
    mut heuristic: FH,
    observer: &mut O,
) -> SearchOutcome
where
    FH: FnMut(Position) -> u32,
    O: StepObserver + ?Sized,
{
    info!("Searching for a path from {} to {}", start, end);
    let rows = grid.rows();
    let start_ix = start.index(rows);
    let end_ix = end.index(rows);
    let mut state = SearchState::new(rows);
    state.g_score[start_ix] = 0;
    state.f_score[start_ix] = heuristic(start);
    state.push(start_ix);

    loop {
        if observer.cancelled() {
            info!("Search from {} to {} was cancelled", start, end);
            return SearchOutcome::Cancelled;
        }
        let Some(current_ix) = state.pop() else {
            break;
        };
        let current = Position::from_index(current_ix, rows);
        if current_ix == end_ix {
            let path = state.reverse_path(end_ix);
            // Walk back from the end, leaving both endpoints untouched
            for &p in path.iter().rev().skip(1).take(path.len() - 2) {
                mark(grid, p, Role::Path, observer);
            }
            info!("Found a path of {} moves", path.len() - 1);
            return SearchOutcome::Found(path);
        }

        let neighbors: Neighbors = grid.cell(current).neighbors().iter().copied().collect();
        let tentative_g = state.g_score[current_ix] + 1;
        for n in neighbors {
            let n_ix = n.index(rows);
            if tentative_g >= state.g_score[n_ix] {
                continue;
            }
            if state.improve(n_ix, current_ix, tentative_g, heuristic(n)) {
                mark(grid, n, Role::Frontier, observer);
            }
        }
        if current_ix != start_ix {
            mark(grid, current, Role::Visited, observer);
        }
        debug!("Expanded {} with g = {}", current, tentative_g - 1);
    }
    warn!("{} is not reachable from {}", end, start);
    SearchOutcome::NotFound
}
