use grid_astar::{AstarSolver, Grid, GridSolver, Position, Role, SearchOutcome, Step};

// In this example a path is found on a 7x7 grid with shape
//
// S......
// .#####.
// .#...#.
// .#.E.#.
// .#...#.
// .##.##.
// .......
//
// where
// - # marks a barrier
// - S marks the start
// - E marks the end
//
// Every role change made by the search is counted by the observer, the way a UI would
// schedule a redraw.

fn main() {
    let mut grid = Grid::build(7, 700).unwrap();
    for i in 1..6 {
        grid.set_role(Position::new(1, i), Role::Barrier);
        grid.set_role(Position::new(i, 1), Role::Barrier);
        grid.set_role(Position::new(i, 5), Role::Barrier);
    }
    for col in [2, 4] {
        grid.set_role(Position::new(5, col), Role::Barrier);
    }
    grid.set_start(Position::new(0, 0)).unwrap();
    grid.set_end(Position::new(3, 3)).unwrap();
    println!("{}", grid);

    let mut redraws = 0;
    let outcome = AstarSolver::new()
        .solve_designated(&mut grid, &mut |_: &Step<'_>| redraws += 1)
        .unwrap();
    println!("{}", grid);
    match outcome {
        SearchOutcome::Found(path) => {
            println!("Path of {} moves after {redraws} redraws:", path.len() - 1);
            for p in path {
                println!("{}", p);
            }
        }
        SearchOutcome::NotFound => println!("No path after {} redraws", redraws),
        SearchOutcome::Cancelled => println!("Cancelled"),
    }
}
