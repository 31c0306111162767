//! Shortest path from entrance to exit

use std::collections::VecDeque;

use itertools::Itertools;
use log::{debug, warn};

use crate::grid::{Direction, Grid, Point};
use crate::MazeError;

/// Order in which moves are tried from each cell
const MOVES: [Direction; 4] = [
    Direction::Right,
    Direction::Left,
    Direction::Down,
    Direction::Up,
];

/// Solution to the maze
#[derive(Clone, Debug, PartialEq)]
pub struct MazeSolution {
    /// Cells on the path, from entrance to exit, both included
    pub path: Vec<Point>,
}

impl MazeSolution {
    /// Number of moves needed to walk the path
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Print report
    pub fn print_report(&self) {
        println!("The shortest path is {} steps.", self.steps());
    }

    /// Path as `(x, y)` pairs joined by arrows
    pub fn describe(&self) -> String {
        self.path
            .iter()
            .map(|p| format!("({}, {})", p.x, p.y))
            .join(" -> ")
    }
}

/// Find the shortest path from the entrance to the exit by breadth-first
/// search over open passages.
///
/// Each reached cell records its predecessor; once the exit is dequeued the
/// predecessor chain is walked back to the entrance and every cell on it is
/// flagged as on-path. Previous path state is cleared first.
///
/// Returns [MazeError::NoSolutionFound] if the exit cannot be reached, which
/// for a generated maze means the grid has been corrupted.
pub fn solve(grid: &mut Grid) -> Result<MazeSolution, MazeError> {
    grid.reset_solution();

    let entrance = grid.entrance();
    let exit = grid.exit();
    let mut visited = vec![false; grid.len()];
    let mut frontier = VecDeque::from([entrance]);
    visited[index(grid, entrance)] = true;
    let mut explored = 0;

    while let Some(current) = frontier.pop_front() {
        explored += 1;
        if current == exit {
            let path = mark_path(grid, exit);
            debug!(
                "solved after exploring {} cells, path has {} cells",
                explored,
                path.len()
            );
            return Ok(MazeSolution { path });
        }

        for direction in MOVES {
            if !grid.is_open(current, direction) {
                continue;
            }
            let Some(next) = grid.step(current, direction) else {
                continue;
            };
            let idx = index(grid, next);
            if !visited[idx] {
                visited[idx] = true;
                grid.cell_mut(next).set_parent(Some(current));
                frontier.push_back(next);
            }
        }
    }

    warn!(
        "exit {:?} unreachable, explored {} of {} cells",
        exit,
        explored,
        grid.len()
    );
    Err(MazeError::NoSolutionFound)
}

/// Follow predecessor links back from `exit`, flagging each cell.
fn mark_path(grid: &mut Grid, exit: Point) -> Vec<Point> {
    let mut path = Vec::new();
    let mut current = Some(exit);
    while let Some(pos) = current {
        let cell = grid.cell_mut(pos);
        cell.set_on_path(true);
        path.push(pos);
        current = cell.parent();
    }
    path.reverse();
    path
}

fn index(grid: &Grid, pos: Point) -> usize {
    pos.y * grid.width() + pos.x
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    use crate::grid::{Direction, Grid, Point};
    use crate::maze_generator::generate;
    use crate::solver::solve;
    use crate::MazeError;

    /// Build a maze by hand from a list of passages
    fn carved(width: usize, height: usize, passages: &[((usize, usize), (usize, usize))]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &((ax, ay), (bx, by)) in passages {
            grid.remove_wall_between(Point::new(ax, ay), Point::new(bx, by))
                .unwrap();
        }
        grid
    }

    #[test]
    fn two_by_one_path() {
        let mut grid = carved(2, 1, &[((0, 0), (1, 0))]);
        let solution = solve(&mut grid).unwrap();
        assert_eq!(solution.path, vec![Point::new(0, 0), Point::new(1, 0)]);
        assert_eq!(solution.steps(), 1);
        assert_eq!(grid.path(), solution.path);
        assert_eq!(
            grid.cell_at(1, 0).unwrap().parent(),
            Some(Point::new(0, 0))
        );
    }

    #[test]
    fn single_cell_is_its_own_exit() {
        let mut grid = Grid::new(1, 1).unwrap();
        let solution = solve(&mut grid).unwrap();
        assert_eq!(solution.path, vec![Point::new(0, 0)]);
        assert_eq!(solution.steps(), 0);
        assert!(grid.cell_at(0, 0).unwrap().is_on_path());
    }

    #[test]
    fn follows_winding_corridor() {
        // 3x3 serpentine: along the top, down the right, back along the
        // middle, then down and across the bottom.
        let mut grid = carved(
            3,
            3,
            &[
                ((0, 0), (1, 0)),
                ((1, 0), (2, 0)),
                ((2, 0), (2, 1)),
                ((2, 1), (1, 1)),
                ((1, 1), (0, 1)),
                ((0, 1), (0, 2)),
                ((0, 2), (1, 2)),
                ((1, 2), (2, 2)),
            ],
        );
        let solution = solve(&mut grid).unwrap();
        assert_eq!(solution.path.len(), 9);
        assert_eq!(
            solution.describe(),
            "(0, 0) -> (1, 0) -> (2, 0) -> (2, 1) -> (1, 1) -> (0, 1) -> (0, 2) -> (1, 2) -> (2, 2)"
        );
    }

    #[test]
    fn dead_ends_are_not_on_path() {
        let mut grid = carved(
            3,
            2,
            &[
                ((0, 0), (1, 0)),
                ((1, 0), (2, 0)),
                ((1, 0), (1, 1)),
                ((1, 1), (0, 1)),
                ((2, 0), (2, 1)),
            ],
        );
        solve(&mut grid).unwrap();
        assert_eq!(
            grid.path(),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1)
            ]
        );
        assert!(!grid.cell_at(0, 1).unwrap().is_on_path());
    }

    #[test]
    fn disconnected_grid_has_no_solution() {
        let mut grid = carved(2, 2, &[((0, 0), (1, 0)), ((0, 0), (0, 1))]);
        assert!(matches!(solve(&mut grid), Err(MazeError::NoSolutionFound)));
        assert!(grid.path().is_empty());
    }

    #[test]
    fn shortest_route_wins_on_loops() {
        // Open room: every wall removed
        let mut grid = Grid::new(4, 3).unwrap();
        for cell in grid.clone().cells() {
            for dir in [Direction::Right, Direction::Down] {
                grid.carve(cell.pos(), dir);
            }
        }
        let solution = solve(&mut grid).unwrap();
        assert_eq!(solution.steps(), 5);
        // Right is tried first, so the route hugs the top row
        assert_eq!(solution.path[1], Point::new(1, 0));
    }

    #[test]
    fn solving_twice_gives_same_path() {
        let mut grid = Grid::new(8, 8).unwrap();
        generate(&mut grid, &mut StdRng::seed_from_u64(3));
        let first = solve(&mut grid).unwrap();
        let second = solve(&mut grid).unwrap();
        assert_eq!(first, second);
        assert_eq!(grid.path().len(), first.path.len());
    }

    proptest! {
        #[test]
        fn generated_mazes_are_solvable(width in 1usize..20, height in 1usize..20, seed in any::<u64>()) {
            let mut grid = Grid::new(width, height).unwrap();
            generate(&mut grid, &mut StdRng::seed_from_u64(seed));
            let solution = solve(&mut grid).unwrap();

            prop_assert_eq!(solution.path.first(), Some(&grid.entrance()));
            prop_assert_eq!(solution.path.last(), Some(&grid.exit()));
            for pair in solution.path.windows(2) {
                let dir = Direction::between(pair[0], pair[1]);
                prop_assert!(dir.is_some());
                prop_assert!(grid.is_open(pair[0], dir.unwrap()));
            }
            let mut sorted = solution.path.clone();
            sorted.sort_by_key(|p| (p.y, p.x));
            sorted.dedup();
            prop_assert_eq!(sorted.len(), solution.path.len());
            prop_assert_eq!(grid.path(), sorted);
        }
    }
}
