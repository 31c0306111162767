//! Generate a perfect maze and find the way from one corner to the other
//!
//! A maze is carved into a [Grid] by randomized depth-first search, so that
//! its passages form a spanning tree: there is exactly one route between any
//! two cells. The route from the top-left entrance to the bottom-right exit
//! is then found by breadth-first search, and both the maze and the solution
//! can be rendered as text.
//!
//! # Examples
//! ## Seeded pipeline
//! ```
//! use perfect_maze::{generate, render, solve, Grid};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut grid = Grid::new(10, 6).unwrap();
//! generate(&mut grid, &mut StdRng::seed_from_u64(2024));
//! println!("{}", render(&grid));
//!
//! let solution = solve(&mut grid).unwrap();
//! solution.print_report();
//! println!("{}", render(&grid));
//!
//! assert_eq!(grid.open_passages(), 10 * 6 - 1);
//! assert_eq!(solution.path.first(), Some(&grid.entrance()));
//! assert_eq!(solution.path.last(), Some(&grid.exit()));
//! ```
//!
//! ## The smallest mazes
//! ```
//! use perfect_maze::{maze_generator::MazeGenerator, solve, Grid, Point};
//!
//! let mut grid = Grid::new(2, 1).unwrap();
//! MazeGenerator::new(None).generate(&mut grid);
//! let solution = solve(&mut grid).unwrap();
//! assert_eq!(solution.path, vec![Point::new(0, 0), Point::new(1, 0)]);
//! assert_eq!(grid.to_string(), " *  * \n#    #\n");
//!
//! assert!(Grid::new(0, 5).is_err());
//! ```

pub mod grid;
pub mod maze_generator;
pub mod render;
pub mod solver;

pub use grid::{Cell, Direction, Grid, Point};
pub use maze_generator::generate;
pub use render::render;
pub use solver::{solve, MazeSolution};

/// Errors raised by grid construction, grid access and solving
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MazeError {
    /// Width or height is zero
    #[error("Maze dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// Coordinate outside the grid
    #[error("Position x={x}, y={y} is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Wall removal requested between cells that do not share an edge
    #[error("Cells {from:?} and {to:?} are not adjacent")]
    NotAdjacent { from: Point, to: Point },

    /// Exit unreachable from the entrance
    #[error("No path from entrance to exit, the maze is disconnected")]
    NoSolutionFound,
}
