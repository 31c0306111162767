//! Maze generation

use log::{debug, trace};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::grid::{Direction, Grid, Point};

/// Maze generator owning its random source.
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    /// Seeded generator, or one seeded from system entropy when `seed` is
    /// `None`.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Carve a perfect maze into `grid`, see [generate].
    pub fn generate(&mut self, grid: &mut Grid) {
        generate(grid, &mut self.random)
    }
}

/// Carve a perfect maze into `grid` by randomized depth-first search.
///
/// All walls are closed and visit flags cleared first, so the grid may be
/// regenerated. Starting from the entrance, a random unvisited neighbour is
/// picked, the wall between is removed and the walk continues from there;
/// when the current cell has no unvisited neighbours the walk backtracks.
/// Every cell is visited exactly once, so exactly `width * height - 1` walls
/// are removed and the passages form a spanning tree.
pub fn generate<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    grid.reset_generation();

    let total = grid.len();
    let mut stack: Vec<Point> = Vec::with_capacity(total);
    let mut current = grid.entrance();
    grid.cell_mut(current).set_visited(true);
    let mut visited = 1;

    while visited < total {
        let candidates: Vec<(Direction, Point)> = grid
            .neighbors_of(current)
            .into_iter()
            .filter(|&(_, p)| !grid.cell(p).is_visited())
            .collect();

        if let Some(&(direction, next)) = candidates.choose(rng) {
            grid.cell_mut(next).set_visited(true);
            grid.carve(current, direction);
            trace!("carve {:?} -> {:?}", current, next);
            stack.push(current);
            current = next;
            visited += 1;
        } else if let Some(previous) = stack.pop() {
            trace!("backtrack {:?} -> {:?}", current, previous);
            current = previous;
        } else {
            break;
        }
    }

    debug!(
        "generated {}x{} maze, {} passages carved",
        grid.width(),
        grid.height(),
        visited - 1
    );
}
