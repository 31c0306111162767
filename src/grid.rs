//! Rectangular cell grid with per-cell wall flags

use crate::MazeError;

/// Location in the grid, `(0, 0)` being the top-left corner
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Point { x, y }
    }
}

/// One of the four sides of a cell
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbour discovery order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The side facing back from the neighbour
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Direction leading from `from` to `to`, if the two are grid-adjacent.
    pub fn between(from: Point, to: Point) -> Option<Self> {
        if from.x == to.x {
            if to.y + 1 == from.y {
                return Some(Direction::Up);
            }
            if from.y + 1 == to.y {
                return Some(Direction::Down);
            }
        } else if from.y == to.y {
            if to.x + 1 == from.x {
                return Some(Direction::Left);
            }
            if from.x + 1 == to.x {
                return Some(Direction::Right);
            }
        }
        None
    }
}

/// Single grid position
#[derive(Clone, Debug)]
pub struct Cell {
    pos: Point,
    top: bool,
    bottom: bool,
    left: bool,
    right: bool,
    visited: bool,
    on_path: bool,
    /// Predecessor on the solution path, set by the solver
    parent: Option<Point>,
}

impl Cell {
    fn new(pos: Point) -> Self {
        Cell {
            pos,
            top: true,
            bottom: true,
            left: true,
            right: true,
            visited: false,
            on_path: false,
            parent: None,
        }
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Whether the wall on the given side is present
    pub fn has_wall(&self, side: Direction) -> bool {
        match side {
            Direction::Up => self.top,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn top(&self) -> bool {
        self.top
    }

    pub fn bottom(&self) -> bool {
        self.bottom
    }

    pub fn left(&self) -> bool {
        self.left
    }

    pub fn right(&self) -> bool {
        self.right
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn is_on_path(&self) -> bool {
        self.on_path
    }

    pub fn parent(&self) -> Option<Point> {
        self.parent
    }

    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    pub(crate) fn set_on_path(&mut self, on_path: bool) {
        self.on_path = on_path;
    }

    pub(crate) fn set_parent(&mut self, parent: Option<Point>) {
        self.parent = parent;
    }

    /// Wall flags may only change through [Grid], which keeps them symmetric.
    fn set_wall(&mut self, side: Direction, present: bool) {
        match side {
            Direction::Up => self.top = present,
            Direction::Down => self.bottom = present,
            Direction::Left => self.left = present,
            Direction::Right => self.right = present,
        }
    }
}

/// Width × height array of cells, stored row by row
///
/// The entrance is the top-left cell and the exit the bottom-right one.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every wall closed.
    ///
    /// Returns [MazeError::InvalidDimension] if either side is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new(Point { x, y })))
            .collect();
        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn entrance(&self) -> Point {
        Point { x: 0, y: 0 }
    }

    pub fn exit(&self) -> Point {
        Point {
            x: self.width - 1,
            y: self.height - 1,
        }
    }

    pub fn contains(&self, pos: Point) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn cell_at(&self, x: usize, y: usize) -> Result<&Cell, MazeError> {
        let idx = self.index_of(Point { x, y })?;
        Ok(&self.cells[idx])
    }

    pub fn cell_at_mut(&mut self, x: usize, y: usize) -> Result<&mut Cell, MazeError> {
        let idx = self.index_of(Point { x, y })?;
        Ok(&mut self.cells[idx])
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Move one step from `pos`, or `None` when that leaves the grid.
    pub fn step(&self, pos: Point, direction: Direction) -> Option<Point> {
        let next = match direction {
            Direction::Up => Point {
                x: pos.x,
                y: pos.y.checked_sub(1)?,
            },
            Direction::Down => Point {
                x: pos.x,
                y: pos.y + 1,
            },
            Direction::Left => Point {
                x: pos.x.checked_sub(1)?,
                y: pos.y,
            },
            Direction::Right => Point {
                x: pos.x + 1,
                y: pos.y,
            },
        };
        self.contains(next).then_some(next)
    }

    /// Grid-adjacent cells of `pos`, in up, down, left, right order.
    ///
    /// Only the grid bounds are taken into account; walls and visit state
    /// are ignored.
    pub fn neighbors_of(&self, pos: Point) -> Vec<(Direction, Point)> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.step(pos, dir).map(|next| (dir, next)))
            .collect()
    }

    /// Whether one can walk from `pos` towards `direction`.
    ///
    /// Both sides of the shared edge are checked.
    pub fn is_open(&self, pos: Point, direction: Direction) -> bool {
        match self.step(pos, direction) {
            Some(next) if self.contains(pos) => {
                !self.cell(pos).has_wall(direction)
                    && !self.cell(next).has_wall(direction.opposite())
            }
            _ => false,
        }
    }

    /// Remove the wall pair between two grid-adjacent cells.
    pub fn remove_wall_between(&mut self, a: Point, b: Point) -> Result<(), MazeError> {
        self.index_of(a)?;
        self.index_of(b)?;
        let direction = Direction::between(a, b).ok_or(MazeError::NotAdjacent { from: a, to: b })?;
        self.carve(a, direction);
        Ok(())
    }

    /// Number of open wall pairs
    pub fn open_passages(&self) -> usize {
        // Count each pair once, from its upper or left cell
        self.cells
            .iter()
            .map(|c| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|&dir| self.is_open(c.pos, dir))
                    .count()
            })
            .sum()
    }

    /// Cells flagged as being on the solution path, row by row
    pub fn path(&self) -> Vec<Point> {
        self.cells
            .iter()
            .filter(|c| c.on_path)
            .map(|c| c.pos)
            .collect()
    }

    /// Close every wall and clear visit flags.
    pub fn reset_generation(&mut self) {
        for cell in self.cells.iter_mut() {
            for side in Direction::ALL {
                cell.set_wall(side, true);
            }
            cell.visited = false;
        }
    }

    /// Clear path flags and predecessor links.
    pub fn reset_solution(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.on_path = false;
            cell.parent = None;
        }
    }

    /// Open the edge from `from` towards `direction`, returning the cell on
    /// the other side. Nothing changes if that side is the grid border.
    pub(crate) fn carve(&mut self, from: Point, direction: Direction) -> Option<Point> {
        let to = self.step(from, direction)?;
        self.cell_mut(from).set_wall(direction, false);
        self.cell_mut(to).set_wall(direction.opposite(), false);
        Some(to)
    }

    /// Access by a point known to be inside the grid.
    pub(crate) fn cell(&self, pos: Point) -> &Cell {
        &self.cells[pos.y * self.width + pos.x]
    }

    pub(crate) fn cell_mut(&mut self, pos: Point) -> &mut Cell {
        &mut self.cells[pos.y * self.width + pos.x]
    }

    fn index_of(&self, pos: Point) -> Result<usize, MazeError> {
        if !self.contains(pos) {
            return Err(MazeError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(pos.y * self.width + pos.x)
    }
}
