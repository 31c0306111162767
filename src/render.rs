//! Text rendering of a grid

use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::grid::{Cell, Grid, Point};

const S_WALL_TOP: &str = "###";
const S_OPEN_TOP: &str = "   ";
const S_PATH: &str = " * ";
const S_WALL: char = '#';
const S_OPEN: char = ' ';

/// Render the grid as text, two lines per row.
///
/// The first line shows each cell's top boundary, three characters wide,
/// or a path marker for cells on the solution path. The second line shows
/// the left boundary, a one-character gap and the right boundary. The last
/// column always gets a right wall.
pub fn render(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.height() * 2 * (grid.width() * 3 + 1));
    for y in 0..grid.height() {
        let row = || (0..grid.width()).map(move |x| grid.cell(Point { x, y }));
        out.push_str(&row().map(top_segment).join(""));
        out.push('\n');
        out.push_str(
            &row()
                .map(|cell| side_segment(cell, cell.pos().x + 1 == grid.width()))
                .join(""),
        );
        out.push('\n');
    }
    out
}

fn top_segment(cell: &Cell) -> &'static str {
    if cell.is_on_path() {
        S_PATH
    } else if cell.top() {
        S_WALL_TOP
    } else {
        S_OPEN_TOP
    }
}

fn side_segment(cell: &Cell, last_column: bool) -> String {
    let left = if cell.left() { S_WALL } else { S_OPEN };
    let right = if last_column || cell.right() {
        S_WALL
    } else {
        S_OPEN
    };
    [left, S_OPEN, right].iter().collect()
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render(self))
    }
}
