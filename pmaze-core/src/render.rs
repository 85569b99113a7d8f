//! Plain text form of a maze.
//!
//! ```text
//!  _ _ _
//! |_ _  |
//! |   | |
//! |_|_ _|
//! in: 0,0
//! out: 0,2
//! ```
//!
//! The first line is the top border, then every row starts with the left border and each cell
//! adds its bottom and right wall. Entrance and exit follow once the maze is generated.

use std::fmt::{self, Write as _};

use crate::{coord::Coord, maze::Maze};

pub fn render(maze: &Maze) -> String {
    maze.to_string()
}

/// Formats a path as `x,y -> x,y -> ...` on a single line.
pub fn render_path(path: &[Coord]) -> String {
    let mut out = path
        .iter()
        .map(Coord::to_string)
        .collect::<Vec<_>>()
        .join(" -> ");
    out.push('\n');
    out
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.cells();

        for _ in 0..self.width() {
            f.write_str(" _")?;
        }
        f.write_char('\n')?;

        for (pos, cell) in cells.iter_pos().zip(cells.iter()) {
            if pos.x() == 0 {
                f.write_char('|')?;
            }
            write!(f, "{cell}")?;
            if pos.x() == self.width() - 1 {
                f.write_char('\n')?;
            }
        }

        if let (Some(entrance), Some(exit)) = (self.entrance(), self.exit()) {
            writeln!(f, "in: {entrance}")?;
            writeln!(f, "out: {exit}")?;
        }

        Ok(())
    }
}
