use std::fmt;

/// State of a single grid point.
///
/// A cell owns only the walls towards its right and bottom neighbors, the left wall of a cell
/// is the right wall of its left neighbor and its top wall is the bottom wall of the cell above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    right_wall: bool,
    bottom_wall: bool,
    explored: bool,
    pathed: bool,
}

impl Cell {
    pub fn new() -> Cell {
        Cell {
            right_wall: true,
            bottom_wall: true,
            explored: false,
            pathed: false,
        }
    }

    pub fn right_wall(&self) -> bool {
        self.right_wall
    }

    pub fn bottom_wall(&self) -> bool {
        self.bottom_wall
    }

    /// Whether the cell is on the current carving stack.
    pub fn is_explored(&self) -> bool {
        self.explored
    }

    /// Whether the cell was ever carved into the maze.
    pub fn is_pathed(&self) -> bool {
        self.pathed
    }

    pub fn broken_walls(&self) -> usize {
        usize::from(!self.right_wall) + usize::from(!self.bottom_wall)
    }

    pub(crate) fn break_right_wall(&mut self) {
        self.right_wall = false;
    }

    pub(crate) fn break_bottom_wall(&mut self) {
        self.bottom_wall = false;
    }

    pub(crate) fn set_explored(&mut self) {
        self.explored = true;
    }

    pub(crate) fn unset_explored(&mut self) {
        self.explored = false;
    }

    pub(crate) fn set_pathed(&mut self) {
        self.pathed = true;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bottom = if self.bottom_wall { '_' } else { ' ' };
        let right = if self.right_wall { '|' } else { ' ' };
        write!(f, "{bottom}{right}")
    }
}
