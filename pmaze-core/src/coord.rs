use std::fmt;

use crate::{
    dims::Dims,
    error::MazeError,
};

/// Position of a cell in the grid. Both components are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    x: i32,
    y: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Result<Self, MazeError> {
        if x < 0 || y < 0 {
            return Err(MazeError::InvalidCoordinate { x, y });
        }

        Ok(Coord { x, y })
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn to_dims(self) -> Dims {
        Dims(self.x, self.y)
    }

    /// Neighbor in the given direction. Top and left neighbors don't exist at axis 0, and
    /// right and bottom don't exist at `i32::MAX`. Bounds of the grid are not checked here,
    /// for any cell inside a grid the right and bottom neighbors always exist.
    pub fn neighbor(&self, dir: Direction) -> Option<Coord> {
        let Dims(x, y) = self.to_dims().checked_add(dir.offset())?;
        Coord::new(x, y).ok()
    }

    pub fn top(&self) -> Option<Coord> {
        self.neighbor(Direction::Top)
    }

    pub fn right(&self) -> Option<Coord> {
        self.neighbor(Direction::Right)
    }

    pub fn bottom(&self) -> Option<Coord> {
        self.neighbor(Direction::Bottom)
    }

    pub fn left(&self) -> Option<Coord> {
        self.neighbor(Direction::Left)
    }

    /// Returns in which direction `other` lies, or `None` if it isn't orthogonally adjacent.
    pub fn direction_to(&self, other: Coord) -> Option<Direction> {
        let delta = other.to_dims() - self.to_dims();
        if delta.abs_sum() != 1 {
            return None;
        }

        Direction::in_order()
            .into_iter()
            .find(|dir| self.neighbor(*dir) == Some(other))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl TryFrom<Dims> for Coord {
    type Error = MazeError;

    fn try_from(Dims(x, y): Dims) -> Result<Self, Self::Error> {
        Coord::new(x, y)
    }
}

impl TryFrom<(i32, i32)> for Coord {
    type Error = MazeError;

    fn try_from((x, y): (i32, i32)) -> Result<Self, Self::Error> {
        Coord::new(x, y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// Fixed scan order used by neighbor queries and backtracking.
    pub fn in_order() -> [Direction; 4] {
        use Direction::*;
        [Top, Right, Bottom, Left]
    }

    pub fn offset(&self) -> Dims {
        match self {
            Self::Top => Dims(0, -1),
            Self::Right => Dims(1, 0),
            Self::Bottom => Dims(0, 1),
            Self::Left => Dims(-1, 0),
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }
}
