use thiserror::Error;

use crate::coord::Coord;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("invalid coordinate ({x}, {y}), components must be non-negative")]
    InvalidCoordinate { x: i32, y: i32 },
    #[error("invalid maze size {width}x{height}, both dimensions must be positive")]
    InvalidDimension { width: i32, height: i32 },
    #[error("coordinate {0} is outside of the maze")]
    OutOfBounds(Coord),
    #[error("maze needs at least two boundary cells to place entrance and exit")]
    TooFewBoundaryCells,
    #[error("maze was already generated, reset it first")]
    AlreadyGenerated,
    /// Internal invariant violation, correct generation never reaches it.
    #[error("backtracking got stuck at {at} with {pathed} of {total} cells carved")]
    BacktrackExhausted {
        at: Coord,
        pathed: usize,
        total: usize,
    },
}
