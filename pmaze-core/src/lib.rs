pub mod array;
pub mod cell;
pub mod coord;
pub mod dims;
pub mod error;
pub mod maze;
pub mod random;
pub mod render;

pub use cell::Cell;
pub use coord::{Coord, Direction};
pub use error::MazeError;
pub use maze::Maze;
pub use random::Random;
