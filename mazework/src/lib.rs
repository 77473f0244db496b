pub mod algorithms;
pub mod array;
pub mod board;
pub mod dims;
pub mod disjoint;
pub mod error;
pub mod maze;
pub mod progress;
pub mod solvers;
pub mod visit;

pub use error::MazeError;
pub use maze::Maze;
