pub mod cell;
pub use cell::{CellState, CellWall};
pub mod grid;
pub use grid::{Grid, Neighbors};
