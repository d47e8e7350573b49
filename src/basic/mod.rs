pub use board::{random_free_cell, Board};
pub use dir::Dir;
pub use grid_point::{GridDim, GridPoint, GridRect};
pub use point::Point;

mod board;
mod dir;
mod grid_point;
mod point;
