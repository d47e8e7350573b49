use rand::Rng;

use crate::basic::{random_free_cell, GridDim, GridPoint, GridRect};
use crate::game::snake::Snake;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Food {
    pub pos: GridPoint,
    pub size: GridPoint,
    /// Inactive food is respawned on the next frame
    pub active: bool,
}

impl Food {
    pub fn inactive() -> Self {
        Self {
            pos: GridPoint::ZERO,
            size: GridPoint::ONE,
            active: false,
        }
    }

    pub fn rect(&self) -> GridRect {
        GridRect { pos: self.pos, size: self.size }
    }
}

/// Choose a cell for new food that is not covered by the snake.
///
/// Cells are rolled uniformly up to `attempts` times, after that the
/// free cells are enumerated, both are uniform over free cells. `None`
/// means the snake covers the whole board.
pub fn spawn_position(
    snake: &Snake,
    dim: GridDim,
    attempts: usize,
    rng: &mut impl Rng,
) -> Option<GridPoint> {
    if dim.area() == 0 {
        return None;
    }

    for _ in 0..attempts {
        let pos = dim.random_cell(rng);
        if !snake.occupies(pos) {
            return Some(pos);
        }
    }

    random_free_cell(snake.segments().iter().map(|seg| seg.pos), dim, rng)
}
