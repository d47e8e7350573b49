use ggez::graphics::Rect;
use itertools::Itertools;
use rand::Rng;

use crate::basic::{GridDim, GridPoint, GridRect, Point};

/// Pixel geometry of the playfield: how many cells fit in the window
/// and how far the grid is shifted to sit in the middle of it
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Board {
    pub dim: GridDim,
    pub cell_side: f32,
    /// Space left over after fitting whole cells, split evenly
    /// between both sides of each axis
    pub offset: Point,
}

impl Board {
    pub fn fit(window: Point, cell_side: f32) -> Self {
        let dim = GridDim {
            cols: (window.x / cell_side) as i32,
            rows: (window.y / cell_side) as i32,
        };
        let used = Point {
            x: dim.cols as f32 * cell_side,
            y: dim.rows as f32 * cell_side,
        };
        Self { dim, cell_side, offset: window - used }
    }

    /// Top-left corner of cell (0, 0)
    pub fn origin(&self) -> Point {
        self.offset / 2.
    }

    /// Bottom-right corner of the last cell
    pub fn end(&self) -> Point {
        self.origin() + self.pixel_dim()
    }

    pub fn pixel_dim(&self) -> Point {
        Point {
            x: self.dim.cols as f32 * self.cell_side,
            y: self.dim.rows as f32 * self.cell_side,
        }
    }

    pub fn cell_origin(&self, pos: GridPoint) -> Point {
        self.origin() + Point { x: pos.x as f32, y: pos.y as f32 } * self.cell_side
    }

    pub fn rect(&self, rect: GridRect) -> Rect {
        let Point { x, y } = self.cell_origin(rect.pos);
        Rect::new(
            x,
            y,
            rect.size.x as f32 * self.cell_side,
            rect.size.y as f32 * self.cell_side,
        )
    }
}

/// Uniformly choose one of the cells not listed in `occupied`,
/// `occupied` may contain duplicates and cells outside the board
pub fn random_free_cell(
    occupied: impl IntoIterator<Item = GridPoint>,
    dim: GridDim,
    rng: &mut impl Rng,
) -> Option<GridPoint> {
    let occupied = occupied
        .into_iter()
        .filter(|&pos| dim.contains(pos))
        .map(|pos| dim.index_of(pos))
        .sorted_unstable()
        .dedup()
        .collect::<Vec<_>>();

    let free_cells = dim.area() - occupied.len();
    if free_cells == 0 {
        return None;
    }

    // pick the n-th free cell by skipping over occupied ones in order
    let mut new_idx = rng.gen_range(0..free_cells);
    for idx in occupied {
        if idx <= new_idx {
            new_idx += 1;
        }
    }

    assert!(new_idx < dim.area());
    Some(dim.point_at(new_idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fit_default_window() {
        let board = Board::fit(Point { x: 800., y: 450. }, 31.);
        assert_eq!(board.dim, GridDim { cols: 25, rows: 14 });
        assert_eq!(board.offset, Point { x: 25., y: 16. });
        assert_eq!(board.origin(), Point { x: 12.5, y: 8. });
        assert_eq!(board.end(), Point { x: 787.5, y: 442. });
    }

    #[test]
    fn test_cell_rect_is_on_lattice() {
        let board = Board::fit(Point { x: 800., y: 450. }, 31.);
        let rect = board.rect(GridRect {
            pos: GridPoint { x: 2, y: 3 },
            size: GridPoint::ONE,
        });
        assert_eq!(rect, Rect::new(12.5 + 62., 8. + 93., 31., 31.));
    }

    #[test]
    fn test_random_free_cell_skips_occupied() {
        let dim = GridDim { cols: 3, rows: 2 };
        let mut rng = StdRng::seed_from_u64(3);
        let occupied = [(0, 0), (2, 0), (1, 1), (0, 1), (2, 1)].map(GridPoint::from);
        for _ in 0..50 {
            let cell = random_free_cell(occupied, dim, &mut rng);
            assert_eq!(cell, Some(GridPoint { x: 1, y: 0 }));
        }
    }

    #[test]
    fn test_random_free_cell_full_board() {
        let dim = GridDim { cols: 2, rows: 2 };
        let mut rng = StdRng::seed_from_u64(3);
        // duplicates and out-of-board cells must not be counted
        let occupied = [(0, 0), (1, 0), (0, 1), (1, 1), (1, 1), (5, 5)].map(GridPoint::from);
        assert_eq!(random_free_cell(occupied, dim, &mut rng), None);
    }

    #[test]
    fn test_random_free_cell_covers_all_free_cells() {
        let dim = GridDim { cols: 4, rows: 4 };
        let mut rng = StdRng::seed_from_u64(11);
        let occupied = [(1, 1), (2, 2), (3, 0)].map(GridPoint::from);
        let mut seen = vec![0; dim.area()];
        for _ in 0..2000 {
            let cell = random_free_cell(occupied, dim, &mut rng).unwrap();
            assert!(!occupied.contains(&cell));
            seen[dim.index_of(cell)] += 1;
        }
        for (idx, count) in seen.into_iter().enumerate() {
            let cell = dim.point_at(idx);
            if occupied.contains(&cell) {
                assert_eq!(count, 0);
            } else {
                assert!(count > 0, "{:?} never chosen", cell);
            }
        }
    }
}
