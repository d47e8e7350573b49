use rand::Rng;

/// A cell on the board, (0, 0) is the top-left cell
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Add, AddAssign, Sub, SubAssign)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl GridPoint {
    pub const ZERO: Self = Self { x: 0, y: 0 };
    /// Size of anything occupying exactly one cell
    pub const ONE: Self = Self { x: 1, y: 1 };
}

/// Axis-aligned box measured in cells
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GridRect {
    pub pos: GridPoint,
    pub size: GridPoint,
}

impl GridRect {
    /// Strict overlap, boxes that only share an edge don't overlap
    pub fn overlaps(self, other: Self) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }
}

/// Dimensions of the board in cells
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GridDim {
    pub cols: i32,
    pub rows: i32,
}

impl GridDim {
    pub fn contains(self, pos: GridPoint) -> bool {
        (0..self.cols).contains(&pos.x) && (0..self.rows).contains(&pos.y)
    }

    pub fn area(self) -> usize {
        (self.cols.max(0) * self.rows.max(0)) as usize
    }

    /// Row-major index of a cell inside the board
    pub fn index_of(self, pos: GridPoint) -> usize {
        debug_assert!(self.contains(pos), "{:?} outside of {:?}", pos, self);
        (pos.y * self.cols + pos.x) as usize
    }

    pub fn point_at(self, idx: usize) -> GridPoint {
        GridPoint {
            x: idx as i32 % self.cols,
            y: idx as i32 / self.cols,
        }
    }

    /// Uniformly random cell, the board must not be empty
    pub fn random_cell(self, rng: &mut impl Rng) -> GridPoint {
        GridPoint {
            x: rng.gen_range(0..self.cols),
            y: rng.gen_range(0..self.rows),
        }
    }
}

#[test]
fn test_overlaps() {
    let cell = |x, y| GridRect { pos: GridPoint { x, y }, size: GridPoint::ONE };
    assert!(cell(3, 4).overlaps(cell(3, 4)));
    assert!(!cell(3, 4).overlaps(cell(4, 4)));
    assert!(!cell(3, 4).overlaps(cell(3, 5)));
    assert!(!cell(3, 4).overlaps(cell(2, 3)));

    let big = GridRect {
        pos: GridPoint { x: 2, y: 2 },
        size: GridPoint { x: 2, y: 2 },
    };
    assert!(big.overlaps(cell(3, 3)));
    assert!(cell(3, 2).overlaps(big));
    assert!(!big.overlaps(cell(4, 2)));
}

#[test]
fn test_row_major_index() {
    let dim = GridDim { cols: 25, rows: 14 };
    assert_eq!(dim.area(), 350);
    assert_eq!(dim.index_of(GridPoint { x: 1, y: 0 }), 1);
    assert_eq!(dim.index_of(GridPoint { x: 0, y: 1 }), 25);
    assert_eq!(dim.index_of(GridPoint { x: 3, y: 2 }), 53);
    assert_eq!(dim.point_at(53), GridPoint { x: 3, y: 2 });
}

#[test]
fn test_contains() {
    let dim = GridDim { cols: 25, rows: 14 };
    [
        ((0, 0), true),
        ((24, 13), true),
        ((12, 7), true),
        ((-1, 0), false),
        ((0, -1), false),
        ((25, 0), false),
        ((0, 14), false),
    ]
    .iter()
    .for_each(|&(pos, inside)| {
        assert_eq!(dim.contains(GridPoint::from(pos)), inside, "{:?}", pos);
    });
}
