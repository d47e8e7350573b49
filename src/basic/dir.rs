use crate::basic::GridPoint;
use Dir::*;

/// Screen directions, `U` points towards smaller y
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U,
    D,
    L,
    R,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Axis {
    Horizontal, // -
    Vertical,   // |
}

impl Dir {
    pub fn axis(self) -> Axis {
        match self {
            U | D => Axis::Vertical,
            L | R => Axis::Horizontal,
        }
    }

    /// Displacement of one step in this direction, in cells
    pub fn delta(self) -> GridPoint {
        match self {
            U => GridPoint { x: 0, y: -1 },
            D => GridPoint { x: 0, y: 1 },
            L => GridPoint { x: -1, y: 0 },
            R => GridPoint { x: 1, y: 0 },
        }
    }

    /// Velocity vector of something travelling in `dir`, zero when not moving
    pub fn velocity(dir: Option<Self>) -> GridPoint {
        dir.map_or(GridPoint::ZERO, Self::delta)
    }

    /// A turn into `self` is only possible if the current velocity has no
    /// component along `self`'s axis, this rejects both reversing and
    /// repeating the current direction
    pub fn can_turn_from(self, current: Option<Self>) -> bool {
        let velocity = Self::velocity(current);
        match self.axis() {
            Axis::Horizontal => velocity.x == 0,
            Axis::Vertical => velocity.y == 0,
        }
    }
}

#[test]
fn test_opposite_deltas_cancel() {
    for (dir, opposite) in [(U, D), (L, R)] {
        assert_eq!(dir.delta() + opposite.delta(), GridPoint::ZERO);
        assert_eq!(dir.axis(), opposite.axis());
    }
    assert_eq!(Dir::velocity(None), GridPoint::ZERO);
}

#[test]
fn test_can_turn_from() {
    for (requested, current, expected) in [
        (U, Some(L), true),
        (U, Some(R), true),
        (D, Some(R), true),
        (L, Some(U), true),
        (R, Some(D), true),
        (U, Some(U), false),
        (U, Some(D), false),
        (L, Some(R), false),
        (R, Some(R), false),
        (U, None, true),
        (L, None, true),
    ] {
        assert_eq!(
            requested.can_turn_from(current),
            expected,
            "{:?} => {:?}",
            current,
            requested
        )
    }
}
