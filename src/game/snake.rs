use crate::basic::{Dir, GridPoint, GridRect};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SegmentKind {
    Head,
    Body,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub pos: GridPoint,
    /// Always one cell
    pub size: GridPoint,
    /// Only meaningful for the head, `None` while standing still
    pub dir: Option<Dir>,
}

impl Segment {
    pub fn rect(&self) -> GridRect {
        GridRect { pos: self.pos, size: self.size }
    }
}

/// Fixed-capacity body, segment 0 is the head. Segments past `len`
/// are preallocated and only become visible when the snake grows.
pub struct Snake {
    segments: Box<[Segment]>,
    len: usize,
}

impl Snake {
    pub fn new(capacity: usize, start: GridPoint, dir: Option<Dir>) -> Self {
        assert!(capacity > 0, "snake needs room for a head");
        let segments = (0..capacity)
            .map(|i| Segment {
                kind: if i == 0 { SegmentKind::Head } else { SegmentKind::Body },
                pos: start,
                size: GridPoint::ONE,
                dir,
            })
            .collect();
        Self { segments, len: 1 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.segments.len()
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn dir(&self) -> Option<Dir> {
        self.segments[0].dir
    }

    pub fn set_dir(&mut self, dir: Dir) {
        self.segments[0].dir = Some(dir);
    }

    /// Live segments, head first
    pub fn segments(&self) -> &[Segment] {
        &self.segments[..self.len]
    }

    pub fn occupies(&self, pos: GridPoint) -> bool {
        self.segments().iter().any(|seg| seg.pos == pos)
    }

    /// The head shares a cell with a trailing segment
    pub fn bites_itself(&self) -> bool {
        let head = self.head().pos;
        self.segments()[1..].iter().any(|seg| seg.pos == head)
    }

    /// Record the position of every live segment into `snapshot`
    pub fn snapshot(&self, snapshot: &mut [GridPoint]) {
        for (slot, seg) in snapshot.iter_mut().zip(self.segments()) {
            *slot = seg.pos;
        }
    }

    /// Move the head one cell along its direction, every other segment
    /// takes the place its predecessor had in `snapshot`
    pub fn advance(&mut self, snapshot: &[GridPoint]) {
        let velocity = Dir::velocity(self.dir());
        self.segments[0].pos += velocity;
        for i in 1..self.len {
            self.segments[i].pos = snapshot[i - 1];
        }
    }

    /// Append a segment at `pos` after the current tail,
    /// returns false when there is no room left
    pub fn grow(&mut self, pos: GridPoint) -> bool {
        if self.is_full() {
            return false;
        }
        self.segments[self.len].pos = pos;
        self.len += 1;
        true
    }
}
