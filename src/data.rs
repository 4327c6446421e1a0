use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub};

// i8 keeps states small - there can be millions of them
pub(crate) const MAX_SIZE: i8 = i8::max_value();

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: i8,
    pub y: i8,
}

impl Pos {
    pub fn new(x: i8, y: i8) -> Pos {
        Pos { x, y }
    }

    /// Used to check the move graph is bipartite - every legal move flips it.
    pub fn parity(self) -> i32 {
        (i32::from(self.x) + i32::from(self.y)) & 1
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dir {
    pub dx: i8,
    pub dy: i8,
}

impl Dir {
    pub const fn new(dx: i8, dy: i8) -> Dir {
        Dir { dx, dy }
    }

    pub(crate) fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Tile moves shift empty cells by up to the tile's extent,
    /// trail lines only ever contain unit directions.
    pub(crate) fn normalized(self) -> Dir {
        Dir::new(self.dx.signum(), self.dy.signum())
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.dx, self.dy)
    }
}

pub const UP: Dir = Dir::new(0, -1);
pub const LEFT: Dir = Dir::new(-1, 0);
pub const DOWN: Dir = Dir::new(0, 1);
pub const RIGHT: Dir = Dir::new(1, 0);
pub const DIRECTIONS: [Dir; 4] = [UP, LEFT, DOWN, RIGHT];

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        Pos::new(self.x + dir.dx, self.y + dir.dy)
    }
}

impl Sub<Pos> for Pos {
    type Output = Dir;

    fn sub(self, other: Pos) -> Dir {
        Dir::new(self.x - other.x, self.y - other.y)
    }
}

/// Fixed extent of a tile, top left corner is its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub w: i8,
    pub h: i8,
}

impl Size {
    pub fn new(w: i8, h: i8) -> Size {
        Size { w, h }
    }

    pub(crate) fn cells(self, origin: Pos) -> impl Iterator<Item = Pos> {
        let Size { w, h } = self;
        (0..h).flat_map(move |dy| (0..w).map(move |dx| origin + Dir::new(dx, dy)))
    }
}
