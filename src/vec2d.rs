use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    width: i8,
    height: i8,
}

impl<T: Clone> Vec2d<T> {
    pub(crate) fn new(width: i8, height: i8, default: T) -> Self {
        assert!(width > 0 && height > 0);

        let len = width as usize * height as usize;
        Vec2d {
            data: vec![default; len],
            width,
            height,
        }
    }
}

impl<T> Vec2d<T> {
    fn index_of(&self, pos: Pos) -> usize {
        debug_assert!(pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height);
        pos.y as usize * self.width as usize + pos.x as usize
    }
}

impl<T: Display> Display for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.width as usize) {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Display> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        &self.data[self.index_of(index)]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let index = self.index_of(index);
        &mut self.data[index]
    }
}
