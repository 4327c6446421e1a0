use crate::config::BoardConfig;
use crate::data::{Pos, Size};
use crate::state::State;
use crate::vec2d::Vec2d;

/// Everything about a puzzle that doesn't change during the search.
///
/// Positions in a `State` are indexed the same way as here:
/// tiles `0..n` first, then the two empty cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i8,
    height: i8,
    goal_tile: usize,
    goal: Pos,
    sizes: Vec<Size>,
}

impl Board {
    pub(crate) fn new(config: &BoardConfig, sizes: Vec<Size>) -> Self {
        Board {
            width: config.width,
            height: config.height,
            goal_tile: config.goal_tile,
            goal: config.goal,
            sizes,
        }
    }

    pub fn width(&self) -> i8 {
        self.width
    }

    pub fn height(&self) -> i8 {
        self.height
    }

    pub fn goal_tile(&self) -> usize {
        self.goal_tile
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }

    pub fn sizes(&self) -> &[Size] {
        &self.sizes
    }

    pub fn tile_cnt(&self) -> usize {
        self.sizes.len()
    }

    /// Indices of the two empty cells.
    pub(crate) fn empties(&self) -> (usize, usize) {
        (self.sizes.len(), self.sizes.len() + 1)
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    pub(crate) fn grid<T: Clone>(&self, default: T) -> Vec2d<T> {
        Vec2d::new(self.width, self.height, default)
    }

    /// Cells covered by tiles - everything else is either empty or a unit tile.
    pub(crate) fn tile_grid(&self, state: &State) -> Vec2d<bool> {
        let mut occupied = self.grid(false);
        for (&size, &pos) in self.sizes.iter().zip(state.positions()) {
            for cell in size.cells(pos) {
                occupied[cell] = true;
            }
        }
        occupied
    }
}
