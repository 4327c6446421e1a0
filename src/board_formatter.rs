use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use crate::board::Board;
use crate::state::State;

const EMPTY: char = '.';
const UNIT_TILE: char = 'o';

/// Draws the board - tiles as letters in the order they were listed.
pub struct BoardFormatter<'a> {
    board: &'a Board,
    state: &'a State,
}

impl<'a> BoardFormatter<'a> {
    pub(crate) fn new(board: &'a Board, state: &'a State) -> Self {
        Self { board, state }
    }
}

fn tile_char(tile: usize) -> char {
    if tile < 26 {
        (b'A' + tile as u8) as char
    } else {
        '?'
    }
}

impl Display for BoardFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut grid = self.board.grid(UNIT_TILE);
        let (empty1, _) = self.board.empties();
        for (i, &pos) in self.state.positions().iter().enumerate() {
            if i < empty1 {
                for cell in self.board.sizes()[i].cells(pos) {
                    grid[cell] = tile_char(i);
                }
            } else {
                grid[pos] = EMPTY;
            }
        }
        write!(f, "{}", grid)
    }
}

impl Debug for BoardFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
