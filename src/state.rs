use fnv::FnvHashSet;

use crate::board::Board;
use crate::data::{Dir, Pos, DIRECTIONS};
use crate::moves::Move;
use crate::vec2d::Vec2d;

/// Positions of all tiles larger than one cell followed by the two empty cells.
///
/// Unit tiles are not stored - any cell that is not covered by a tile
/// and is not empty holds one and they're interchangeable.
/// Equality and hashing only look at positions so different paths
/// to the same layout end up as the same search node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    positions: Vec<Pos>,
}

impl State {
    pub(crate) fn new(positions: Vec<Pos>) -> State {
        State { positions }
    }

    pub fn positions(&self) -> &[Pos] {
        &self.positions
    }

    pub fn is_goal(&self, board: &Board) -> bool {
        self.positions[board.goal_tile()] == board.goal()
    }

    /// All states reachable by exactly one move.
    pub fn successors(&self, board: &Board) -> FnvHashSet<State> {
        let mut new_states = FnvHashSet::default();

        for tile in 0..board.tile_cnt() {
            self.expand_tile(board, tile, &mut new_states);
        }

        let occupied = board.tile_grid(self);
        let (empty1, empty2) = board.empties();
        self.expand_empty(board, &occupied, empty1, empty2, &mut new_states);
        self.expand_empty(board, &occupied, empty2, empty1, &mut new_states);

        new_states
    }

    fn expand_tile(&self, board: &Board, tile: usize, new_states: &mut FnvHashSet<State>) {
        let size = board.sizes()[tile];
        let pos = self.positions[tile];
        let (empty1, empty2) = board.empties();

        for &dir in &DIRECTIONS {
            // first cell in front of the tile
            let front = Dir::new(
                if dir.dx == 1 { size.w } else { dir.dx },
                if dir.dy == 1 { size.h } else { dir.dy },
            );
            // the emptied cells end up on the opposite side of the tile
            let shift = Dir::new(-dir.dx * size.w, -dir.dy * size.h);

            if (front.dx == 0 && size.w == 1) || (front.dy == 0 && size.h == 1) {
                // one cell wide in the direction of travel - one empty cell is enough
                for empty in empty1..=empty2 {
                    if self.positions[empty] == pos + front {
                        let mut new_state = self.clone();
                        new_state.positions[tile] = pos + dir;
                        new_state.positions[empty] = self.positions[empty] + shift;
                        new_states.insert(new_state);
                    }
                }
            } else {
                // two cells wide - both empty cells have to be in front, in any order
                let front2 = Dir::new(
                    if front.dx == 0 { 1 } else { front.dx },
                    if front.dy == 0 { 1 } else { front.dy },
                );
                let (e1, e2) = (self.positions[empty1], self.positions[empty2]);
                if (e1 == pos + front && e2 == pos + front2) || (e2 == pos + front && e1 == pos + front2) {
                    let mut new_state = self.clone();
                    new_state.positions[tile] = pos + dir;
                    new_state.positions[empty1] = e1 + shift;
                    new_state.positions[empty2] = e2 + shift;
                    new_states.insert(new_state);
                }
            }
        }
    }

    /// Moving an empty cell is moving a unit tile the opposite way.
    fn expand_empty(
        &self,
        board: &Board,
        occupied: &Vec2d<bool>,
        empty: usize,
        other: usize,
        new_states: &mut FnvHashSet<State>,
    ) {
        for &dir in &DIRECTIONS {
            let dest = self.positions[empty] + dir;
            if board.contains(dest) && dest != self.positions[other] && !occupied[dest] {
                let mut new_state = self.clone();
                new_state.positions[empty] = dest;
                new_states.insert(new_state);
            }
        }
    }

    /// Applies one line of a trail, `None` if the move is not legal here.
    pub fn apply(&self, board: &Board, mov: Move) -> Option<State> {
        self.successors(board)
            .into_iter()
            .find(|new_state| Move::between(board, self, new_state) == mov)
    }
}
