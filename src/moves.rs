use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::data::Dir;
use crate::state::State;

/// One slide, described by the empty cell it moves and the direction it moves in.
///
/// When a tile slides, the empty cells jump over it - the direction is still a unit vector.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub empty: usize,
    pub dir: Dir,
}

impl Move {
    pub fn new(empty: usize, dir: Dir) -> Self {
        Move { empty, dir }
    }

    /// `new` must be a successor of `old`.
    ///
    /// If both empty cells moved (a wide tile slid) it's reported as the first one.
    pub(crate) fn between(board: &Board, old: &State, new: &State) -> Self {
        let (empty1, empty2) = board.empties();

        let mut empty = empty1;
        let mut delta = new.positions()[empty] - old.positions()[empty];
        if delta.is_zero() {
            empty = empty2;
            delta = new.positions()[empty] - old.positions()[empty];
        }
        debug_assert!(!delta.is_zero(), "States are not neighbors");

        Move::new(empty - empty1, delta.normalized())
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.empty, self.dir)
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    #[cfg(test)]
    pub(crate) fn new(moves: Vec<Move>) -> Self {
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn add(&mut self, mov: Move) {
        self.0.push(mov);
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Move> {
        self.0.iter()
    }
}

impl IntoIterator for Moves {
    type Item = Move;
    type IntoIter = ::std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = ::std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One move per line, the format of the solver's output.
impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            writeln!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use crate::data::{Pos, DOWN, LEFT, RIGHT, UP};
    use crate::parser::parse;

    #[test]
    fn formatting_moves() {
        let moves = Moves::new(vec![
            Move::new(0, UP),
            Move::new(1, LEFT),
            Move::new(0, DOWN),
            Move::new(1, RIGHT),
        ]);
        assert_eq!(moves.to_string(), "0 0 -1\n1 -1 0\n0 0 1\n1 1 0\n");
        assert_eq!(moves.move_cnt(), 4);
        assert_eq!(Moves::default().to_string(), "");
    }

    #[test]
    fn moves_between_states() {
        // 2x2 tile at the top, both empty cells below it
        let config = BoardConfig {
            goal_tile: 0,
            ..BoardConfig::default()
        };
        let puzzle = parse("1 2  1 0 2 2  1 2  2 2", &config).unwrap();
        let board = &puzzle.board;
        let start = &puzzle.state;

        // the tile slides down, both empty cells jump up by 2
        let slid = State::new(vec![Pos::new(1, 1), Pos::new(1, 0), Pos::new(2, 0)]);
        assert_eq!(Move::between(board, start, &slid), Move::new(0, UP));

        // only the second one moves
        let stepped = State::new(vec![Pos::new(1, 0), Pos::new(1, 2), Pos::new(3, 2)]);
        assert_eq!(Move::between(board, start, &stepped), Move::new(1, RIGHT));
    }
}
