use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::board_formatter::BoardFormatter;
use crate::moves::Moves;
use crate::state::State;

/// The initial board and the board after every move, separated by empty lines.
pub struct SolutionFormatter<'a> {
    board: &'a Board,
    initial_state: &'a State,
    moves: &'a Moves,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(board: &'a Board, initial_state: &'a State, moves: &'a Moves) -> Self {
        Self {
            board,
            initial_state,
            moves,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", BoardFormatter::new(self.board, self.initial_state))?;
        let mut last_state = self.initial_state.clone();
        for &mov in self.moves {
            writeln!(f)?;
            match last_state.apply(self.board, mov) {
                Some(new_state) => {
                    write!(f, "{}", BoardFormatter::new(self.board, &new_state))?;
                    last_state = new_state;
                }
                None => {
                    // moves from a different puzzle
                    return writeln!(f, "Illegal move: {}", mov);
                }
            }
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
