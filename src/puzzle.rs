use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use crate::board::Board;
use crate::board_formatter::BoardFormatter;
use crate::moves::Moves;
use crate::solution_formatter::SolutionFormatter;
use crate::state::State;

/// A board together with the initial layout.
#[derive(Clone)]
pub struct Puzzle {
    pub board: Board,
    pub state: State,
}

impl Puzzle {
    pub fn new(board: Board, state: State) -> Self {
        Puzzle { board, state }
    }

    pub fn format(&self) -> BoardFormatter<'_> {
        BoardFormatter::new(&self.board, &self.state)
    }

    pub fn format_solution<'a>(&'a self, moves: &'a Moves) -> SolutionFormatter<'a> {
        SolutionFormatter::new(&self.board, &self.state, moves)
    }

    /// The layout after all the moves, `None` if any of them is illegal.
    pub fn replay(&self, moves: &Moves) -> Option<State> {
        let mut state = self.state.clone();
        for &mov in moves {
            state = state.apply(&self.board, mov)?;
        }
        Some(state)
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

impl Debug for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}
