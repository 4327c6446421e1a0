use std::fmt::{self, Display, Formatter};

use crate::data::Pos;

/// Board constants which are not part of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub width: i8,
    pub height: i8,
    pub goal_tile: usize,
    pub goal: Pos,
}

impl Default for BoardConfig {
    fn default() -> Self {
        // the classic 4x5 layout - the 2x2 tile has to reach the bottom middle
        BoardConfig {
            width: 4,
            height: 5,
            goal_tile: 1,
            goal: Pos::new(1, 3),
        }
    }
}

/// Which states are excluded from the next generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dedup {
    /// Only states of the previous generation.
    /// Correct only if the move graph is bipartite (always true for valid input).
    PrevGeneration,
    /// All states discovered so far.
    FullHistory,
}

impl Default for Dedup {
    fn default() -> Self {
        Dedup::PrevGeneration
    }
}

impl Display for Dedup {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dedup::PrevGeneration => write!(f, "prev-generation"),
            Dedup::FullHistory => write!(f, "full-history"),
        }
    }
}
