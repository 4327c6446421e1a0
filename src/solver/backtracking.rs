use crate::board::Board;
use crate::moves::{Move, Moves};
use crate::solver::SearchNode;
use crate::state::State;

pub(crate) fn reconstruct_moves<'a>(board: &Board, final_node: &'a SearchNode<'a>) -> Moves {
    let states = backtrack_states(final_node);

    let mut moves = Moves::default();
    for pair in states.windows(2) {
        moves.add(Move::between(board, pair[0], pair[1]));
    }
    moves
}

/// From the initial state to `final_node`.
fn backtrack_states<'a>(final_node: &'a SearchNode<'a>) -> Vec<&'a State> {
    let mut states = Vec::new();
    let mut cur = Some(final_node);
    while let Some(node) = cur {
        states.push(&node.state);
        cur = node.prev;
    }
    states.reverse();
    states
}
