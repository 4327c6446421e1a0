mod backtracking;
#[cfg(feature = "graph")]
mod graph;
mod stats;

use std::fmt;
use std::fmt::{Debug, Formatter};

use fnv::{FnvHashMap, FnvHashSet};
use log::{debug, info};
use typed_arena::Arena;

use crate::config::Dedup;
use crate::moves::Moves;
use crate::puzzle::Puzzle;
use crate::state::State;
use crate::Solve;

#[cfg(feature = "graph")]
use self::graph::Graph;

pub use self::stats::{GenerationStats, Stats};

pub struct SolverOk {
    pub moves: Option<Moves>,
    pub stats: Stats,
    pub dedup: Dedup,
}

impl SolverOk {
    fn new(moves: Option<Moves>, stats: Stats, dedup: Dedup) -> Self {
        Self {
            moves,
            stats,
            dedup,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None => writeln!(f, "No solution")?,
            Some(ref moves) => writeln!(f, "{}: {} moves", self.dedup, moves.move_cnt())?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Puzzle {
    fn solve(&self, dedup: Dedup, print_status: bool) -> SolverOk {
        solve(self, dedup, print_status)
    }
}

/// A state and the state it was first reached from.
///
/// Nodes live in an arena for the whole search so the chain back to the initial state stays valid.
#[derive(Debug)]
pub(crate) struct SearchNode<'a> {
    pub(crate) state: State,
    pub(crate) prev: Option<&'a SearchNode<'a>>,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn new(state: State, prev: Option<&'a SearchNode<'a>>) -> Self {
        Self { state, prev }
    }
}

/// All states at the same distance from the initial state.
type Generation<'a> = FnvHashMap<&'a State, &'a SearchNode<'a>>;

fn solve(puzzle: &Puzzle, dedup: Dedup, print_status: bool) -> SolverOk {
    debug!("Solving using {}", dedup);
    let arena = Arena::new();
    let (moves, stats) = search(&arena, puzzle, dedup, print_status);
    debug!("Search finished:\n{:?}", stats);
    SolverOk::new(moves, stats, dedup)
}

fn search<'a>(
    arena: &'a Arena<SearchNode<'a>>,
    puzzle: &Puzzle,
    dedup: Dedup,
    print_status: bool,
) -> (Option<Moves>, Stats) {
    let board = &puzzle.board;
    let mut stats = Stats::new();

    #[cfg(feature = "graph")]
    let mut graph = Graph::new(board);

    let start: &'a SearchNode<'a> = arena.alloc(SearchNode::new(puzzle.state.clone(), None));
    #[cfg(feature = "graph")]
    graph.add(start);

    let mut prev_gen: Generation<'a> = FnvHashMap::default();
    let mut cur_gen: Generation<'a> = FnvHashMap::default();
    cur_gen.insert(&start.state, start);

    // only used with Dedup::FullHistory
    let mut seen: FnvHashSet<&'a State> = FnvHashSet::default();
    seen.insert(&start.state);

    let mut discovered = 1;

    while !cur_gen.is_empty() {
        if let Some(&goal) = cur_gen.values().find(|node| node.state.is_goal(board)) {
            info!("Solved at depth {}", stats.generations().len());

            #[cfg(feature = "graph")]
            graph.draw(Some(goal));

            return (Some(backtracking::reconstruct_moves(board, goal)), stats);
        }

        let mut next_gen: Generation<'a> = FnvHashMap::default();
        let mut gen_stats = GenerationStats {
            frontier: cur_gen.len(),
            ..GenerationStats::default()
        };

        for &node in cur_gen.values() {
            for new_state in node.state.successors(board) {
                gen_stats.created += 1;

                // in a bipartite move graph neighbors are only ever
                // in the previous or the next generation
                let known = match dedup {
                    Dedup::PrevGeneration => prev_gen.contains_key(&new_state),
                    Dedup::FullHistory => seen.contains(&new_state),
                };
                if known || next_gen.contains_key(&new_state) {
                    gen_stats.duplicates += 1;
                    continue;
                }

                let new_node: &'a SearchNode<'a> =
                    arena.alloc(SearchNode::new(new_state, Some(node)));
                next_gen.insert(&new_node.state, new_node);

                #[cfg(feature = "graph")]
                graph.add(new_node);
            }
        }

        if dedup == Dedup::FullHistory {
            seen.extend(next_gen.keys().cloned());
        }

        discovered += next_gen.len();
        gen_stats.new = next_gen.len();
        gen_stats.discovered = discovered;
        stats.add_generation(gen_stats);
        debug!(
            "Depth {}: {} new states, {} discovered",
            stats.generations().len(),
            gen_stats.new,
            discovered
        );
        if print_status {
            println!("{}", discovered);
        }

        prev_gen = cur_gen;
        cur_gen = next_gen;
    }

    info!("Exhausted all {} reachable states", discovered);

    #[cfg(feature = "graph")]
    graph.draw(None);

    (None, stats)
}
