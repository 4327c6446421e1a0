use std::borrow::Cow;
use std::fs::File;
use std::io;

use dot::{self, Edges, GraphWalk, Id, LabelText, Labeller, Nodes, Style};
use fnv::FnvHashMap;
use log::{info, warn};

use crate::board::Board;
use crate::board_formatter::BoardFormatter;
use crate::solver::SearchNode;
use crate::state::State;

type Nd = usize;
type Ed = (usize, usize);

const PATH: &str = "state-space.dot";

/// The search tree - every discovered state with an edge from the state it was first reached from.
#[derive(Debug)]
pub(crate) struct Graph<'b, 'a> {
    board: &'b Board,
    node_to_index: FnvHashMap<&'a State, usize>,
    nodes: Vec<&'a SearchNode<'a>>,
    edges: Vec<Ed>,
    solution: Vec<bool>,
}

impl<'b, 'a> Graph<'b, 'a> {
    pub(crate) fn new(board: &'b Board) -> Self {
        Self {
            board,
            node_to_index: FnvHashMap::default(),
            nodes: Vec::new(),
            edges: Vec::new(),
            solution: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, node: &'a SearchNode<'a>) {
        let node_index = self.nodes.len();

        self.node_to_index.insert(&node.state, node_index);
        self.nodes.push(node);
        self.solution.push(false);

        if let Some(prev) = node.prev {
            let prev_index = self.node_to_index[&prev.state];
            self.edges.push((prev_index, node_index));
        }
    }

    /// Writes the graph in the dot format, with the path to `goal` highlighted.
    pub(crate) fn draw(&mut self, goal: Option<&'a SearchNode<'a>>) {
        let mut cur = goal;
        while let Some(node) = cur {
            let index = self.node_to_index[&node.state];
            self.solution[index] = true;
            cur = node.prev;
        }

        match self.write() {
            Ok(()) => info!("Search tree with {} states written to {}", self.nodes.len(), PATH),
            Err(err) => warn!("Can't write {}: {}", PATH, err),
        }
    }

    fn write(&self) -> io::Result<()> {
        let mut file = File::create(PATH)?;
        dot::render(self, &mut file)
    }
}

impl<'g, 'b, 'a> GraphWalk<'g, Nd, Ed> for Graph<'b, 'a> {
    fn nodes(&'g self) -> Nodes<'g, Nd> {
        (0..self.nodes.len()).collect()
    }

    fn edges(&'g self) -> Edges<'g, Ed> {
        Cow::from(&self.edges)
    }

    fn source(&'g self, e: &Ed) -> Nd {
        e.0
    }

    fn target(&'g self, e: &Ed) -> Nd {
        e.1
    }
}

impl<'g, 'b, 'a> Labeller<'g, Nd, Ed> for Graph<'b, 'a> {
    fn graph_id(&'g self) -> Id<'g> {
        Id::new("G").expect("Constant graph id is valid")
    }

    fn node_id(&'g self, n: &Nd) -> Id<'g> {
        Id::new(format!("N{}", n)).expect("Generated node ids are valid")
    }

    fn node_label(&'g self, n: &Nd) -> LabelText<'g> {
        let node = self.nodes[*n];
        let board = BoardFormatter::new(self.board, &node.state).to_string();
        // left-justified lines
        LabelText::EscStr(board.replace('\n', "\\l").into())
    }

    fn node_style(&'g self, n: &Nd) -> Style {
        if self.solution[*n] {
            Style::Filled
        } else {
            Style::Solid
        }
    }

    fn node_color(&'g self, n: &Nd) -> Option<LabelText<'g>> {
        if self.solution[*n] {
            Some(LabelText::LabelStr("red".into()))
        } else {
            None
        }
    }
}
