// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]

pub mod board;
pub mod board_formatter;
pub mod config;
pub mod data;
pub mod fs;
pub mod moves;
pub mod parser;
pub mod puzzle;
pub mod solution_formatter;
pub mod solver;
pub mod state;

mod vec2d;

use std::error::Error;

use crate::config::{BoardConfig, Dedup};
use crate::puzzle::Puzzle;
use crate::solver::SolverOk;

pub trait LoadPuzzle {
    fn load_puzzle(&self, config: &BoardConfig) -> Result<Puzzle, Box<dyn Error>>;
}

pub trait Solve {
    /// Prints the number of discovered states after each generation if `print_status` is set.
    fn solve(&self, dedup: Dedup, print_status: bool) -> SolverOk;
}
