use std::error::Error;
use std::fs::File;
use std::io::{self, prelude::*};
use std::path::Path;

use crate::config::BoardConfig;
use crate::parser;
use crate::puzzle::Puzzle;
use crate::LoadPuzzle;

impl<P: AsRef<Path>> LoadPuzzle for P {
    fn load_puzzle(&self, config: &BoardConfig) -> Result<Puzzle, Box<dyn Error>> {
        let input = read_file(self)?;
        Ok(parser::parse(&input, config)?)
    }
}

/// Reads the file or all of stdin if there's no path.
pub fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => read_file(path),
        None => {
            let mut contents = String::new();
            io::stdin().read_to_string(&mut contents)?;
            Ok(contents)
        }
    }
}

fn read_file<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}
