use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::{FromStr, SplitWhitespace};

use log::debug;

use crate::board::Board;
use crate::config::BoardConfig;
use crate::data::{Pos, Size, MAX_SIZE};
use crate::puzzle::Puzzle;
use crate::state::State;

/// The layout is malformed or inconsistent with the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    UnexpectedEnd(&'static str),
    NotANumber(String),
    TrailingInput(String),
    BoardSize(i8, i8),
    EmptyCnt(usize),
    TileCnt(usize),
    NoGoalTile(usize),
    TileSize(usize, i64, i64),
    TileOutOfBounds(usize),
    EmptyOutOfBounds(usize),
    Overlap(Pos),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::UnexpectedEnd(expected) => {
                write!(f, "Unexpected end of input, expected {}", expected)
            }
            ParserErr::NotANumber(ref token) => write!(f, "Not a number: {}", token),
            ParserErr::TrailingInput(ref token) => {
                write!(f, "Unexpected input after the last empty cell: {}", token)
            }
            ParserErr::BoardSize(w, h) => {
                write!(f, "Board size {}x{} must be between 1x1 and {}x{}", w, h, MAX_SIZE, MAX_SIZE)
            }
            ParserErr::EmptyCnt(m) => write!(f, "Exactly 2 empty cells needed, got {}", m),
            ParserErr::TileCnt(n) => write!(f, "{} tiles can't fit on the board", n),
            ParserErr::NoGoalTile(i) => write!(f, "Goal tile {} doesn't exist", i),
            ParserErr::TileSize(i, w, h) => write!(
                f,
                "Tile {} is {}x{} - only 1x2, 2x1 and 2x2 tiles are supported",
                i, w, h
            ),
            ParserErr::TileOutOfBounds(i) => write!(f, "Tile {} is not on the board", i),
            ParserErr::EmptyOutOfBounds(i) => write!(f, "Empty cell {} is not on the board", i),
            ParserErr::Overlap(pos) => write!(f, "More than one tile or empty cell at {}", pos),
        }
    }
}

impl Error for ParserErr {}

/// Parses with the default board constants.
impl FromStr for Puzzle {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s, &BoardConfig::default())
    }
}

struct Tokens<'a>(SplitWhitespace<'a>);

impl<'a> Tokens<'a> {
    fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<T, ParserErr> {
        let token = self.0.next().ok_or(ParserErr::UnexpectedEnd(expected))?;
        token
            .parse()
            .map_err(|_| ParserErr::NotANumber(token.to_string()))
    }

    fn coord(&mut self, expected: &'static str) -> Result<Option<i8>, ParserErr> {
        // anything that doesn't fit is off the board, not garbage
        let coord: i64 = self.next(expected)?;
        if coord < 0 || coord > i64::from(MAX_SIZE) {
            Ok(None)
        } else {
            Ok(Some(coord as i8))
        }
    }
}

pub fn parse(input: &str, config: &BoardConfig) -> Result<Puzzle, ParserErr> {
    if config.width < 1 || config.height < 1 {
        return Err(ParserErr::BoardSize(config.width, config.height));
    }

    let mut tokens = Tokens(input.split_whitespace());

    let tile_cnt: usize = tokens.next("number of tiles")?;
    let empty_cnt: usize = tokens.next("number of empty cells")?;
    if empty_cnt != 2 {
        return Err(ParserErr::EmptyCnt(empty_cnt));
    }
    // every listed tile covers at least 2 cells
    let cell_cnt = config.width as usize * config.height as usize;
    if tile_cnt > cell_cnt / 2 {
        return Err(ParserErr::TileCnt(tile_cnt));
    }
    if config.goal_tile >= tile_cnt {
        return Err(ParserErr::NoGoalTile(config.goal_tile));
    }

    let mut positions = Vec::with_capacity(tile_cnt + empty_cnt);
    let mut sizes = Vec::with_capacity(tile_cnt);
    for i in 0..tile_cnt {
        let x = tokens.coord("tile x")?;
        let y = tokens.coord("tile y")?;
        let w: i64 = tokens.next("tile width")?;
        let h: i64 = tokens.next("tile height")?;

        // 1x1 tiles are not listed, bigger than 2 can't be moved with 2 empty cells
        if w < 1 || w > 2 || h < 1 || h > 2 || w * h == 1 {
            return Err(ParserErr::TileSize(i, w, h));
        }
        let size = Size::new(w as i8, h as i8);

        match (x, y) {
            (Some(x), Some(y))
                if i16::from(x) + i16::from(size.w) <= i16::from(config.width)
                    && i16::from(y) + i16::from(size.h) <= i16::from(config.height) =>
            {
                positions.push(Pos::new(x, y));
                sizes.push(size);
            }
            _ => return Err(ParserErr::TileOutOfBounds(i)),
        }
    }

    for i in 0..empty_cnt {
        let x = tokens.coord("empty cell x")?;
        let y = tokens.coord("empty cell y")?;
        match (x, y) {
            (Some(x), Some(y)) if x < config.width && y < config.height => {
                positions.push(Pos::new(x, y));
            }
            _ => return Err(ParserErr::EmptyOutOfBounds(i)),
        }
    }

    if let Some(token) = tokens.0.next() {
        return Err(ParserErr::TrailingInput(token.to_string()));
    }

    let board = Board::new(config, sizes);
    let state = State::new(positions);
    check_overlaps(&board, &state)?;

    debug!(
        "Parsed {} tiles on a {}x{} board",
        board.tile_cnt(),
        board.width(),
        board.height()
    );
    Ok(Puzzle::new(board, state))
}

fn check_overlaps(board: &Board, state: &State) -> Result<(), ParserErr> {
    let mut occupied = board.grid(false);
    let (empty1, _) = board.empties();
    for (i, &pos) in state.positions().iter().enumerate() {
        let size = if i < empty1 { board.sizes()[i] } else { Size::new(1, 1) };
        for cell in size.cells(pos) {
            if occupied[cell] {
                return Err(ParserErr::Overlap(cell));
            }
            occupied[cell] = true;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_default(input: &str) -> Result<Puzzle, ParserErr> {
        input.parse()
    }

    #[test]
    fn parsing_layout() {
        let puzzle = parse_default("2 2\n3 0 1 2\n1 0 2 2\n0 0\n0 1\n").unwrap();
        assert_eq!(puzzle.board.tile_cnt(), 2);
        assert_eq!(puzzle.board.sizes(), &[Size::new(1, 2), Size::new(2, 2)]);
        assert_eq!(
            puzzle.state.positions(),
            &[Pos::new(3, 0), Pos::new(1, 0), Pos::new(0, 0), Pos::new(0, 1)]
        );
        assert_eq!(puzzle.board.goal(), Pos::new(1, 3));
    }

    #[test]
    fn wrong_empty_cnt() {
        assert_eq!(
            parse_default("2 1\n3 0 1 2\n1 0 2 2\n0 0\n").unwrap_err(),
            ParserErr::EmptyCnt(1)
        );
        assert_eq!(
            parse_default("2 3\n3 0 1 2\n1 0 2 2\n0 0\n0 1\n0 2\n").unwrap_err(),
            ParserErr::EmptyCnt(3)
        );
    }

    #[test]
    fn token_cnt_mismatch() {
        assert_eq!(
            parse_default("2 2\n3 0 1 2\n1 0 2 2\n0 0\n").unwrap_err(),
            ParserErr::UnexpectedEnd("empty cell x")
        );
        assert_eq!(
            parse_default("2 2\n3 0 1 2\n1 0 2 2\n0 0\n0 1\n5").unwrap_err(),
            ParserErr::TrailingInput("5".to_string())
        );
        assert_eq!(parse_default("").unwrap_err(), ParserErr::UnexpectedEnd("number of tiles"));
        assert_eq!(
            parse_default("2 2\n3 0 1 x\n").unwrap_err(),
            ParserErr::NotANumber("x".to_string())
        );
    }

    #[test]
    fn too_many_tiles() {
        // fails before reading any tile
        assert_eq!(
            parse_default("1000000000000 2\n3 0 1 2\n").unwrap_err(),
            ParserErr::TileCnt(1_000_000_000_000)
        );
        assert_eq!(
            parse_default("11 2\n3 0 1 2\n").unwrap_err(),
            ParserErr::TileCnt(11)
        );
        // fits, only the input is short
        assert_eq!(
            parse_default("10 2\n3 0 1 2\n").unwrap_err(),
            ParserErr::UnexpectedEnd("tile x")
        );
    }

    #[test]
    fn out_of_bounds() {
        // 2x2 tile sticking out on the right
        assert_eq!(
            parse_default("2 2\n3 0 1 2\n3 2 2 2\n0 0\n0 1\n").unwrap_err(),
            ParserErr::TileOutOfBounds(1)
        );
        assert_eq!(
            parse_default("2 2\n3 0 1 2\n1 0 2 2\n0 0\n0 5\n").unwrap_err(),
            ParserErr::EmptyOutOfBounds(1)
        );
        assert_eq!(
            parse_default("2 2\n3 0 1 2\n1 0 2 2\n-1 0\n0 1\n").unwrap_err(),
            ParserErr::EmptyOutOfBounds(0)
        );
        assert_eq!(
            parse_default("2 2\n3 0 1 2\n1 0 2 2\n0 0\n1000 1\n").unwrap_err(),
            ParserErr::EmptyOutOfBounds(1)
        );
    }

    #[test]
    fn inconsistent_layout() {
        assert_eq!(
            parse_default("2 2\n3 0 1 2\n2 0 2 2\n0 0\n0 1\n").unwrap_err(),
            ParserErr::Overlap(Pos::new(3, 0))
        );
        assert_eq!(
            parse_default("2 2\n3 0 1 2\n1 0 2 2\n0 0\n0 0\n").unwrap_err(),
            ParserErr::Overlap(Pos::new(0, 0))
        );
        assert_eq!(
            parse_default("2 2\n3 0 1 1\n1 0 2 2\n0 0\n0 1\n").unwrap_err(),
            ParserErr::TileSize(0, 1, 1)
        );
        assert_eq!(
            parse_default("2 2\n3 0 1 3\n1 0 2 2\n0 0\n0 1\n").unwrap_err(),
            ParserErr::TileSize(0, 1, 3)
        );
        assert_eq!(
            parse_default("2 2\n3 0 256 2\n1 0 2 2\n0 0\n0 1\n").unwrap_err(),
            ParserErr::TileSize(0, 256, 2)
        );
        assert_eq!(
            parse_default("1 2\n3 0 1 2\n0 0\n0 1\n").unwrap_err(),
            ParserErr::NoGoalTile(1)
        );

        let config = BoardConfig {
            width: 0,
            ..BoardConfig::default()
        };
        assert_eq!(
            parse("2 2\n3 0 1 2\n1 0 2 2\n0 0\n0 1\n", &config).unwrap_err(),
            ParserErr::BoardSize(0, 5)
        );
    }
}
