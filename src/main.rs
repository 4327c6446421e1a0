use std::process;

use clap::{value_t, App, Arg, ArgMatches};
use log::debug;

use sliding_block_solver::config::{BoardConfig, Dedup};
use sliding_block_solver::data::Pos;
use sliding_block_solver::fs;
use sliding_block_solver::parser;
use sliding_block_solver::Solve;

fn main() {
    env_logger::init();

    let matches = App::new("sliding-block-solver")
        .author("martin-t")
        .version("0.1")
        .about("Finds the shortest way to move a tile to its goal")
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .help("board width (default 4)"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .help("board height (default 5)"),
        )
        .arg(
            Arg::with_name("goal-tile")
                .long("goal-tile")
                .takes_value(true)
                .help("index of the tile which has to reach the goal (default 1)"),
        )
        .arg(
            Arg::with_name("goal-x")
                .long("goal-x")
                .takes_value(true)
                .help("goal column of the goal tile's top left corner (default 1)"),
        )
        .arg(
            Arg::with_name("goal-y")
                .long("goal-y")
                .takes_value(true)
                .help("goal row of the goal tile's top left corner (default 3)"),
        )
        .arg(
            Arg::with_name("full-history")
                .long("full-history")
                .help("remember every discovered state instead of only the previous generation"),
        )
        .arg(
            Arg::with_name("stats")
                .short("s")
                .long("stats")
                .help("print search statistics to stderr"),
        )
        .arg(
            Arg::with_name("boards")
                .short("b")
                .long("boards")
                .help("print the board after each move of the solution to stderr"),
        )
        .arg(Arg::with_name("file").help("puzzle to solve, stdin if missing"))
        .get_matches();

    let config = board_config(&matches);
    let dedup = if matches.is_present("full-history") {
        Dedup::FullHistory
    } else {
        Dedup::PrevGeneration
    };
    debug!("{:?}, {}", config, dedup);

    let path = matches.value_of("file");
    let input = fs::read_input(path).unwrap_or_else(|err| {
        eprintln!("Can't read {}: {}", path.unwrap_or("stdin"), err);
        process::exit(1);
    });

    let puzzle = parser::parse(&input, &config).unwrap_or_else(|err| {
        eprintln!("Malformed input: {}", err);
        process::exit(1);
    });

    let solver_ok = puzzle.solve(dedup, true);
    if matches.is_present("stats") {
        eprintln!("{}", solver_ok.stats);
    }

    match solver_ok.moves {
        Some(moves) => {
            println!("SUCCESS");
            print!("{}", moves);
            if matches.is_present("boards") {
                eprint!("{}", puzzle.format_solution(&moves));
            }
        }
        None => {
            eprintln!("No solution");
            process::exit(2);
        }
    }
}

fn board_config(matches: &ArgMatches<'_>) -> BoardConfig {
    let default = BoardConfig::default();
    let value_or_default = |name: &str, default: i8| {
        if matches.is_present(name) {
            value_t!(matches, name, i8).unwrap_or_else(|e| e.exit())
        } else {
            default
        }
    };

    let goal_tile = if matches.is_present("goal-tile") {
        value_t!(matches, "goal-tile", usize).unwrap_or_else(|e| e.exit())
    } else {
        default.goal_tile
    };

    BoardConfig {
        width: value_or_default("width", default.width),
        height: value_or_default("height", default.height),
        goal_tile,
        goal: Pos::new(
            value_or_default("goal-x", default.goal.x),
            value_or_default("goal-y", default.goal.y),
        ),
    }
}
