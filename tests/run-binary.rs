use assert_cmd::prelude::*;
use difference::Changeset;
use std::process::{Command, Output};

use sliding_block_solver::data::Dir;
use sliding_block_solver::moves::Move;
use sliding_block_solver::puzzle::Puzzle;
use sliding_block_solver::LoadPuzzle;

fn run(args: &[&str]) -> Output {
    Command::main_binary().unwrap().args(args).output().unwrap()
}

fn assert_stdout(output: &Output, expected: &str) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    if stdout != expected {
        panic!("unexpected stdout:\n{}", Changeset::new(expected, &stdout, "\n"));
    }
}

#[test]
fn run_one_move() {
    let output = run(&[
        "--width",
        "2",
        "--height",
        "3",
        "--goal-tile",
        "0",
        "--goal-x",
        "0",
        "--goal-y",
        "1",
        "puzzles/drop.txt",
    ]);
    assert!(output.status.success());
    assert_stdout(&output, "2\nSUCCESS\n0 0 -1\n");
}

#[test]
fn run_already_solved() {
    let output = run(&["puzzles/solved.txt"]);
    assert!(output.status.success());
    assert_stdout(&output, "SUCCESS\n");
}

#[test]
fn run_corner() {
    let counts = [
        3, 8, 18, 37, 65, 109, 183, 299, 443, 589, 718, 838, 968, 1124, 1303, 1494, 1727, 1998,
        2308, 2637, 2981, 3352, 3758, 4178, 4605, 5046, 5507, 6003, 6551, 7134, 7742, 8341, 8936,
    ];
    let mut expected: String = counts.iter().map(|cnt| format!("{}\n", cnt)).collect();
    expected.push_str("SUCCESS\n");

    let output = run(&["puzzles/corner.txt"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with(&expected), "unexpected stdout:\n{}", stdout);

    // there is more than one shortest trail, check it by replaying it
    let trail: Vec<Move> = stdout[expected.len()..]
        .lines()
        .map(|line| {
            let nums: Vec<i8> = line.split(' ').map(|num| num.parse().unwrap()).collect();
            assert_eq!(nums.len(), 3, "bad trail line: {}", line);
            Move::new(nums[0] as usize, Dir::new(nums[1], nums[2]))
        })
        .collect();
    assert_eq!(trail.len(), counts.len());

    let puzzle: Puzzle = "puzzles/corner.txt".load_puzzle(&Default::default()).unwrap();
    let mut state = puzzle.state.clone();
    for mov in trail {
        state = state.apply(&puzzle.board, mov).unwrap();
    }
    assert!(state.is_goal(&puzzle.board));
}

#[test]
fn run_full_history() {
    let args = &["--full-history", "puzzles/corner.txt"];
    let full = run(args);
    let prev_gen = run(&args[1..]);
    assert!(full.status.success());
    assert_stdout(&full, &String::from_utf8_lossy(&prev_gen.stdout));
}

#[test]
fn run_no_solution() {
    Command::main_binary()
        .unwrap()
        .args(&["--width", "2", "--height", "4", "--goal-tile", "0"])
        .args(&["--goal-x", "0", "--goal-y", "2", "puzzles/stuck.txt"])
        .assert()
        .failure()
        .code(2)
        .stderr("No solution\n");
}

#[test]
fn run_malformed() {
    // only one empty cell
    Command::main_binary()
        .unwrap()
        .arg("puzzles/one-empty.txt")
        .assert()
        .failure()
        .code(1)
        .stdout("");
}

#[test]
fn run_missing_file() {
    Command::main_binary()
        .unwrap()
        .arg("puzzles/does-not-exist.txt")
        .assert()
        .failure()
        .stdout("");
}
