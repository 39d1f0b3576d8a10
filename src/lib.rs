pub mod board;
pub mod disk;
pub mod display;
pub mod game;
pub mod moves;
pub mod solver;
pub mod stats;

use std::env;

use crate::board::Board;
use crate::display::{print_board, print_move_list};
use crate::game::{ClickOutcome, GameState, InputEvent};
use crate::stats::SessionStats;

/// Demonstration of the two-click move state machine, driven by the
/// same `InputEvent`s a canvas/keyboard layer would deliver.
#[allow(dead_code)]
pub fn demo_click_session() {
    println!("Interactive-input demo (3 disks):");
    let mut game = GameState::with_board(Board::from_widths(&[30, 20, 10]));
    let mut stats = SessionStats::default();

    let script = [
        InputEvent::StickClicked(1), // empty source: rejected
        InputEvent::StickClicked(0), // select stick 1
        InputEvent::StickClicked(0), // same stick again: cancel
        InputEvent::StickClicked(0), // select stick 1
        InputEvent::Cancel,          // Escape: cancel
        InputEvent::StickClicked(0), // select stick 1
        InputEvent::StickClicked(2), // legal: narrowest disk to stick 3
        InputEvent::StickClicked(0), // select stick 1
        InputEvent::StickClicked(2), // illegal: wider onto narrower
        InputEvent::StickClicked(1), // legal retry to stick 2
    ];

    for event in script {
        let outcome = game.handle_event(event);
        stats.record(outcome);
        println!("  {:?} -> {:?}", event, outcome);
    }

    println!();
    print_board(&game.board);
    println!(
        "Applied: {}, rejected: {}, cancelled: {}",
        stats.moves_applied, stats.rejected_attempts, stats.cancellations
    );
}

/// Entry point for the `hanoi_towers` binary.
///
/// Currently this:
///   - Parses a very small command-line surface:
///       * `--trace`       → print every solver move as it is applied
///       * `--disks=<n>`   → solve an n-disk board instead of the
///                           standard 8-disk game
///       * `--demo-clicks` → show the interactive state machine instead
///   - Builds a board with all disks on the first stick.
///   - Runs the recursive solver against it.
///   - Prints the final board and a summary, including the exact
///     optimal move count.
///
/// Example:
///   cargo run -- --trace --disks=4
pub fn run() {
    println!("Towers of Hanoi V1.1");
    println!("(No cheating!)");
    println!();

    // Defaults: summary-only solve of the standard game.
    let mut detail = solver::DetailLevel::Summary;
    let mut disks: u8 = disk::NUM_DISKS;
    let mut demo_clicks: bool = false;

    // Very small hand-rolled argument parser.
    for arg in env::args().skip(1) {
        if arg == "--trace" {
            detail = solver::DetailLevel::Trace;
        } else if let Some(rest) = arg.strip_prefix("--disks=") {
            match rest.parse::<u8>() {
                Ok(v) if (1..=24).contains(&v) => disks = v,
                Ok(v) => eprintln!(
                    "Warning: --disks={} out of range (1..=24); using default {}",
                    v, disks
                ),
                Err(_) => eprintln!(
                    "Warning: could not parse disk count from '{}'; using default {}",
                    rest, disks
                ),
            }
        } else if arg == "--demo-clicks" {
            demo_clicks = true;
        } else {
            eprintln!(
                "Warning: unrecognized argument '{}'; supported: --trace, --disks=<n>, --demo-clicks",
                arg
            );
        }
    }

    // Special demo mode: walk the click state machine instead of solving.
    if demo_clicks {
        demo_click_session();
        return;
    }

    let mut game = GameState::with_board(Board::with_disks(disks));

    println!("Starting position ({} disks):", disks);
    print_board(&game.board);
    println!();

    let outcome = match detail {
        solver::DetailLevel::Summary => solver::solve_board(&mut game, 0, 1, 2),
        solver::DetailLevel::Trace => {
            // Apply the line move by move so each one can be described
            // against the board it is about to mutate.
            let line = solver::optimal_moves(disks, 0, 1, 2);
            let mut applied = 0;
            for (i, mv) in line.iter().enumerate() {
                println!("  {:3}: {}", i + 1, mv.describe(&game.board));
                match game.apply_move(*mv) {
                    ClickOutcome::MoveApplied => applied += 1,
                    other => {
                        eprintln!("Solver move {:?} refused: {:?}", mv, other);
                        break;
                    }
                }
            }
            solver::SolveOutcome {
                line,
                moves_applied: applied,
                is_win: game.is_won(),
            }
        }
    };

    println!("Final position:");
    print_board(&game.board);
    println!();
    println!("Moves applied: {}", outcome.moves_applied);
    println!("Optimal move count (2^n - 1): {}", solver::minimum_moves(disks as u32));
    println!("Win? {}", outcome.is_win);

    if let solver::DetailLevel::Summary = detail {
        // In summary mode we only show the count by default.
    } else {
        println!("Full line of play:");
        print_move_list(&outcome.line);
    }
}
