//! The recursive auto-solver for the Hanoi board.
//!
//! The solver is split in two per the module's one design rule: move
//! *generation* is pure (`optimal_moves` returns an abstract move list
//! and touches no board), and move *execution* replays that list through
//! the same validated apply path interactive input uses
//! (`GameState::apply_move`). That keeps the recursion testable without
//! any input wiring, and guarantees the solver can never smuggle an
//! illegal move past the legality check.

use num_bigint::BigUint;
use num_traits::One;

use crate::disk::StickId;
use crate::game::{ClickOutcome, GameState};
use crate::moves::Move;

/// How much per-move information a solver run should report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailLevel {
    /// Only the final summary.
    Summary,
    /// Every applied move, as it happens.
    Trace,
}

/// Outcome of replaying a solver-generated line against a board.
#[derive(Clone, Debug)]
pub struct SolveOutcome {
    /// The full move sequence the recursion emitted.
    pub line: Vec<Move>,
    /// How many of those moves the board actually accepted.
    pub moves_applied: usize,
    /// Whether the board reports a win after the replay.
    pub is_win: bool,
}

/// Emit the optimal move sequence for `n` disks from `from` to `to`
/// using `via` as the spare stick.
///
/// Classic recursion: park the top `n − 1` disks on the spare, move the
/// largest disk to the target, then bring the parked disks over.
/// Exactly `2^n − 1` moves are emitted.
///
/// Preconditions (debug-asserted, not defended at runtime): `n >= 1`
/// and the three stick ids are distinct. The emitted sequence is only
/// guaranteed legal against a board whose `n` disks all sit on `from`.
pub fn optimal_moves(n: u8, from: StickId, via: StickId, to: StickId) -> Vec<Move> {
    debug_assert!(n >= 1);
    debug_assert!(from != via && via != to && from != to);

    let mut line = Vec::with_capacity((1usize << n.min(24)) - 1);
    emit_moves(n, from, via, to, &mut line);
    line
}

/// Recursive worker for `optimal_moves`; appends onto `line`.
///
/// Written with `n == 0` as the base case so the recursion is total;
/// the single-disk case falls out as "park nothing, move the disk,
/// bring nothing over".
fn emit_moves(n: u8, from: StickId, via: StickId, to: StickId, line: &mut Vec<Move>) {
    if n == 0 {
        return;
    }
    emit_moves(n - 1, from, to, via, line);
    line.push(Move::new(from, to));
    emit_moves(n - 1, via, from, to, line);
}

/// Drive a game to completion with the recursive solver.
///
/// Generates the optimal line for every disk currently in play (all
/// assumed to start on `from`) and replays it through
/// `GameState::apply_move`. Replay stops early if the board rejects a
/// move, which only happens when the precondition (canonical starting
/// position) was violated by the caller.
pub fn solve_board(game: &mut GameState, from: StickId, via: StickId, to: StickId) -> SolveOutcome {
    let line = optimal_moves(game.board.num_disks(), from, via, to);

    let mut moves_applied = 0;
    for mv in &line {
        match game.apply_move(*mv) {
            ClickOutcome::MoveApplied => moves_applied += 1,
            _ => break,
        }
    }

    SolveOutcome {
        line,
        moves_applied,
        is_win: game.is_won(),
    }
}

/// Exact minimum number of moves for an `n`-disk game: `2^n − 1`.
///
/// Returned as a `BigUint` so callers can report the count for any `n`
/// (the standard game's 255 fits anywhere, but a 200-disk count does
/// not fit in a `u64`).
pub fn minimum_moves(n: u32) -> BigUint {
    (BigUint::one() << n) - BigUint::one()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    /// `optimal_moves` emits exactly 2^n − 1 moves.
    #[test]
    fn emits_two_to_the_n_minus_one_moves() {
        for n in 1..=10u8 {
            let line = optimal_moves(n, 0, 1, 2);
            assert_eq!(line.len(), (1usize << n) - 1, "n = {}", n);
        }
    }

    /// The canonical 7-move line for 3 disks, widths 30/20/10 on stick
    /// 0: (0→2),(0→1),(2→1),(0→2),(1→0),(1→2),(0→2), ending with all
    /// three disks on stick 2.
    #[test]
    fn canonical_three_disk_line() {
        let expected = [
            (0, 2),
            (0, 1),
            (2, 1),
            (0, 2),
            (1, 0),
            (1, 2),
            (0, 2),
        ];

        let line = optimal_moves(3, 0, 1, 2);
        let pairs: Vec<(u8, u8)> = line.iter().map(|m| (m.from, m.to)).collect();
        assert_eq!(pairs, expected);

        let mut game = GameState::with_board(Board::from_widths(&[30, 20, 10]));
        let outcome = solve_board(&mut game, 0, 1, 2);
        assert_eq!(outcome.moves_applied, 7);
        assert!(outcome.is_win);
        assert_eq!(game.board.sticks[2].len(), 3);
        assert!(game.board.sticks[2].is_well_stacked());
    }

    /// Replaying the full line keeps the stacking invariant intact at
    /// every intermediate step and ends in a win, for a range of sizes.
    #[test]
    fn replay_preserves_invariant_at_every_step() {
        for n in 1..=8u8 {
            let mut game = GameState::with_board(Board::with_disks(n));
            for mv in optimal_moves(n, 0, 1, 2) {
                assert_eq!(
                    game.apply_move(mv),
                    ClickOutcome::MoveApplied,
                    "n = {}, move {:?}",
                    n,
                    mv
                );
                assert!(game.board.is_consistent(), "n = {}, after {:?}", n, mv);
            }
            assert!(game.is_won(), "n = {}", n);
            assert_eq!(game.move_count(), (1usize << n) - 1);
        }
    }

    /// The solver drives the goal stick through the same win latch the
    /// interactive path uses.
    #[test]
    fn standard_game_solves_in_255_moves() {
        let mut game = GameState::new();
        let outcome = solve_board(&mut game, 0, 1, 2);
        assert_eq!(outcome.line.len(), 255);
        assert_eq!(outcome.moves_applied, 255);
        assert!(outcome.is_win);
        assert!(game.is_won());
    }

    /// Replay against a non-canonical board stops at the first rejected
    /// move instead of corrupting the stacks.
    #[test]
    fn replay_against_wrong_board_stops_early() {
        let board = Board::from_widths(&[30, 20, 10]);
        let line = optimal_moves(3, 0, 1, 2);
        let mut game = GameState::with_board(board.clone());
        // Scramble: move top disk away so the 4th move of the line
        // (0→2 with a wider disk) will eventually be refused.
        game.apply_move(Move::new(0, 1));

        let mut applied = 0;
        for mv in &line {
            match game.apply_move(*mv) {
                ClickOutcome::MoveApplied => applied += 1,
                _ => break,
            }
        }
        assert!(applied < line.len());
        assert!(game.board.is_consistent());

        // The canonical board replays fine.
        let outcome = solve_board(&mut GameState::with_board(board), 0, 1, 2);
        assert!(outcome.is_win);
    }

    /// `minimum_moves` matches the emitted line length for small n and
    /// is exact far beyond u64 range.
    #[test]
    fn minimum_moves_is_exact() {
        for n in 1..=10u32 {
            assert_eq!(
                minimum_moves(n),
                BigUint::from((1u64 << n) - 1),
                "n = {}",
                n
            );
        }
        // 2^200 − 1 has 61 decimal digits; spot-check the digit count.
        let big = minimum_moves(200);
        assert_eq!(big.to_string().len(), 61);
    }
}
