//! Move representation and move application for the Hanoi board.
//!
//! This module defines a compact `Move` type plus helpers to generate all
//! legal moves from a given `Board`, plus an `apply` method that mutates
//! a board in-place according to a chosen move. Both the interactive
//! input path (`crate::game`) and the solver (`crate::solver`) funnel
//! every board mutation through `Move::apply`, so legality lives in
//! exactly one place.

use crate::board::Board;
use crate::disk::{StickId, NUM_STICKS};

/// Relocation of the top disk of one stick onto another.
///
/// Stick ids are 0-based internally but usually printed as 1-based when
/// shown to a human.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    /// Stick the disk is taken from.
    pub from: StickId,
    /// Stick the disk is placed on.
    pub to: StickId,
}

impl Move {
    /// Construct a move between two sticks.
    #[inline]
    pub fn new(from: StickId, to: StickId) -> Self {
        Move { from, to }
    }

    /// True if this move is legal on the given board: distinct in-range
    /// sticks, a disk to take, and a destination whose top (if any) is
    /// wider than the moved disk.
    pub fn is_legal(&self, board: &Board) -> bool {
        if self.from == self.to {
            return false;
        }
        let (Some(src), Some(dst)) = (board.stick(self.from), board.stick(self.to)) else {
            return false;
        };
        match src.top() {
            Some(disk) => dst.can_add(disk),
            None => false,
        }
    }

    /// Apply this move to the board, mutating it in-place.
    ///
    /// Returns `true` if the disk was moved. An illegal move leaves both
    /// sticks untouched and returns `false`; the legality check happens
    /// before anything is popped, so a rejected move can never strand a
    /// disk off-board.
    pub fn apply(&self, board: &mut Board) -> bool {
        if !self.is_legal(board) {
            return false;
        }
        // Legality guarantees a top disk on `from`.
        let Some(disk) = board.sticks[self.from as usize].pop() else {
            return false;
        };
        board.sticks[self.to as usize].push(disk);
        true
    }

    /// Render this move as a human-readable string, using the board for
    /// the identity of the disk about to move.
    pub fn describe(&self, board: &Board) -> String {
        let disk = board.stick(self.from).and_then(|s| s.top());
        match disk {
            Some(d) => format!("Stick {}: {} -> Stick {}", self.from + 1, d, self.to + 1),
            None => format!("Stick {} (empty) -> Stick {}", self.from + 1, self.to + 1),
        }
    }
}

/// Generate all legal moves from the given board.
///
/// This does **not** apply or prioritize moves; it just lists everything
/// that is legal in the current state. With three sticks there are at
/// most six candidates to consider.
pub fn generate_legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    for from in 0..NUM_STICKS {
        for to in 0..NUM_STICKS {
            if from == to {
                continue;
            }
            let mv = Move::new(from, to);
            if mv.is_legal(board) {
                moves.push(mv);
            }
        }
    }
    moves
}
