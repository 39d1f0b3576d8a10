//! Game-level state: board + move history + input handling.
//!
//! This module defines `GameState`, which encapsulates exactly the data
//! needed to describe a session:
//!   - the current board (three sticks and the selection pointer)
//!   - the sequence of moves applied so far
//!   - the latched won flag.
//!
//! It also implements the two-click move state machine. Every input
//! event resolves to a `ClickOutcome`; invalid events (empty source,
//! unknown stick, input after a win, cancel with nothing selected) are
//! idempotent no-ops rather than errors.

use crate::board::Board;
use crate::disk::StickId;
use crate::moves::Move;

/// Events delivered by the input layer.
///
/// Decoding clicks/keys into these is the presentation layer's job; the
/// original game maps canvas clicks and the 1/2/3 keys to
/// `StickClicked` and the Escape key to `Cancel`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// The stick with the given id was clicked (or chosen by key).
    StickClicked(StickId),
    /// Abandon the pending selection, if any.
    Cancel,
}

/// How a single input event resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A non-empty stick became the selected move source.
    SelectionStarted,
    /// The selected stick was clicked again (or Escape was pressed);
    /// the pending move was abandoned without touching any stack.
    SelectionCancelled,
    /// The pending move was legal and has been applied.
    MoveApplied,
    /// An empty stick cannot start a move; nothing changed.
    RejectedEmptySource,
    /// The pending move was illegal; the source stays selected so the
    /// player can try another target.
    RejectedIllegalMove,
    /// Event arrived outside the playable state (unknown stick id,
    /// cancel with nothing selected, any input after the win).
    Ignored,
}

/// Complete description of a single session at a point in time.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Current board, including the pending-selection pointer.
    pub board: Board,
    /// The sequence of moves applied since the initial deal.
    pub moves: Vec<Move>,
    /// Latched outcome flag: set when the goal stick first holds every
    /// disk, never cleared for the rest of the session.
    won: bool,
}

impl GameState {
    /// Fresh session over the standard 8-disk board.
    pub fn new() -> Self {
        GameState::with_board(Board::standard())
    }

    /// Fresh session over an arbitrary starting board.
    pub fn with_board(board: Board) -> Self {
        let won = board.is_won();
        GameState {
            board,
            moves: Vec::new(),
            won,
        }
    }

    /// Number of moves that have been applied.
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Whether the session has been won. Monotonic.
    #[inline]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Handle one input event, advancing the selection state machine.
    pub fn handle_event(&mut self, event: InputEvent) -> ClickOutcome {
        match event {
            InputEvent::StickClicked(id) => self.handle_click(id),
            InputEvent::Cancel => self.handle_cancel(),
        }
    }

    /// Handle a click on the stick with the given id.
    ///
    /// First click selects a non-empty source; second click either
    /// cancels (same stick), applies a legal move, or leaves the
    /// selection pending (illegal target).
    pub fn handle_click(&mut self, id: StickId) -> ClickOutcome {
        if self.won || self.board.stick(id).is_none() {
            return ClickOutcome::Ignored;
        }

        let Some(source) = self.board.selected else {
            // No move in progress: try to start one.
            if self.board.sticks[id as usize].is_empty() {
                return ClickOutcome::RejectedEmptySource;
            }
            self.board.selected = Some(id);
            return ClickOutcome::SelectionStarted;
        };

        if source == id {
            // Second click on the source abandons the move.
            self.board.selected = None;
            return ClickOutcome::SelectionCancelled;
        }

        let mv = Move::new(source, id);
        if !mv.apply(&mut self.board) {
            // Source stays selected for another attempt.
            return ClickOutcome::RejectedIllegalMove;
        }
        self.board.selected = None;
        self.moves.push(mv);
        if self.board.is_won() {
            self.won = true;
        }
        ClickOutcome::MoveApplied
    }

    /// Abandon the pending selection (Escape in the original game).
    pub fn handle_cancel(&mut self) -> ClickOutcome {
        if self.won || self.board.selected.is_none() {
            return ClickOutcome::Ignored;
        }
        self.board.selected = None;
        ClickOutcome::SelectionCancelled
    }

    /// Apply an abstract move through the same path the click handler
    /// uses: select the source, then click the target.
    ///
    /// This is how the solver drives the board. Returns the outcome of
    /// the second click; a failed selection reports itself directly.
    pub fn apply_move(&mut self, mv: Move) -> ClickOutcome {
        match self.handle_click(mv.from) {
            ClickOutcome::SelectionStarted => {}
            other => return other,
        }
        let outcome = self.handle_click(mv.to);
        if outcome == ClickOutcome::RejectedIllegalMove {
            // Don't leave a stale selection behind on behalf of a
            // programmatic caller.
            self.board.selected = None;
        }
        outcome
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
