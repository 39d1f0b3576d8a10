//! Board state: three sticks of disks plus the pending-move selection.
//!
//! This module owns the two structural invariants of the puzzle:
//!   - within any stick, disks are strictly decreasing in width from
//!     bottom to top (`Stick::is_well_stacked`), and
//!   - a disk lives on exactly one stick at a time (guaranteed by move
//!     application popping before pushing; see `crate::moves`).
//!
//! The selection pointer (`Board::selected`) is part of the board
//! aggregate rather than a process-wide variable, so input handling and
//! the solver can share one board by reference.

use crate::disk::{standard_widths, Disk, StickId, GOAL_STICK, NUM_DISKS, NUM_STICKS, START_STICK};

/// One stick (peg): an ordered stack of disks.
///
/// Storage is bottom-to-top; the last element is the top, movable disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stick {
    disks: Vec<Disk>,
}

impl Stick {
    /// Create an empty stick.
    pub fn new() -> Self {
        Stick { disks: Vec::new() }
    }

    /// Number of disks on this stick.
    #[inline]
    pub fn len(&self) -> usize {
        self.disks.len()
    }

    /// True if this stick holds no disks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// The top (movable) disk, if any.
    #[inline]
    pub fn top(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    /// Ordered disk sequence, bottom-to-top.
    ///
    /// This is the read-only view a renderer iterates to draw the stick.
    #[inline]
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// True if `disk` may be placed on this stick: the stack is empty,
    /// or the candidate is strictly narrower than the current top.
    ///
    /// Pure query, no side effects. Cancellation of a pending move is a
    /// separate state-machine transition (`crate::game`), never a
    /// legality exception here.
    #[inline]
    pub fn can_add(&self, disk: Disk) -> bool {
        match self.top() {
            None => true,
            Some(top) => disk.fits_on(top),
        }
    }

    /// Push a disk onto this stick.
    ///
    /// Callers are expected to have checked `can_add` first; this is
    /// asserted in debug builds only, mirroring the "assume legal"
    /// contract of `Move::apply`.
    #[inline]
    pub fn push(&mut self, disk: Disk) {
        debug_assert!(self.can_add(disk));
        self.disks.push(disk);
    }

    /// Remove and return the top disk, if any.
    #[inline]
    pub fn pop(&mut self) -> Option<Disk> {
        self.disks.pop()
    }

    /// True if the stack is strictly decreasing in width bottom-to-top.
    pub fn is_well_stacked(&self) -> bool {
        self.disks
            .windows(2)
            .all(|pair| pair[1].fits_on(pair[0]))
    }
}

impl Default for Stick {
    fn default() -> Self {
        Stick::new()
    }
}

/// The full board: three sticks plus the pending-move selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// The three sticks, indexed by `StickId`.
    pub sticks: [Stick; NUM_STICKS as usize],
    /// Source stick of the move in progress, if one is selected.
    ///
    /// Invariant: the selected stick was non-empty when selected, and
    /// nothing is popped from it until the move resolves, so it stays
    /// non-empty while selected.
    pub selected: Option<StickId>,
    /// Total number of disks on the board; the win check compares the
    /// goal stick's count against this.
    num_disks: u8,
}

impl Board {
    /// Board with all `n` standard-width disks stacked on the start stick.
    pub fn with_disks(n: u8) -> Self {
        let mut board = Board {
            sticks: Default::default(),
            selected: None,
            num_disks: n,
        };
        for disk in standard_widths(n) {
            board.sticks[START_STICK as usize].push(disk);
        }
        board
    }

    /// The standard 8-disk game.
    pub fn standard() -> Self {
        Board::with_disks(NUM_DISKS)
    }

    /// Board from an explicit bottom-to-top width list, all on the start
    /// stick. Widths must be strictly decreasing.
    pub fn from_widths(widths: &[u16]) -> Self {
        let mut board = Board {
            sticks: Default::default(),
            selected: None,
            num_disks: widths.len() as u8,
        };
        for &w in widths {
            board.sticks[START_STICK as usize].push(Disk::new(w));
        }
        board
    }

    /// Total number of disks in play.
    #[inline]
    pub fn num_disks(&self) -> u8 {
        self.num_disks
    }

    /// Shared read access to a stick, if the id is in range.
    #[inline]
    pub fn stick(&self, id: StickId) -> Option<&Stick> {
        self.sticks.get(id as usize)
    }

    /// True iff the goal stick holds every disk.
    ///
    /// The stacking invariant guarantees that "all disks on the goal
    /// stick" implies "in correct order", so a count comparison is the
    /// whole check.
    pub fn is_won(&self) -> bool {
        self.sticks[GOAL_STICK as usize].len() == self.num_disks as usize
    }

    /// True if every stick satisfies the decreasing-width invariant.
    ///
    /// Ordinary play can never violate this; tests call it after every
    /// mutation as a structural self-check.
    pub fn is_consistent(&self) -> bool {
        let total: usize = self.sticks.iter().map(Stick::len).sum();
        total == self.num_disks as usize && self.sticks.iter().all(Stick::is_well_stacked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A freshly dealt standard board: 8 disks on stick 0, nothing
    /// selected, not won, consistent.
    #[test]
    fn standard_board_initial_layout() {
        let board = Board::standard();
        assert_eq!(board.sticks[0].len(), 8);
        assert!(board.sticks[1].is_empty());
        assert!(board.sticks[2].is_empty());
        assert_eq!(board.selected, None);
        assert!(!board.is_won());
        assert!(board.is_consistent());
    }

    /// `can_add` permits any disk on an empty stick and only strictly
    /// narrower disks on a non-empty one.
    #[test]
    fn can_add_rules() {
        let mut stick = Stick::new();
        assert!(stick.can_add(Disk::new(110)));

        stick.push(Disk::new(50));
        assert!(stick.can_add(Disk::new(40)));
        assert!(!stick.can_add(Disk::new(50)));
        assert!(!stick.can_add(Disk::new(60)));
    }

    /// Win requires *all* disks on the goal stick, not just some.
    #[test]
    fn win_requires_full_goal_stick() {
        let mut board = Board::from_widths(&[30, 20, 10]);
        assert!(!board.is_won());

        // Move the top two disks over by hand.
        let d10 = board.sticks[0].pop().unwrap();
        let d20 = board.sticks[0].pop().unwrap();
        board.sticks[2].push(d20);
        board.sticks[2].push(d10);
        assert!(!board.is_won());
        assert!(board.is_consistent());

        let d30 = board.sticks[0].pop().unwrap();
        // Rebuild the goal stick in legal order.
        let d10 = board.sticks[2].pop().unwrap();
        let d20 = board.sticks[2].pop().unwrap();
        board.sticks[2].push(d30);
        board.sticks[2].push(d20);
        board.sticks[2].push(d10);
        assert!(board.is_won());
        assert!(board.is_consistent());
    }

    /// Out-of-range stick ids are queryable without panicking.
    #[test]
    fn stick_lookup_is_bounds_checked() {
        let board = Board::standard();
        assert!(board.stick(2).is_some());
        assert!(board.stick(3).is_none());
    }
}
