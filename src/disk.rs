//! Disk and stick-identity types for the Towers of Hanoi board.
//!
//! - `Disk` is a compact newtype over its width; width alone decides
//!   stacking legality, so nothing else needs to be stored per disk.
//! - `StickId` is a plain `u8` in 0..NUM_STICKS; stick 0 is the start
//!   stick and stick `NUM_STICKS - 1` is the goal stick.

use core::fmt;

/// Number of sticks (pegs) on the board.
pub const NUM_STICKS: u8 = 3;
/// Number of disks in the standard game.
pub const NUM_DISKS: u8 = 8;

/// Render height of every disk.
///
/// Disks are all the same height; only width varies. A renderer stacks
/// disks at `position * DISK_HEIGHT` offsets, so the core exposes the
/// constant even though no core rule depends on it.
pub const DISK_HEIGHT: u16 = 20;

/// Width of the widest (bottom) disk in the standard 8-disk game.
pub const BASE_DISK_WIDTH: u16 = 110;
/// Width difference between adjacent disks.
pub const DISK_WIDTH_STEP: u16 = 10;

/// Index of the stick all disks start on.
pub const START_STICK: u8 = 0;
/// Index of the stick the game is won on.
pub const GOAL_STICK: u8 = NUM_STICKS - 1;

/// A puzzle disk, represented compactly by its width.
///
/// Widths are distinct within a game, so a `Disk` value doubles as the
/// disk's identity. Ordering follows width: `a < b` means `a` is
/// narrower and may be stacked on top of `b`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Disk(pub u16);

/// Identity of a stick on the board, 0-based.
pub type StickId = u8;

impl Disk {
    /// Create a disk of the given width.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `width == 0`; a zero-width disk could
    /// be stacked on nothing.
    #[inline]
    pub fn new(width: u16) -> Self {
        debug_assert!(width > 0);
        Disk(width)
    }

    /// Width of this disk.
    #[inline]
    pub fn width(self) -> u16 {
        self.0
    }

    /// Render height of this disk. Constant across all disks.
    #[inline]
    pub fn height(self) -> u16 {
        DISK_HEIGHT
    }

    /// True if this disk may rest directly on `below`.
    #[inline]
    pub fn fits_on(self, below: Disk) -> bool {
        self.0 < below.0
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "disk({})", self.0)
    }
}

/// Widths for an `n`-disk game, bottom-to-top (widest first).
///
/// Uses the standard spacing: the narrowest disk is always
/// `BASE_DISK_WIDTH - 7 * DISK_WIDTH_STEP` = 40 wide and each disk
/// below is `DISK_WIDTH_STEP` wider, so the standard 8-disk game gets
/// the widths 110, 100, ..., 40.
pub fn standard_widths(n: u8) -> Vec<Disk> {
    let narrowest: u16 = BASE_DISK_WIDTH - 7 * DISK_WIDTH_STEP;
    (0..n)
        .map(|i| Disk::new(narrowest + DISK_WIDTH_STEP * (n - 1 - i) as u16))
        .collect()
}
