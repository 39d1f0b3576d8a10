//! Human-readable rendering of Hanoi boards.
//!
//! This module provides functions to render a `Board` as text: a
//! one-line-per-stick listing for logs, and a small ASCII side view for
//! the CLI. The intent is a stable, readable representation that is
//! useful for debugging and for printing solver lines of play.
//!
//! Disk widths are scaled down by `DISK_WIDTH_STEP` in the picture, so
//! the standard game's 110-wide bottom disk draws as 11 characters.

use crate::board::{Board, Stick};
use crate::disk::{Disk, DISK_WIDTH_STEP};
use crate::moves::Move;

/// Format a single disk for the stick listing, e.g. `[110]`.
pub fn format_disk(disk: Disk) -> String {
    format!("[{}]", disk.width())
}

/// Render one stick as a single line, bottom-to-top, with a `*` marker
/// on the pending-move source.
///
///   - `Stick 1*: [110] [100] (2 disks)`
///   - `Stick 2: (empty)`
pub fn render_stick_line(id: u8, stick: &Stick, selected: bool) -> String {
    let marker = if selected { "*" } else { "" };
    if stick.is_empty() {
        return format!("Stick {}{}: (empty)", id + 1, marker);
    }
    let disks: Vec<String> = stick.disks().iter().map(|&d| format_disk(d)).collect();
    format!(
        "Stick {}{}: {} ({} disk{})",
        id + 1,
        marker,
        disks.join(" "),
        stick.len(),
        if stick.len() == 1 { "" } else { "s" }
    )
}

/// Render the whole board as one stick listing per line.
pub fn render_board(board: &Board) -> String {
    let mut lines = Vec::new();
    for (i, stick) in board.sticks.iter().enumerate() {
        let selected = board.selected == Some(i as u8);
        lines.push(render_stick_line(i as u8, stick, selected));
    }
    lines.join("\n")
}

/// Character width of a disk in the ASCII picture.
fn scaled_width(disk: Disk) -> usize {
    ((disk.width() / DISK_WIDTH_STEP) as usize).max(1)
}

/// Render the board as a side-view ASCII picture.
///
/// Each stick is a column; disks are rows of `=` centered on the peg's
/// `|`, widest at the bottom, with a floor line underneath. Column
/// width is fixed to the widest disk on the board so the picture stays
/// aligned as disks move.
pub fn render_board_picture(board: &Board) -> String {
    let cell = board
        .sticks
        .iter()
        .flat_map(|s| s.disks().iter())
        .map(|&d| scaled_width(d))
        .max()
        .unwrap_or(1);
    let height = board.num_disks() as usize;

    let mut lines = Vec::new();
    for level in (0..height).rev() {
        let mut cols = Vec::new();
        for stick in &board.sticks {
            let body = match stick.disks().get(level) {
                Some(&disk) => "=".repeat(scaled_width(disk)),
                None => "|".to_string(),
            };
            let pad_left = (cell - body.len()) / 2;
            let pad_right = cell - body.len() - pad_left;
            cols.push(format!(
                "{}{}{}",
                " ".repeat(pad_left),
                body,
                " ".repeat(pad_right)
            ));
        }
        lines.push(cols.join("  "));
    }
    lines.push("-".repeat(cell * 3 + 4));
    lines.join("\n")
}

/// Print the picture and the per-stick listing to stdout.
pub fn print_board(board: &Board) {
    println!("{}", render_board_picture(board));
    println!("{}", render_board(board));
}

/// Print a numbered move list, 1-based on both counters and stick ids.
pub fn print_move_list(line: &[Move]) {
    for (i, mv) in line.iter().enumerate() {
        println!("  {:3}: Stick {} -> Stick {}", i + 1, mv.from + 1, mv.to + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    /// Stick listing shows widths bottom-to-top and flags the selected
    /// source stick.
    #[test]
    fn stick_listing_format() {
        let mut board = Board::from_widths(&[30, 20, 10]);
        board.selected = Some(0);

        let text = render_board(&board);
        let expected = "Stick 1*: [30] [20] [10] (3 disks)\n\
                        Stick 2: (empty)\n\
                        Stick 3: (empty)";
        assert_eq!(text, expected);
    }

    /// A single disk loses the plural `s`.
    #[test]
    fn singular_disk_count() {
        let board = Board::from_widths(&[40]);
        assert_eq!(
            render_stick_line(0, &board.sticks[0], false),
            "Stick 1: [40] (1 disk)"
        );
    }

    /// Exact picture for the 3-disk starting position: scaled widths
    /// 3/2/1, empty pegs drawn as `|`, floor underneath.
    #[test]
    fn picture_of_three_disk_start() {
        let board = Board::from_widths(&[30, 20, 10]);
        let expected = " =    |    | \n\
                        ==    |    | \n\
                        ===   |    | \n\
                        -------------";
        assert_eq!(render_board_picture(&board), expected);
    }
}
