//! Depth-first enumeration of N-Queens placements.
//!
//! The search fills the board one row at a time. Three column masks describe
//! what the queens above the current row attack:
//!
//! - `cols`: columns that already hold a queen
//! - `left`: squares of the current row hit along the down-right diagonals
//! - `right`: squares of the current row hit along the down-left diagonals
//!
//! Moving to the next row pushes the diagonal attacks one column outward, so
//! `left` shifts toward higher columns and `right` toward lower ones. The safe
//! squares of a row are then `full & !(cols | left | right)`, with no scan over
//! the queens already placed.
//!
//! Solutions come out in lexicographic order because candidates are tried in
//! ascending column order at every row.

use crate::ColumnMask;
use queens_core::{BoardSize, BoardSizeError, Placement};

/// Attack state entering a row.
///
/// Copied into every recursive call, so a branch never sees its siblings'
/// updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SearchState {
    pub(crate) cols: ColumnMask,
    pub(crate) left: ColumnMask,
    pub(crate) right: ColumnMask,
}

impl SearchState {
    /// State of the first row: nothing is attacked.
    pub(crate) const EMPTY: SearchState = SearchState {
        cols: ColumnMask::EMPTY,
        left: ColumnMask::EMPTY,
        right: ColumnMask::EMPTY,
    };

    /// Columns of the current row that no placed queen attacks.
    #[inline]
    pub(crate) fn available(self, full: ColumnMask) -> ColumnMask {
        full & !(self.cols | self.left | self.right)
    }

    /// State of the next row after placing a queen on `col` in this one.
    #[inline]
    pub(crate) fn place(self, col: u8, full: ColumnMask) -> SearchState {
        let bit = ColumnMask::single(col);
        SearchState {
            cols: self.cols | bit,
            left: (self.left | bit).shift_up() & full,
            right: (self.right | bit).shift_down(),
        }
    }
}

/// Enumerates every solution for an `n` x `n` board.
///
/// This is the checked entry point: `n` must be in `0..=64`. Zero yields the
/// single empty placement. Negative sizes are rejected rather than treated
/// as an empty board.
///
/// The number of solutions grows roughly factorially; past `n` of about 12 to
/// 14 materialising them all becomes impractical, and [`crate::count`] should
/// be used instead.
///
/// # Errors
///
/// Returns [`BoardSizeError::Negative`] for `n < 0` and
/// [`BoardSizeError::TooWide`] for `n > 64`.
///
/// # Example
///
/// ```
/// let solutions = queens_solver::enumerate(4).unwrap();
/// assert_eq!(solutions.len(), 2);
/// assert_eq!(solutions[0].columns(), &[1, 3, 0, 2]);
/// ```
pub fn enumerate(n: i64) -> Result<Vec<Placement>, BoardSizeError> {
    let size = BoardSize::new(n)?;
    Ok(solve(size))
}

/// Enumerates every solution for a validated board size.
///
/// Solutions are ordered by discovery, which is lexicographic order of their
/// column sequences.
pub fn solve(size: BoardSize) -> Vec<Placement> {
    let full = ColumnMask::full(size);
    let mut solutions = Vec::new();
    let mut partial = Vec::with_capacity(size.get());
    place_row(
        size.get(),
        SearchState::EMPTY,
        full,
        &mut partial,
        &mut solutions,
    );
    solutions
}

fn place_row(
    n: usize,
    state: SearchState,
    full: ColumnMask,
    partial: &mut Vec<u8>,
    solutions: &mut Vec<Placement>,
) {
    if partial.len() == n {
        solutions.push(Placement::from_columns_unchecked(partial.clone()));
        return;
    }

    for col in state.available(full) {
        partial.push(col);
        place_row(n, state.place(col, full), full, partial, solutions);
        partial.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_row_has_every_column() {
        let full = ColumnMask::full(BoardSize::new(5).unwrap());
        assert_eq!(SearchState::EMPTY.available(full), full);
    }

    #[test]
    fn place_updates_attacks() {
        let full = ColumnMask::full(BoardSize::new(5).unwrap());
        let next = SearchState::EMPTY.place(2, full);
        assert_eq!(next.cols, ColumnMask::single(2));
        assert_eq!(next.left, ColumnMask::single(3));
        assert_eq!(next.right, ColumnMask::single(1));
        // Row 1 can use columns 0 and 4 only.
        assert_eq!(next.available(full), ColumnMask::new(0b10001));
    }

    #[test]
    fn diagonals_fall_off_the_edge() {
        let full = ColumnMask::full(BoardSize::new(4).unwrap());
        let next = SearchState::EMPTY.place(3, full).place(0, full);
        assert_eq!(next.left, ColumnMask::single(1));
        assert!(!next.left.contains(4));
        assert_eq!(next.right, ColumnMask::single(1));
    }

    #[test]
    fn enumerate_four() {
        let solutions = enumerate(4).unwrap();
        let columns: Vec<&[u8]> = solutions.iter().map(|p| p.columns()).collect();
        assert_eq!(columns, vec![&[1, 3, 0, 2][..], &[2, 0, 3, 1][..]]);
    }

    #[test]
    fn enumerate_degenerate_sizes() {
        assert_eq!(enumerate(0).unwrap(), vec![Placement::EMPTY]);
        assert_eq!(enumerate(1).unwrap()[0].columns(), &[0]);
        assert!(enumerate(2).unwrap().is_empty());
        assert!(enumerate(3).unwrap().is_empty());
    }

    #[test]
    fn enumerate_rejects_negative() {
        assert_eq!(enumerate(-1), Err(BoardSizeError::Negative(-1)));
        assert_eq!(enumerate(i64::MIN), Err(BoardSizeError::Negative(i64::MIN)));
    }

    #[test]
    fn enumerate_rejects_too_wide() {
        assert!(matches!(
            enumerate(65),
            Err(BoardSizeError::TooWide { size: 65, .. })
        ));
    }
}
