//! Attacked-square maps for partially shown placements.

use crate::ColumnMask;
use queens_core::{BoardSize, Cell, Placement};

/// The squares attacked by the queens of the first few rows of a placement.
///
/// Each visible queen attacks its whole row, its column and both diagonals.
/// Squares holding a visible queen are not counted as attacked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackMap {
    size: BoardSize,
    rows: Vec<ColumnMask>,
}

impl AttackMap {
    /// Builds the map for the queens on rows `0..visible_rows` of `placement`.
    ///
    /// `visible_rows` is clamped to the placement length, so passing the board
    /// size covers every queen.
    pub fn new(placement: &Placement, visible_rows: usize) -> Self {
        let size = placement.size();
        let n = size.get();
        let full = ColumnMask::full(size);
        let visible: Vec<Cell> = placement.cells().take(visible_rows).collect();

        let rows = (0..n)
            .map(|row| {
                let mut mask = ColumnMask::EMPTY;
                for queen in &visible {
                    let queen_row = usize::from(queen.row);
                    if queen_row == row {
                        mask = full;
                        break;
                    }
                    mask |= queen_lines(*queen, row, n);
                }
                if let Some(col) = placement.column(row).filter(|_| row < visible.len()) {
                    mask &= !ColumnMask::single(col);
                }
                mask
            })
            .collect();

        AttackMap { size, rows }
    }

    /// Board size the map covers.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns true if a visible queen attacks `cell`.
    pub fn is_attacked(&self, cell: Cell) -> bool {
        self.rows
            .get(usize::from(cell.row))
            .is_some_and(|mask| mask.contains(cell.col))
    }

    /// Attacked columns of each row.
    pub fn rows(&self) -> &[ColumnMask] {
        &self.rows
    }

    /// Total number of attacked squares.
    pub fn attacked_count(&self) -> u32 {
        self.rows.iter().map(|mask| mask.count()).sum()
    }
}

/// Columns of `row` hit by a queen on another row: straight down and the two
/// diagonals.
fn queen_lines(queen: Cell, row: usize, n: usize) -> ColumnMask {
    let col = usize::from(queen.col);
    let distance = usize::from(queen.row).abs_diff(row);
    let mut mask = ColumnMask::single(queen.col);
    if col + distance < n {
        mask.set((col + distance) as u8);
    }
    if col >= distance {
        mask.set((col - distance) as u8);
    }
    mask
}
