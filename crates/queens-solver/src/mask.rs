//! Column mask representation and operations.
//!
//! A column mask is a 64-bit integer where bit `i` stands for column `i` of a
//! single board row. The solver keeps its attacked columns and diagonals in
//! masks so that the safe squares of a row come out of one bitwise expression.

use queens_core::BoardSize;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// A set of columns of one row.
///
/// Bit 0 = column 0 (file a), bit 1 = column 1, and so on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColumnMask(pub u64);

impl ColumnMask {
    /// Empty mask (no columns set).
    pub const EMPTY: ColumnMask = ColumnMask(0);

    /// Creates a mask from a raw u64.
    #[inline]
    pub const fn new(bits: u64) -> Self {
        ColumnMask(bits)
    }

    /// Mask with the low `size` bits set: every column of the board.
    #[inline]
    pub const fn full(size: BoardSize) -> Self {
        let n = size.as_u8() as u32;
        if n >= u64::BITS {
            ColumnMask(!0)
        } else {
            ColumnMask((1u64 << n) - 1)
        }
    }

    /// Creates a mask with a single column set.
    #[inline]
    pub const fn single(col: u8) -> Self {
        ColumnMask(1u64 << col)
    }

    /// Returns true if the mask is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set columns.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given column is set.
    #[inline]
    pub const fn contains(self, col: u8) -> bool {
        col < 64 && (self.0 >> col) & 1 == 1
    }

    /// Sets the given column.
    #[inline]
    pub fn set(&mut self, col: u8) {
        self.0 |= 1u64 << col;
    }

    /// Returns the lowest set column, if any.
    #[inline]
    pub const fn lowest(self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as u8)
        }
    }

    /// Removes and returns the lowest set column.
    ///
    /// Repeated calls yield the columns in ascending order.
    #[inline]
    pub fn pop_lowest(&mut self) -> Option<u8> {
        let col = self.lowest()?;
        self.0 &= self.0 - 1; // Clear the lowest bit
        Some(col)
    }

    /// Shifts every column one step toward higher columns.
    ///
    /// The top bit falls off; callers mask with [`ColumnMask::full`] to drop
    /// columns past the board edge.
    #[inline]
    pub const fn shift_up(self) -> ColumnMask {
        ColumnMask(self.0 << 1)
    }

    /// Shifts every column one step toward column 0. Column 0 falls off.
    #[inline]
    pub const fn shift_down(self) -> ColumnMask {
        ColumnMask(self.0 >> 1)
    }
}

impl BitAnd for ColumnMask {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        ColumnMask(self.0 & rhs.0)
    }
}

impl BitAndAssign for ColumnMask {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for ColumnMask {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        ColumnMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for ColumnMask {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Not for ColumnMask {
    type Output = Self;
    #[inline]
    fn not(self) -> Self::Output {
        ColumnMask(!self.0)
    }
}

impl fmt::Debug for ColumnMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only draw up to the highest set column, at least eight.
        let width = (u64::BITS - self.0.leading_zeros()).max(8);
        write!(f, "ColumnMask(")?;
        for col in 0..width {
            if (self.0 >> col) & 1 == 1 {
                write!(f, "X")?;
            } else {
                write!(f, ".")?;
            }
        }
        write!(f, ")")
    }
}

/// Iterator over set columns in ascending order.
pub struct ColumnMaskIter(ColumnMask);

impl Iterator for ColumnMaskIter {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_lowest()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for ColumnMaskIter {}

impl IntoIterator for ColumnMask {
    type Item = u8;
    type IntoIter = ColumnMaskIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ColumnMaskIter(self)
    }
}

impl FromIterator<u8> for ColumnMask {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut mask = ColumnMask::EMPTY;
        for col in iter {
            mask.set(col);
        }
        mask
    }
}
