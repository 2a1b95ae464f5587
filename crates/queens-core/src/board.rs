//! Board size and cell coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when constructing a [`BoardSize`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardSizeError {
    #[error("invalid board size: {0} is negative")]
    Negative(i64),

    #[error("invalid board size: {size} exceeds the maximum of {max} columns")]
    TooWide { size: i64, max: u8 },

    #[error("invalid board size: '{0}' is not an integer")]
    InvalidNumber(String),
}

/// The side length `N` of a square board.
///
/// Rows and columns are indexed `0..N`. The width is bounded by
/// [`BoardSize::MAX`] because every row of the board is held in a single
/// 64-bit column mask during search.
///
/// Zero is a valid size: the empty board has exactly one (empty) placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct BoardSize(u8);

impl BoardSize {
    /// Largest representable board side.
    pub const MAX: u8 = 64;

    /// The smallest board with a non-trivial set of solutions.
    pub const FIVE: BoardSize = BoardSize(5);

    /// The classic eight queens board.
    pub const EIGHT: BoardSize = BoardSize(8);

    /// Creates a board size from a signed integer, rejecting negative and
    /// over-wide values.
    pub const fn new(n: i64) -> Result<Self, BoardSizeError> {
        if n < 0 {
            Err(BoardSizeError::Negative(n))
        } else if n > Self::MAX as i64 {
            Err(BoardSizeError::TooWide {
                size: n,
                max: Self::MAX,
            })
        } else {
            Ok(BoardSize(n as u8))
        }
    }

    /// Returns the side length.
    #[inline]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Returns the side length as a `u8`.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Returns true if `cell` lies on this board.
    #[inline]
    pub const fn contains(self, cell: Cell) -> bool {
        cell.row < self.0 && cell.col < self.0
    }

    /// Iterates over every cell, row by row.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let n = self.0;
        (0..n).flat_map(move |row| (0..n).map(move |col| Cell::new(row, col)))
    }
}

impl TryFrom<i64> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        BoardSize::new(n)
    }
}

impl From<BoardSize> for u8 {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl FromStr for BoardSize {
    type Err = BoardSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = s
            .trim()
            .parse::<i64>()
            .map_err(|_| BoardSizeError::InvalidNumber(s.to_string()))?;
        BoardSize::new(n)
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single square of the board.
///
/// Algebraic notation names the column with a file letter (`a` is column 0)
/// and the row with a one-based rank (`1` is row 0), so row 0, column 1 is
/// `b1`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    /// Creates a cell from row and column indices.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Cell { row, col }
    }

    /// Returns the file letter of this cell's column, if it has one.
    #[inline]
    pub const fn file_char(self) -> Option<char> {
        if self.col < 26 {
            Some((b'a' + self.col) as char)
        } else {
            None
        }
    }

    /// Returns true if a queen on `self` attacks `other`.
    ///
    /// A cell does not attack itself.
    pub const fn attacks(self, other: Cell) -> bool {
        if self.row == other.row && self.col == other.col {
            return false;
        }
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        self.row == other.row || self.col == other.col || dr == dc
    }

    /// Parses a cell from algebraic notation (e.g. "b1", "c12").
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file = chars.next()?.to_ascii_lowercase();
        if !file.is_ascii_lowercase() {
            return None;
        }
        let rank: u8 = chars.as_str().parse().ok()?;
        if rank == 0 {
            return None;
        }
        Some(Cell::new(rank - 1, file as u8 - b'a'))
    }

    /// Returns the algebraic notation, or `None` for columns past `z`.
    pub fn to_algebraic(self) -> Option<String> {
        let file = self.file_char()?;
        Some(format!("{}{}", file, self.row as u32 + 1))
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(s) => f.write_str(&s),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_size_bounds() {
        assert_eq!(BoardSize::new(0).map(BoardSize::get), Ok(0));
        assert_eq!(BoardSize::new(64).map(BoardSize::get), Ok(64));
        assert_eq!(BoardSize::new(-1), Err(BoardSizeError::Negative(-1)));
        assert_eq!(
            BoardSize::new(65),
            Err(BoardSizeError::TooWide { size: 65, max: 64 })
        );
    }

    #[test]
    fn board_size_constants() {
        assert_eq!(BoardSize::new(5), Ok(BoardSize::FIVE));
        assert_eq!(BoardSize::new(8), Ok(BoardSize::EIGHT));
        assert!(BoardSize::FIVE < BoardSize::EIGHT);
    }

    #[test]
    fn board_size_from_str() {
        assert_eq!("8".parse::<BoardSize>(), Ok(BoardSize::EIGHT));
        assert_eq!(" 5 ".parse::<BoardSize>().map(BoardSize::get), Ok(5));
        assert_eq!(
            "-3".parse::<BoardSize>(),
            Err(BoardSizeError::Negative(-3))
        );
        assert_eq!(
            "eight".parse::<BoardSize>(),
            Err(BoardSizeError::InvalidNumber("eight".to_string()))
        );
    }

    #[test]
    fn board_size_serde() {
        let size: BoardSize = serde_json::from_str("6").unwrap();
        assert_eq!(size.get(), 6);
        assert_eq!(serde_json::to_string(&size).unwrap(), "6");
        assert!(serde_json::from_str::<BoardSize>("-2").is_err());
    }

    #[test]
    fn board_cells_row_major() {
        let cells: Vec<Cell> = BoardSize::new(2).unwrap().cells().collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(1, 1)
            ]
        );
    }

    #[test]
    fn cell_algebraic() {
        assert_eq!(Cell::new(0, 1).to_algebraic().as_deref(), Some("b1"));
        assert_eq!(Cell::new(7, 7).to_algebraic().as_deref(), Some("h8"));
        assert_eq!(Cell::new(11, 2).to_algebraic().as_deref(), Some("c12"));
        assert_eq!(Cell::new(0, 30).to_algebraic(), None);
        assert_eq!(Cell::from_algebraic("b1"), Some(Cell::new(0, 1)));
        assert_eq!(Cell::from_algebraic("C12"), Some(Cell::new(11, 2)));
        assert_eq!(Cell::from_algebraic("a0"), None);
        assert_eq!(Cell::from_algebraic("1a"), None);
        assert_eq!(Cell::from_algebraic(""), None);
    }

    #[test]
    fn cell_attacks() {
        let c = Cell::new(2, 2);
        assert!(c.attacks(Cell::new(2, 5)));
        assert!(c.attacks(Cell::new(6, 2)));
        assert!(c.attacks(Cell::new(0, 0)));
        assert!(c.attacks(Cell::new(0, 4)));
        assert!(!c.attacks(Cell::new(3, 4)));
        assert!(!c.attacks(c));
    }
}
