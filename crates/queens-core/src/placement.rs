//! Queen placements and their text notation.
//!
//! A placement stores one column per row. The notation is the list of
//! zero-based columns separated by commas, so the first four-queens
//! solution reads `1,3,0,2`.

use crate::board::{BoardSize, Cell};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when building or parsing a placement.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("column {col} in row {row} is outside a board of size {size}")]
    ColumnOutOfRange { row: usize, col: u8, size: usize },

    #[error("rows {0} and {1} share a column")]
    SharedColumn(usize, usize),

    #[error("rows {0} and {1} share a diagonal")]
    SharedDiagonal(usize, usize),

    #[error("a placement of {0} rows exceeds the widest board")]
    TooManyRows(usize),

    #[error("invalid placement notation: {0}")]
    InvalidNotation(String),
}

/// Why two queens attack each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    Column,
    Diagonal,
}

/// An attacking pair of rows, `first < second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    pub first: usize,
    pub second: usize,
    pub kind: ConflictKind,
}

/// Lists every pair of rows whose queens attack each other.
///
/// `columns[row]` is the column of the queen in `row`. Rows never conflict
/// with themselves, so a one-per-row layout only has column and diagonal
/// conflicts.
pub fn conflicts(columns: &[u8]) -> Vec<Conflict> {
    let mut found = Vec::new();
    for (first, &a) in columns.iter().enumerate() {
        for (offset, &b) in columns[first + 1..].iter().enumerate() {
            let second = first + 1 + offset;
            let kind = if a == b {
                ConflictKind::Column
            } else if usize::from(a.abs_diff(b)) == second - first {
                ConflictKind::Diagonal
            } else {
                continue;
            };
            found.push(Conflict {
                first,
                second,
                kind,
            });
        }
    }
    found
}

/// A complete placement of non-attacking queens, one per row.
///
/// The value at index `row` is the column of the queen on that row. Every
/// `Placement` built through [`Placement::new`] or parsed from text satisfies
/// the non-attack invariant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Placement(Vec<u8>);

impl Placement {
    /// The placement on the empty board.
    pub const EMPTY: Placement = Placement(Vec::new());

    /// Builds a placement, checking bounds and the non-attack invariant.
    pub fn new(columns: Vec<u8>) -> Result<Self, PlacementError> {
        let size = columns.len();
        if size > usize::from(BoardSize::MAX) {
            return Err(PlacementError::TooManyRows(size));
        }
        if let Some((row, &col)) = columns
            .iter()
            .enumerate()
            .find(|&(_, &col)| usize::from(col) >= size)
        {
            return Err(PlacementError::ColumnOutOfRange { row, col, size });
        }
        if let Some(conflict) = conflicts(&columns).first() {
            return Err(match conflict.kind {
                ConflictKind::Column => {
                    PlacementError::SharedColumn(conflict.first, conflict.second)
                }
                ConflictKind::Diagonal => {
                    PlacementError::SharedDiagonal(conflict.first, conflict.second)
                }
            });
        }
        Ok(Placement(columns))
    }

    /// Wraps columns that are already known to be a valid placement.
    ///
    /// The solver only ever emits non-attacking layouts, so it skips the
    /// quadratic check. Debug builds still verify it.
    ///
    /// # Panics
    ///
    /// Panics if there are more than [`BoardSize::MAX`] columns.
    pub fn from_columns_unchecked(columns: Vec<u8>) -> Self {
        assert!(
            columns.len() <= usize::from(BoardSize::MAX),
            "{} rows exceed the widest board",
            columns.len()
        );
        debug_assert!(
            conflicts(&columns).is_empty(),
            "attacking queens in {:?}",
            columns
        );
        Placement(columns)
    }

    /// Number of queens (equal to the board size).
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the empty board's placement.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The board this placement fills.
    pub fn size(&self) -> BoardSize {
        // Length is bounded by BoardSize::MAX at construction.
        match BoardSize::new(self.0.len() as i64) {
            Ok(size) => size,
            Err(_) => unreachable!(),
        }
    }

    /// Column of the queen in `row`.
    #[inline]
    pub fn column(&self, row: usize) -> Option<u8> {
        self.0.get(row).copied()
    }

    /// All columns, indexed by row.
    #[inline]
    pub fn columns(&self) -> &[u8] {
        &self.0
    }

    /// Iterates over the queens' cells in row order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(row, &col)| Cell::new(row as u8, col))
    }

    /// Returns true if a queen stands on `cell`.
    pub fn queen_at(&self, cell: Cell) -> bool {
        self.column(usize::from(cell.row)) == Some(cell.col)
    }

    /// The queens' squares in algebraic notation, e.g. `b1 d2 a3 c4`.
    pub fn to_algebraic(&self) -> String {
        self.cells()
            .map(|cell| cell.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl TryFrom<Vec<u8>> for Placement {
    type Error = PlacementError;

    fn try_from(columns: Vec<u8>) -> Result<Self, Self::Error> {
        Placement::new(columns)
    }
}

impl From<Placement> for Vec<u8> {
    fn from(placement: Placement) -> Self {
        placement.0
    }
}

impl FromStr for Placement {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Placement::EMPTY);
        }
        let columns = s
            .split(',')
            .map(|token| {
                let token = token.trim();
                token.parse::<u8>().map_err(|_| {
                    PlacementError::InvalidNotation(format!("'{}' is not a column", token))
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        Placement::new(columns)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, col) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", col)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_accepts_valid_placement() {
        let p = Placement::new(vec![1, 3, 0, 2]).unwrap();
        assert_eq!(p.len(), 4);
        assert_eq!(p.column(1), Some(3));
        assert_eq!(p.column(4), None);
        assert!(p.queen_at(Cell::new(2, 0)));
        assert!(!p.queen_at(Cell::new(2, 1)));
    }

    #[test]
    fn new_rejects_attacks() {
        assert_eq!(
            Placement::new(vec![0, 2, 0]),
            Err(PlacementError::SharedColumn(0, 2))
        );
        assert_eq!(
            Placement::new(vec![0, 1, 3, 2]),
            Err(PlacementError::SharedDiagonal(0, 1))
        );
        assert_eq!(
            Placement::new(vec![0, 5]),
            Err(PlacementError::ColumnOutOfRange {
                row: 1,
                col: 5,
                size: 2
            })
        );
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(Placement::new(vec![]), Ok(Placement::EMPTY));
        assert!(Placement::EMPTY.is_empty());
        assert_eq!(Placement::EMPTY.size().get(), 0);
        assert!(Placement::new(vec![0]).is_ok());
    }

    #[test]
    fn unchecked_keeps_valid_columns() {
        let p = Placement::from_columns_unchecked(vec![2, 0, 3, 1]);
        assert_eq!(p.size().get(), 4);
        assert_eq!(p, Placement::new(vec![2, 0, 3, 1]).unwrap());
    }

    #[test]
    #[should_panic(expected = "exceed the widest board")]
    fn unchecked_rejects_too_many_rows() {
        let _ = Placement::from_columns_unchecked(vec![0; 65]);
    }

    #[test]
    fn notation() {
        let p: Placement = "1,3,0,2".parse().unwrap();
        assert_eq!(p.columns(), &[1, 3, 0, 2]);
        assert_eq!(p.to_string(), "1,3,0,2");
        assert_eq!(p.to_algebraic(), "b1 d2 a3 c4");
        assert_eq!(" 1, 3 ,0,2 ".parse::<Placement>(), Ok(p));
        assert_eq!("".parse::<Placement>(), Ok(Placement::EMPTY));
        assert!(matches!(
            "1,x".parse::<Placement>(),
            Err(PlacementError::InvalidNotation(_))
        ));
        assert_eq!(
            "0,1".parse::<Placement>(),
            Err(PlacementError::SharedDiagonal(0, 1))
        );
    }

    #[test]
    fn serde_as_column_array() {
        let p = Placement::new(vec![2, 0, 3, 1]).unwrap();
        assert_eq!(serde_json::to_string(&p).unwrap(), "[2,0,3,1]");
        let back: Placement = serde_json::from_str("[2,0,3,1]").unwrap();
        assert_eq!(back, p);
        assert!(serde_json::from_str::<Placement>("[0,1]").is_err());
    }

    #[test]
    fn conflicts_reports_every_pair() {
        let found = conflicts(&[0, 1, 2]);
        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|c| c.kind == ConflictKind::Diagonal));
        assert_eq!(
            conflicts(&[3, 3]),
            vec![Conflict {
                first: 0,
                second: 1,
                kind: ConflictKind::Column
            }]
        );
    }

    fn is_safe(columns: &[u8]) -> bool {
        for i in 0..columns.len() {
            for j in 0..columns.len() {
                if i == j {
                    continue;
                }
                let dr = i.abs_diff(j);
                let dc = usize::from(columns[i].abs_diff(columns[j]));
                if columns[i] == columns[j] || dr == dc {
                    return false;
                }
            }
        }
        true
    }

    proptest! {
        #[test]
        fn conflicts_match_pairwise_check(columns in prop::collection::vec(0u8..8, 0..=8)) {
            prop_assert_eq!(conflicts(&columns).is_empty(), is_safe(&columns));
        }

        #[test]
        fn new_accepts_exactly_safe_layouts(
            columns in Just((0u8..6).collect::<Vec<_>>()).prop_shuffle()
        ) {
            prop_assert_eq!(Placement::new(columns.clone()).is_ok(), is_safe(&columns));
        }
    }
}
