//! Solution counting without materialising placements.
//!
//! Counting walks the same tree as [`crate::solve`] but only tallies the
//! leaves, so it stays usable for boards whose solution lists would not fit
//! in memory. Known totals make it a quick check of the search itself.

use crate::search::SearchState;
use crate::ColumnMask;
use queens_core::BoardSize;

/// Counts the solutions for the given board size.
pub fn count(size: BoardSize) -> u64 {
    let full = ColumnMask::full(size);
    count_from(SearchState::EMPTY, full)
}

/// Counts with divide: the number of solutions for each first-row column.
///
/// Only columns that start at least one solution are listed, in ascending
/// order. On any non-empty board the counts sum to [`count`]. The empty board
/// has no first row, so its split is empty while [`count`] is 1.
pub fn count_divide(size: BoardSize) -> Vec<(u8, u64)> {
    let full = ColumnMask::full(size);
    let mut results = Vec::with_capacity(size.get());

    for col in SearchState::EMPTY.available(full) {
        let nodes = count_from(SearchState::EMPTY.place(col, full), full);
        if nodes > 0 {
            results.push((col, nodes));
        }
    }

    results
}

fn count_from(state: SearchState, full: ColumnMask) -> u64 {
    // Every column taken means every row has its queen.
    if state.cols == full {
        return 1;
    }

    let mut nodes = 0u64;
    for col in state.available(full) {
        nodes += count_from(state.place(col, full), full);
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: i64) -> BoardSize {
        BoardSize::new(n).unwrap()
    }

    #[test]
    fn count_small_boards() {
        let expected = [1, 1, 0, 0, 2, 10, 4, 40, 92];
        for (n, &total) in expected.iter().enumerate() {
            assert_eq!(count(size(n as i64)), total, "n = {}", n);
        }
    }

    #[test]
    fn count_ten() {
        assert_eq!(count(size(10)), 724);
    }

    // Larger boards are slow in debug builds
    #[test]
    #[ignore]
    fn count_twelve() {
        assert_eq!(count(size(12)), 14200);
    }

    #[test]
    fn count_divide_empty_board() {
        assert!(count_divide(size(0)).is_empty());
        assert_eq!(count(size(0)), 1);
    }

    #[test]
    fn count_divide_sums_to_count() {
        for n in 1..=8 {
            let total: u64 = count_divide(size(n)).iter().map(|&(_, nodes)| nodes).sum();
            assert_eq!(total, count(size(n)), "n = {}", n);
        }
    }

    #[test]
    fn count_divide_eight() {
        let results = count_divide(size(8));
        assert_eq!(results.len(), 8);
        assert_eq!(results[0], (0, 4));
        let total: u64 = results.iter().map(|(_, n)| n).sum();
        assert_eq!(total, 92);
    }

    #[test]
    fn count_divide_skips_dead_columns() {
        assert_eq!(count_divide(size(4)), vec![(1, 1), (2, 1)]);
        assert!(count_divide(size(3)).is_empty());
        assert!(count_divide(size(0)).is_empty());
    }
}
