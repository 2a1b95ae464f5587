//! Per-board solution cache.
//!
//! The solver keeps no state between calls, so the explorer owns the memo:
//! each board size is solved once and the placements are shared from then on.

use queens_core::{BoardSize, Placement};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// The solutions of one board size together with the time it took to find
/// them.
#[derive(Debug, Clone)]
pub struct SolvedBoard {
    /// Board size these solutions belong to.
    pub size: BoardSize,
    /// Every solution, in solver order.
    pub placements: Arc<[Placement]>,
    /// Wall-clock time of the solve that filled this entry.
    pub elapsed: Duration,
}

impl SolvedBoard {
    /// Runs the solver and records how long it took.
    pub fn solve(size: BoardSize) -> Self {
        let start = Instant::now();
        let placements = queens_solver::solve(size);
        let elapsed = start.elapsed();

        tracing::debug!(
            size = size.get(),
            solutions = placements.len(),
            elapsed_us = elapsed.as_micros() as u64,
            "Solved board"
        );

        SolvedBoard {
            size,
            placements: placements.into(),
            elapsed,
        }
    }

    /// Number of solutions.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns true if the board has no solution.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Solution at 1-based `index`, as shown to users.
    pub fn get(&self, index: usize) -> Option<&Placement> {
        index.checked_sub(1).and_then(|i| self.placements.get(i))
    }
}

/// Map from board size to its solved board.
#[derive(Debug, Default)]
pub struct SolutionCache {
    entries: HashMap<BoardSize, SolvedBoard>,
}

impl SolutionCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached solutions for `size`, solving on first use.
    pub fn get_or_solve(&mut self, size: BoardSize) -> &SolvedBoard {
        if self.entries.contains_key(&size) {
            tracing::trace!(size = size.get(), "Solution cache hit");
        } else {
            tracing::debug!(size = size.get(), "Solution cache miss");
        }
        self.entries
            .entry(size)
            .or_insert_with(|| SolvedBoard::solve(size))
    }

    /// Returns the cached entry without solving.
    pub fn get(&self, size: BoardSize) -> Option<&SolvedBoard> {
        self.entries.get(&size)
    }

    /// Returns true if `size` has been solved.
    pub fn contains(&self, size: BoardSize) -> bool {
        self.entries.contains_key(&size)
    }

    /// Number of cached board sizes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been solved yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every cached entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: i64) -> BoardSize {
        BoardSize::new(n).unwrap()
    }

    #[test]
    fn solves_once_per_size() {
        let mut cache = SolutionCache::new();
        assert!(cache.is_empty());

        let first = Arc::clone(&cache.get_or_solve(size(6)).placements);
        let second = Arc::clone(&cache.get_or_solve(size(6)).placements);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 4);
        assert_eq!(cache.len(), 1);

        cache.get_or_solve(size(5));
        assert!(cache.contains(size(5)));
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.get(size(6)).is_none());
    }

    #[test]
    fn solved_board_is_one_based() {
        let board = SolvedBoard::solve(size(4));
        assert_eq!(board.len(), 2);
        assert_eq!(board.get(0), None);
        assert_eq!(board.get(1).map(|p| p.columns()), Some(&[1, 3, 0, 2][..]));
        assert_eq!(board.get(2).map(|p| p.columns()), Some(&[2, 0, 3, 1][..]));
        assert_eq!(board.get(3), None);
    }

    #[test]
    fn unsolvable_board_is_empty() {
        let board = SolvedBoard::solve(size(3));
        assert!(board.is_empty());
        assert_eq!(board.get(1), None);
    }
}
