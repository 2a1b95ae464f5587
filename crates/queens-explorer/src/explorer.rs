//! Navigation state for browsing solutions.
//!
//! The [`Explorer`] tracks which board is selected, which solution is on
//! screen, how many of its queens are shown, and whether attacked squares are
//! highlighted. Rendering works from the [`View`] snapshot it hands out.

use crate::cache::{SolutionCache, SolvedBoard};
use queens_core::{BoardSize, BoardSizeError, Placement};
use queens_solver::AttackMap;
use std::time::Duration;
use thiserror::Error;

/// Errors returned by explorer operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExplorerError {
    #[error(transparent)]
    InvalidSize(#[from] BoardSizeError),

    #[error("board size {size} is outside the explorable range {min}..={max}")]
    SizeOutOfRange {
        size: BoardSize,
        min: BoardSize,
        max: BoardSize,
    },

    #[error("invalid size range: minimum {min} is larger than maximum {max}")]
    InvalidRange { min: BoardSize, max: BoardSize },

    #[error("no board selected")]
    NoBoard,
}

/// The board sizes the explorer accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeRange {
    min: BoardSize,
    max: BoardSize,
}

impl SizeRange {
    /// Creates a range, rejecting `min > max`.
    pub fn new(min: BoardSize, max: BoardSize) -> Result<Self, ExplorerError> {
        if min > max {
            return Err(ExplorerError::InvalidRange { min, max });
        }
        Ok(SizeRange { min, max })
    }

    /// Smallest accepted size.
    pub fn min(&self) -> BoardSize {
        self.min
    }

    /// Largest accepted size.
    pub fn max(&self) -> BoardSize {
        self.max
    }

    /// Returns true if `size` is inside the range.
    pub fn contains(&self, size: BoardSize) -> bool {
        self.min <= size && size <= self.max
    }

    /// Validates a raw size against the range.
    pub fn check(&self, n: i64) -> Result<BoardSize, ExplorerError> {
        let size = BoardSize::new(n)?;
        if !self.contains(size) {
            return Err(ExplorerError::SizeOutOfRange {
                size,
                min: self.min,
                max: self.max,
            });
        }
        Ok(size)
    }
}

impl Default for SizeRange {
    /// Boards from 5x5 to 8x8, the sizes that are pleasant to look at.
    fn default() -> Self {
        SizeRange {
            min: BoardSize::FIVE,
            max: BoardSize::EIGHT,
        }
    }
}

/// Where to move within the solution list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    First,
    Prev,
    Next,
    Last,
}

/// A snapshot of what should be on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Selected board size.
    pub size: BoardSize,
    /// 1-based index of the shown solution.
    pub index: usize,
    /// Number of solutions of the board.
    pub total: usize,
    /// The shown solution, `None` when the board has none.
    pub placement: Option<Placement>,
    /// Row being stepped to, `None` when the whole solution is shown.
    pub step: Option<usize>,
    /// Number of rows whose queens are drawn.
    pub visible_rows: usize,
    /// Highlighted squares, when attack display is on.
    pub attacks: Option<AttackMap>,
    /// Time the solver needed for this board.
    pub elapsed: Duration,
}

impl View {
    /// Heading for the board, e.g. `8-Queens — Solution 1 / 92`.
    pub fn title(&self) -> String {
        let n = self.size;
        if self.placement.is_none() {
            return format!("No solutions for {}×{}", n, n);
        }
        match self.step {
            Some(row) => format!("{}-Queens — Step {} / {}", n, row + 1, n),
            None => format!("{}-Queens — Solution {} / {}", n, self.index, self.total),
        }
    }
}

/// Interactive browser over the solutions of the explorable board sizes.
#[derive(Debug)]
pub struct Explorer {
    cache: SolutionCache,
    range: SizeRange,
    current: Option<BoardSize>,
    index: usize,
    step: Option<usize>,
    show_attacks: bool,
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new(SizeRange::default())
    }
}

impl Explorer {
    /// Creates an explorer with nothing selected.
    pub fn new(range: SizeRange) -> Self {
        Explorer {
            cache: SolutionCache::new(),
            range,
            current: None,
            index: 1,
            step: None,
            show_attacks: false,
        }
    }

    /// Accepted board sizes.
    pub fn range(&self) -> SizeRange {
        self.range
    }

    /// Solution cache backing this explorer.
    pub fn cache(&self) -> &SolutionCache {
        &self.cache
    }

    /// Currently selected board, if any.
    pub fn current_size(&self) -> Option<BoardSize> {
        self.current
    }

    /// 1-based index of the shown solution.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Row being stepped to, if stepping.
    pub fn step(&self) -> Option<usize> {
        self.step
    }

    /// Whether attacked squares are highlighted.
    pub fn show_attacks(&self) -> bool {
        self.show_attacks
    }

    /// Selects a board, solving it if needed, and shows its first solution.
    pub fn select(&mut self, n: i64) -> Result<&SolvedBoard, ExplorerError> {
        let size = self.range.check(n)?;
        self.current = Some(size);
        self.index = 1;
        self.step = None;
        Ok(self.cache.get_or_solve(size))
    }

    /// The selected board's solutions.
    pub fn board(&self) -> Result<&SolvedBoard, ExplorerError> {
        let size = self.current.ok_or(ExplorerError::NoBoard)?;
        self.cache.get(size).ok_or(ExplorerError::NoBoard)
    }

    /// Moves to another solution and leaves step mode. Returns the new index.
    ///
    /// Moving past either end stays on the first or last solution.
    pub fn navigate(&mut self, direction: Direction) -> Result<usize, ExplorerError> {
        let total = self.board()?.len();
        if total > 0 {
            self.index = match direction {
                Direction::First => 1,
                Direction::Prev => self.index.saturating_sub(1).max(1),
                Direction::Next => (self.index + 1).min(total),
                Direction::Last => total,
            };
        }
        self.step = None;
        Ok(self.index)
    }

    /// Jumps to the 1-based solution `k`, clamped to the solution list.
    pub fn goto(&mut self, k: i64) -> Result<usize, ExplorerError> {
        let total = self.board()?.len();
        if total > 0 {
            let k = usize::try_from(k.max(1)).unwrap_or(usize::MAX);
            self.index = k.min(total);
        }
        self.step = None;
        Ok(self.index)
    }

    /// Shows the queens of rows `0..=s` only; a negative `s` shows the whole
    /// solution again. Steps past the last row stop on the last row.
    pub fn set_step(&mut self, s: i64) -> Result<Option<usize>, ExplorerError> {
        let n = self.board()?.size.get();
        self.step = if s < 0 || n == 0 {
            None
        } else {
            let row = usize::try_from(s).unwrap_or(usize::MAX);
            Some(row.min(n - 1))
        };
        Ok(self.step)
    }

    /// Turns attacked-square highlighting on or off.
    pub fn set_show_attacks(&mut self, show: bool) {
        self.show_attacks = show;
    }

    /// Snapshot of the current screen.
    pub fn view(&self) -> Result<View, ExplorerError> {
        let board = self.board()?;
        let size = board.size;
        let placement = board.get(self.index).cloned();
        let step = placement.as_ref().and(self.step);
        let visible_rows = step.map_or(size.get(), |row| row + 1);
        let attacks = match &placement {
            Some(p) if self.show_attacks => Some(AttackMap::new(p, visible_rows)),
            _ => None,
        };

        Ok(View {
            size,
            index: self.index,
            total: board.len(),
            placement,
            step,
            visible_rows,
            attacks,
            elapsed: board.elapsed,
        })
    }
}
