//! Bitmask backtracking solver for the N-Queens problem.
//!
//! This crate provides:
//! - [`enumerate`] / [`solve`] - every solution of an `N` x `N` board, in
//!   lexicographic order
//! - [`count`] / [`count_divide`] - solution totals without allocation
//! - [`ColumnMask`] - the 64-bit row representation used by the search
//! - [`AttackMap`] - squares attacked by the first queens of a placement
//!
//! # Architecture
//!
//! The search places one queen per row. Occupied columns and the two
//! diagonal directions are each tracked as a [`ColumnMask`], so the safe
//! squares of a row are found with a single bitwise expression and the
//! candidates are read off lowest bit first. The masks are plain `Copy`
//! values handed to each recursive call; no state is shared between calls,
//! and every function here can be invoked concurrently from any thread.
//!
//! # Example
//!
//! ```
//! use queens_core::BoardSize;
//! use queens_solver::{count, enumerate};
//!
//! let solutions = enumerate(8).unwrap();
//! assert_eq!(solutions.len(), 92);
//! assert_eq!(count(BoardSize::EIGHT), 92);
//! println!("First solution: {}", solutions[0].to_algebraic());
//! ```

mod attacks;
mod count;
mod mask;
mod search;

pub use attacks::AttackMap;
pub use count::{count, count_divide};
pub use mask::{ColumnMask, ColumnMaskIter};
pub use search::{enumerate, solve};
