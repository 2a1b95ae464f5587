//! Core types for the N-Queens problem.
//!
//! This crate provides the data model shared by the solver and the explorer:
//! - [`BoardSize`] for the side length `N` of the board
//! - [`Cell`] for board coordinates, with algebraic notation
//! - [`Placement`] for a complete set of non-attacking queens
//! - [`conflicts`] for checking arbitrary one-per-row layouts

mod board;
mod placement;

pub use board::{BoardSize, BoardSizeError, Cell};
pub use placement::{conflicts, Conflict, ConflictKind, Placement, PlacementError};
