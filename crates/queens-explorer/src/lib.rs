//! Interactive explorer for N-Queens solutions.
//!
//! This crate is the presentation side of the solver. It never changes how
//! solutions are found; it caches them, walks through them and turns them
//! into text:
//! - [`SolutionCache`] - each board size solved once, with its solve time
//! - [`Explorer`] - solution navigation, step-by-step placement and attack
//!   highlighting, exposed as a [`View`] snapshot
//! - [`render`] and [`format`] - ASCII boards, markdown tables and summaries
//! - [`export`] - JSON reports
//! - [`ExplorerCommand`] and [`run_session`] - a line-based command loop
//!
//! # Example
//!
//! ```
//! use queens_explorer::{render::render_view, Direction, Explorer};
//!
//! let mut explorer = Explorer::default();
//! explorer.select(8).unwrap();
//! explorer.navigate(Direction::Last).unwrap();
//! let view = explorer.view().unwrap();
//! assert_eq!(view.title(), "8-Queens — Solution 92 / 92");
//! println!("{}", render_view(&view));
//! ```

mod cache;
mod command;
pub mod export;
mod explorer;
pub mod format;
pub mod render;
mod session;

pub use cache::{SolutionCache, SolvedBoard};
pub use command::{CommandError, ExplorerCommand, HELP};
pub use explorer::{Direction, Explorer, ExplorerError, SizeRange, View};
pub use session::{apply, run_session, Flow, PROMPT};
