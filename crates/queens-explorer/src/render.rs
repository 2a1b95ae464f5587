//! Text rendering of boards.
//!
//! Two layouts are provided: [`ascii_board`], the plain numbered grid used in
//! batch summaries, and [`render_view`], the labelled board of the
//! interactive explorer with step and attack highlighting.

use crate::explorer::View;
use queens_core::{BoardSize, Cell, Placement};
use std::fmt;

/// Marker for a visible queen.
pub const QUEEN: char = 'Q';
/// Marker for a square attacked by a visible queen.
pub const ATTACKED: char = 'x';
/// Marker for an unattacked square on a row whose queen is not shown yet.
pub const SAFE: char = 'o';
/// Marker for any other square.
pub const EMPTY: char = '.';

/// Renders a placement as a numbered grid.
///
/// ```
/// use queens_core::{BoardSize, Placement};
/// use queens_explorer::render::ascii_board;
///
/// let placement: Placement = "1,3,0,2".parse().unwrap();
/// let board = ascii_board(BoardSize::new(4).unwrap(), &placement);
/// assert_eq!(board.lines().nth(2), Some("0 | .  Q  .  . |"));
/// ```
pub fn ascii_board(size: BoardSize, placement: &Placement) -> String {
    let n = size.get();
    let header: Vec<String> = (0..n).map(|c| c.to_string()).collect();
    let border = format!("  +{}+", "---".repeat(n));

    let mut lines = Vec::with_capacity(n + 3);
    lines.push(format!("    {}", header.join("  ")));
    lines.push(border.clone());
    for (row, &col) in placement.columns().iter().enumerate() {
        let mut line = format!("{} |", row);
        for c in 0..n {
            line.push_str(if c == usize::from(col) { " Q " } else { " . " });
        }
        line.push('|');
        lines.push(line);
    }
    lines.push(border);
    lines.join("\n")
}

/// Renders the explorer's current screen: title, ranked rows and file letters.
///
/// Row 0 is drawn first and labelled rank 1. Only the queens of the visible
/// rows are drawn; with attack display on, squares they attack are marked
/// [`ATTACKED`] and the remaining squares of rows still waiting for their
/// queen are marked [`SAFE`].
pub fn render_view(view: &View) -> String {
    BoardView(view).to_string()
}

/// [`Display`](fmt::Display) adapter drawing a [`View`] the way
/// [`render_view`] does, without trailing whitespace.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a>(pub &'a View);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        let n = view.size.get();
        let width = n.to_string().len();

        write!(f, "{}", view.title())?;
        for row in 0..n {
            write!(f, "\n{:>width$} |", row + 1, width = width)?;
            for col in 0..n {
                let cell = Cell::new(row as u8, col as u8);
                write!(f, " {} ", marker(view, cell))?;
            }
            write!(f, "|")?;
        }

        if n > 0 {
            let files: Vec<String> = (0..n)
                .map(|col| Cell::new(0, col as u8).file_char().unwrap_or('?').to_string())
                .collect();
            write!(f, "\n{:width$}   {}", "", files.join("  "), width = width)?;
        }
        Ok(())
    }
}

fn marker(view: &View, cell: Cell) -> char {
    let Some(placement) = &view.placement else {
        return EMPTY;
    };
    let row = usize::from(cell.row);
    let visible = row < view.visible_rows;
    if visible && placement.queen_at(cell) {
        return QUEEN;
    }
    match &view.attacks {
        Some(attacks) if attacks.is_attacked(cell) => ATTACKED,
        Some(_) if !visible => SAFE,
        _ => EMPTY,
    }
}
