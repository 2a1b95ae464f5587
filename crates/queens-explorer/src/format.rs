//! Markdown and plain-text reports.

use crate::cache::SolvedBoard;
use crate::render::ascii_board;
use queens_core::{BoardSize, Cell, Placement};
use serde::Serialize;
use std::time::Duration;

/// Name of the search shown in statistics.
pub const ALGORITHM: &str = "Bitmask backtracking (column and diagonal masks)";

const RULE_WIDTH: usize = 50;

/// One line of the batch comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub size: BoardSize,
    pub count: usize,
    pub elapsed: Duration,
}

impl From<&SolvedBoard> for SummaryRow {
    fn from(board: &SolvedBoard) -> Self {
        SummaryRow {
            size: board.size,
            count: board.len(),
            elapsed: board.elapsed,
        }
    }
}

fn square_name(cell: Cell) -> String {
    cell.to_algebraic()
        .unwrap_or_else(|| format!("({}, {})", cell.row + 1, cell.col + 1))
}

/// Markdown table of one solution with one-based rows and columns.
pub fn solution_table(placement: &Placement, index: usize, total: usize) -> String {
    let mut lines = vec![
        format!("### Solution {} of {}\n", index, total),
        "| Row | Column | Square |".to_string(),
        "|:---:|:------:|:------:|".to_string(),
    ];
    for cell in placement.cells() {
        lines.push(format!(
            "| {} | {} | {} |",
            u32::from(cell.row) + 1,
            u32::from(cell.col) + 1,
            square_name(cell)
        ));
    }
    lines.join("\n")
}

/// Describes placing the queen of `step` (a zero-based row).
///
/// Returns `None` if the placement has no such row.
pub fn step_text(placement: &Placement, step: usize) -> Option<String> {
    let n = placement.len();
    let col = placement.column(step)?;
    let cell = Cell::new(step as u8, col);

    let mut lines = vec![
        format!("### Step {} of {}\n", step + 1, n),
        format!(
            "Place queen on **row {}**, **column {}** (square {})\n",
            step + 1,
            u32::from(col) + 1,
            square_name(cell)
        ),
    ];
    if step + 1 < n {
        lines.push(format!("*{} queens remaining…*", n - step - 1));
    } else {
        lines.push("**All queens placed — solution complete!**".to_string());
    }
    Some(lines.join("\n"))
}

/// Markdown statistics block for a solved board.
pub fn stats_text(size: BoardSize, count: usize, elapsed: Duration) -> String {
    format!(
        "### Statistics\n\
         - **Board size:** {n} × {n}\n\
         - **Total solutions:** {count}\n\
         - **Solve time:** {ms:.2} ms\n\
         - **Algorithm:** {ALGORITHM}\n",
        n = size,
        count = count,
        ms = elapsed.as_secs_f64() * 1000.0,
    )
}

/// Banner with count and timing followed by up to `examples` boards.
pub fn summary_report(board: &SolvedBoard, examples: usize) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = vec![
        String::new(),
        rule.clone(),
        format!(
            "  N = {}  |  {} solutions found  |  {:.4}s",
            board.size,
            board.len(),
            board.elapsed.as_secs_f64()
        ),
        rule,
    ];

    let shown = examples.min(board.len());
    for (i, placement) in board.placements.iter().take(shown).enumerate() {
        out.push(String::new());
        out.push(format!("  Solution {}:", i + 1));
        out.push(ascii_board(board.size, placement));
    }

    if board.len() > shown {
        out.push(String::new());
        out.push(format!("  ... and {} more solutions", board.len() - shown));
    }
    out.join("\n")
}

/// Aligned N / Solutions / Time table over several boards.
pub fn comparison_table(rows: &[SummaryRow]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = vec![
        rule.clone(),
        "  Summary".to_string(),
        rule,
        format!("  {:>3}  {:>10}  {:>10}", "N", "Solutions", "Time (s)"),
        format!("  {:>3}  {:>10}  {:>10}", "---", "-".repeat(10), "-".repeat(10)),
    ];
    for row in rows {
        out.push(format!(
            "  {:>3}  {:>10}  {:>10.6}",
            row.size.get(),
            row.count,
            row.elapsed.as_secs_f64()
        ));
    }
    out.join("\n")
}
