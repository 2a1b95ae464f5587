//! JSON export of solved boards.
//!
//! A report holds every solution of one board size along with the solve
//! time, so results can be inspected or diffed outside the explorer.

use crate::cache::SolvedBoard;
use queens_core::{BoardSize, Placement};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// All solutions of a board size.
///
/// # File Format
///
/// ```json
/// {
///   "n": 4,
///   "count": 2,
///   "elapsed_ms": 0.012,
///   "solutions": [[1, 3, 0, 2], [2, 0, 3, 1]]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionReport {
    /// Board size.
    pub n: BoardSize,
    /// Number of solutions.
    pub count: usize,
    /// Solve time in milliseconds.
    pub elapsed_ms: f64,
    /// Every solution, each as its column list.
    pub solutions: Vec<Placement>,
}

impl From<&SolvedBoard> for SolutionReport {
    fn from(board: &SolvedBoard) -> Self {
        SolutionReport {
            n: board.size,
            count: board.len(),
            elapsed_ms: board.elapsed.as_secs_f64() * 1000.0,
            solutions: board.placements.to_vec(),
        }
    }
}

impl SolutionReport {
    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Writes `report` to `path` as JSON, replacing any existing file.
pub fn write_report(path: &Path, report: &SolutionReport) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four() -> SolutionReport {
        SolutionReport::from(&SolvedBoard::solve(BoardSize::new(4).unwrap()))
    }

    #[test]
    fn report_from_board() {
        let report = four();
        assert_eq!(report.n.get(), 4);
        assert_eq!(report.count, 2);
        assert_eq!(report.solutions.len(), 2);
    }

    #[test]
    fn report_json_shape() {
        let json: serde_json::Value = serde_json::from_str(&four().to_json().unwrap()).unwrap();
        assert_eq!(json["n"], 4);
        assert_eq!(json["count"], 2);
        assert_eq!(json["solutions"][0], serde_json::json!([1, 3, 0, 2]));
        assert!(json["elapsed_ms"].is_number());
    }

    #[test]
    fn write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("four.json");
        let report = four();
        write_report(&path, &report).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let back: SolutionReport = serde_json::from_str(&content).unwrap();
        assert_eq!(back.solutions, report.solutions);
        assert_eq!(back.n, report.n);
    }

    #[test]
    fn write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("four.json");
        assert!(matches!(
            write_report(&path, &four()),
            Err(ExportError::Io(_))
        ));
    }
}
