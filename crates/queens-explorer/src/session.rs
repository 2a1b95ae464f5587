//! Line-oriented explorer session.
//!
//! Reads commands from any `BufRead`, applies them to an [`Explorer`], and
//! writes the redrawn board to any `Write`. Bad input is reported and the
//! session continues; only I/O failures end it early.

use crate::command::{ExplorerCommand, HELP};
use crate::explorer::Explorer;
use crate::format::{solution_table, stats_text, step_text};
use crate::render::render_view;
use std::io::{self, BufRead, Write};

/// Prompt written before each command.
pub const PROMPT: &str = "queens> ";

/// What the session should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs commands until `quit` or end of input.
///
/// Returns the number of commands processed, blank lines excluded.
pub fn run_session<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    explorer: &mut Explorer,
) -> io::Result<usize> {
    let mut processed = 0;
    write!(writer, "{}", PROMPT)?;
    writer.flush()?;

    for line in reader.lines() {
        let line = line?;
        let flow = match ExplorerCommand::parse(&line) {
            Ok(ExplorerCommand::Empty) => Flow::Continue,
            Ok(command) => {
                processed += 1;
                tracing::debug!(?command, "Explorer command");
                apply(command, writer, explorer)?
            }
            Err(e) => {
                writeln!(writer, "error: {}", e)?;
                Flow::Continue
            }
        };

        if flow == Flow::Quit {
            break;
        }
        write!(writer, "{}", PROMPT)?;
        writer.flush()?;
    }

    Ok(processed)
}

/// Applies one command and writes its output.
pub fn apply<W: Write>(
    command: ExplorerCommand,
    writer: &mut W,
    explorer: &mut Explorer,
) -> io::Result<Flow> {
    let result = match command {
        ExplorerCommand::Solve(n) => explorer.select(n).map(|board| {
            Some(stats_text(board.size, board.len(), board.elapsed))
        }),
        ExplorerCommand::Navigate(direction) => explorer.navigate(direction).map(|_| None),
        ExplorerCommand::Goto(k) => explorer.goto(k).map(|_| None),
        ExplorerCommand::Step(s) => explorer.set_step(s).map(|_| None),
        ExplorerCommand::Attacks(on) => {
            explorer.set_show_attacks(on);
            Ok(None)
        }
        ExplorerCommand::Show => Ok(None),
        ExplorerCommand::Help => {
            writeln!(writer, "{}", HELP)?;
            return Ok(Flow::Continue);
        }
        ExplorerCommand::Quit => return Ok(Flow::Quit),
        ExplorerCommand::Empty => return Ok(Flow::Continue),
        ExplorerCommand::Unknown(input) => {
            writeln!(writer, "unknown command: {} (try 'help')", input)?;
            return Ok(Flow::Continue);
        }
    };

    match result {
        Ok(header) => {
            if let Some(header) = header {
                writeln!(writer, "{}", header)?;
            }
            redraw(writer, explorer)?;
        }
        Err(crate::ExplorerError::NoBoard) => {
            writeln!(writer, "no board selected (try 'solve 8')")?;
        }
        Err(e) => writeln!(writer, "error: {}", e)?,
    }
    Ok(Flow::Continue)
}

fn redraw<W: Write>(writer: &mut W, explorer: &Explorer) -> io::Result<()> {
    let Ok(view) = explorer.view() else {
        return writeln!(writer, "no board selected (try 'solve 8')");
    };

    writeln!(writer, "{}", render_view(&view))?;
    if let Some(placement) = &view.placement {
        writeln!(writer)?;
        let text = match view.step {
            Some(row) => step_text(placement, row),
            None => Some(solution_table(placement, view.index, view.total)),
        };
        if let Some(text) = text {
            writeln!(writer, "{}", text)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (String, usize, Explorer) {
        let mut explorer = Explorer::default();
        let mut out = Vec::new();
        let processed = run_session(Cursor::new(script), &mut out, &mut explorer).unwrap();
        (String::from_utf8(out).unwrap(), processed, explorer)
    }

    #[test]
    fn solve_and_browse() {
        let (out, processed, explorer) = run("solve 6\nnext\nnext\nprev\n");
        assert_eq!(processed, 4);
        assert_eq!(explorer.index(), 2);
        assert!(out.contains("- **Total solutions:** 4"));
        assert!(out.contains("6-Queens — Solution 1 / 4"));
        assert!(out.contains("6-Queens — Solution 3 / 4"));
        assert!(out.contains("### Solution 2 of 4"));
    }

    #[test]
    fn step_shows_step_text() {
        let (out, _, explorer) = run("solve 5\nstep 1\n");
        assert_eq!(explorer.step(), Some(1));
        assert!(out.contains("5-Queens — Step 2 / 5"));
        assert!(out.contains("### Step 2 of 5"));
        assert!(out.contains("*3 queens remaining…*"));
    }

    #[test]
    fn quit_stops_reading() {
        let (_, processed, explorer) = run("solve 7\nquit\nsolve 8\n");
        assert_eq!(processed, 2);
        assert_eq!(explorer.current_size().map(|s| s.get()), Some(7));
    }

    #[test]
    fn errors_do_not_end_session() {
        let (out, processed, explorer) = run("next\nsolve 12\nsolve x\nfly\nsolve 8\n");
        assert!(out.contains("no board selected"));
        assert!(out.contains("error: board size 12 is outside the explorable range 5..=8"));
        assert!(out.contains("error: invalid argument for 'solve': x"));
        assert!(out.contains("unknown command: fly"));
        assert_eq!(processed, 4);
        assert_eq!(explorer.current_size().map(|s| s.get()), Some(8));
    }

    #[test]
    fn attacks_before_solve_is_remembered() {
        let (out, _, explorer) = run("attacks on\nsolve 5\nstep 0\n");
        assert!(explorer.show_attacks());
        assert!(out.contains("1 | Q  x  x  x  x |"));
    }

    #[test]
    fn blank_lines_are_ignored() {
        let (out, processed, _) = run("\n\nhelp\n");
        assert_eq!(processed, 1);
        assert!(out.contains("Commands:"));
        assert_eq!(out.matches(PROMPT).count(), 4);
    }
}
