//! Explorer command parsing.
//!
//! Commands are single lines of whitespace-separated words:
//!
//! - `solve <n>` - select a board and show its first solution
//! - `first` / `prev` / `next` / `last` - move between solutions
//! - `goto <k>` - jump to solution `k` (1-based)
//! - `step <s>` - show rows `1..=s+1` only; `step -1` shows everything
//! - `attacks on|off` - toggle attacked-square highlighting
//! - `show` - redraw the current board
//! - `help` - list commands
//! - `quit` - leave the session

use crate::explorer::Direction;
use thiserror::Error;

/// Errors in a command line that was recognised but malformed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("'{0}' expects an argument")]
    MissingArgument(&'static str),

    #[error("invalid argument for '{command}': {value}")]
    InvalidArgument { command: &'static str, value: String },
}

/// A parsed explorer command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerCommand {
    /// Select a board size.
    Solve(i64),
    /// Move within the solutions.
    Navigate(Direction),
    /// Jump to a 1-based solution index.
    Goto(i64),
    /// Show queens up to a zero-based row; negative shows all.
    Step(i64),
    /// Turn attack highlighting on or off.
    Attacks(bool),
    /// Redraw.
    Show,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
    /// Blank line.
    Empty,
    /// Unknown command (kept verbatim for the error message).
    Unknown(String),
}

impl ExplorerCommand {
    /// Parse a command line.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        let mut parts = input.split_whitespace();

        let cmd = parts.next().unwrap_or("");

        match cmd.to_ascii_lowercase().as_str() {
            "solve" => Ok(ExplorerCommand::Solve(parse_int("solve", parts.next())?)),
            "first" => Ok(ExplorerCommand::Navigate(Direction::First)),
            "prev" | "p" => Ok(ExplorerCommand::Navigate(Direction::Prev)),
            "next" | "n" => Ok(ExplorerCommand::Navigate(Direction::Next)),
            "last" => Ok(ExplorerCommand::Navigate(Direction::Last)),
            "goto" => Ok(ExplorerCommand::Goto(parse_int("goto", parts.next())?)),
            "step" => Ok(ExplorerCommand::Step(parse_int("step", parts.next())?)),
            "attacks" => Self::parse_attacks(parts.next()),
            "show" => Ok(ExplorerCommand::Show),
            "help" | "?" => Ok(ExplorerCommand::Help),
            "quit" | "exit" | "q" => Ok(ExplorerCommand::Quit),
            "" => Ok(ExplorerCommand::Empty),
            _ => Ok(ExplorerCommand::Unknown(input.to_string())),
        }
    }

    fn parse_attacks(arg: Option<&str>) -> Result<Self, CommandError> {
        match arg {
            Some("on") | Some("true") | Some("1") => Ok(ExplorerCommand::Attacks(true)),
            Some("off") | Some("false") | Some("0") => Ok(ExplorerCommand::Attacks(false)),
            Some(other) => Err(CommandError::InvalidArgument {
                command: "attacks",
                value: other.to_string(),
            }),
            None => Err(CommandError::MissingArgument("attacks")),
        }
    }
}

fn parse_int(command: &'static str, arg: Option<&str>) -> Result<i64, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument(command))?;
    arg.parse().map_err(|_| CommandError::InvalidArgument {
        command,
        value: arg.to_string(),
    })
}

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands:
  solve <n>        select an n x n board and show solution 1
  first | prev | next | last
                   move between solutions
  goto <k>         show solution k
  step <s>         show the queens of rows 1..=s+1 (-1 shows all)
  attacks on|off   highlight attacked squares
  show             redraw the board
  help             show this list
  quit             leave the explorer";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_solve() {
        assert_eq!(ExplorerCommand::parse("solve 8"), Ok(ExplorerCommand::Solve(8)));
        assert_eq!(ExplorerCommand::parse("  SOLVE  6 "), Ok(ExplorerCommand::Solve(6)));
        assert_eq!(ExplorerCommand::parse("solve -3"), Ok(ExplorerCommand::Solve(-3)));
        assert_eq!(
            ExplorerCommand::parse("solve"),
            Err(CommandError::MissingArgument("solve"))
        );
        assert_eq!(
            ExplorerCommand::parse("solve big"),
            Err(CommandError::InvalidArgument {
                command: "solve",
                value: "big".to_string()
            })
        );
    }

    #[test]
    fn parse_navigation() {
        assert_eq!(
            ExplorerCommand::parse("first"),
            Ok(ExplorerCommand::Navigate(Direction::First))
        );
        assert_eq!(
            ExplorerCommand::parse("prev"),
            Ok(ExplorerCommand::Navigate(Direction::Prev))
        );
        assert_eq!(
            ExplorerCommand::parse("next"),
            Ok(ExplorerCommand::Navigate(Direction::Next))
        );
        assert_eq!(
            ExplorerCommand::parse("n"),
            Ok(ExplorerCommand::Navigate(Direction::Next))
        );
        assert_eq!(
            ExplorerCommand::parse("last"),
            Ok(ExplorerCommand::Navigate(Direction::Last))
        );
        assert_eq!(ExplorerCommand::parse("goto 12"), Ok(ExplorerCommand::Goto(12)));
    }

    #[test]
    fn parse_step_and_attacks() {
        assert_eq!(ExplorerCommand::parse("step 3"), Ok(ExplorerCommand::Step(3)));
        assert_eq!(ExplorerCommand::parse("step -1"), Ok(ExplorerCommand::Step(-1)));
        assert_eq!(
            ExplorerCommand::parse("attacks on"),
            Ok(ExplorerCommand::Attacks(true))
        );
        assert_eq!(
            ExplorerCommand::parse("attacks off"),
            Ok(ExplorerCommand::Attacks(false))
        );
        assert_eq!(
            ExplorerCommand::parse("attacks"),
            Err(CommandError::MissingArgument("attacks"))
        );
        assert!(matches!(
            ExplorerCommand::parse("attacks maybe"),
            Err(CommandError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn parse_misc() {
        assert_eq!(ExplorerCommand::parse("show"), Ok(ExplorerCommand::Show));
        assert_eq!(ExplorerCommand::parse("help"), Ok(ExplorerCommand::Help));
        assert_eq!(ExplorerCommand::parse("quit"), Ok(ExplorerCommand::Quit));
        assert_eq!(ExplorerCommand::parse("   "), Ok(ExplorerCommand::Empty));
        assert_eq!(
            ExplorerCommand::parse("castle kingside"),
            Ok(ExplorerCommand::Unknown("castle kingside".to_string()))
        );
    }
}
