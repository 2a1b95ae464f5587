//! `queens` - enumerate and explore N-Queens solutions from the terminal.
//!
//! Subcommands:
//! - `summary` solves a range of board sizes and prints example boards and a
//!   timing table
//! - `solve <n>` shows one solution with statistics, optionally exporting all
//!   of them as JSON
//! - `count <n>` counts solutions without storing them
//! - `explore` starts the interactive session on stdin/stdout

mod config;

use anyhow::Context;
use clap::{Parser, Subcommand};
use config::QueensConfig;
use queens_core::BoardSize;
use queens_explorer::export::{write_report, SolutionReport};
use queens_explorer::format::{
    comparison_table, solution_table, stats_text, step_text, summary_report, SummaryRow,
};
use queens_explorer::render::render_view;
use queens_explorer::{
    apply, run_session, Explorer, ExplorerCommand, SizeRange, SolutionCache, View, HELP,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::Level;

/// Boards above this size produce solution lists too large to show eagerly.
const LARGE_BOARD: usize = 12;

#[derive(Parser)]
#[command(name = "queens")]
#[command(version, about = "Enumerate and explore N-Queens solutions")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = QueensConfig::DEFAULT_PATH)]
    config: PathBuf,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a range of board sizes and print a summary
    Summary {
        /// First board size (defaults to the config value)
        #[arg(long)]
        from: Option<i64>,
        /// Last board size (defaults to the config value)
        #[arg(long)]
        to: Option<i64>,
        /// Example boards to print per size
        #[arg(short, long)]
        examples: Option<usize>,
    },
    /// Show one solution of an n x n board
    Solve {
        /// Board size
        #[arg(allow_negative_numbers = true)]
        n: i64,
        /// Solution to show (1-based)
        #[arg(short, long, default_value_t = 1)]
        index: i64,
        /// Highlight attacked squares
        #[arg(short, long)]
        attacks: bool,
        /// Only show the queens of rows 1..=step+1
        #[arg(short, long, allow_negative_numbers = true)]
        step: Option<i64>,
        /// Write every solution to this JSON file
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Count the solutions of an n x n board
    Count {
        /// Board size
        #[arg(allow_negative_numbers = true)]
        n: i64,
        /// Also list the count for each first-row column
        #[arg(short, long)]
        divide: bool,
    },
    /// Browse solutions interactively
    Explore,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    let config = QueensConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    match cli.command {
        Commands::Summary { from, to, examples } => {
            let range = summary_range(&config, from, to)?;
            let examples = examples.unwrap_or(config.summary.examples);
            println!("{}", summary_text(range, examples)?);
        }
        Commands::Solve {
            n,
            index,
            attacks,
            step,
            json,
        } => println!("{}", solve_text(n, index, attacks, step, json.as_deref())?),
        Commands::Count { n, divide } => {
            let size = BoardSize::new(n)?;
            let start = Instant::now();
            println!("{}", count_text(size, divide));
            tracing::debug!(
                size = size.get(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Counted solutions"
            );
        }
        Commands::Explore => {
            let mut stdout = io::stdout();
            let mut explorer = start_explorer(&config, &mut stdout)?;
            let processed = run_session(io::stdin().lock(), &mut stdout, &mut explorer)?;
            tracing::info!(commands = processed, "Session ended");
        }
    }

    Ok(())
}

/// Sizes covered by `summary`: the configured range with `--from`/`--to`
/// replacing either end.
fn summary_range(
    config: &QueensConfig,
    from: Option<i64>,
    to: Option<i64>,
) -> anyhow::Result<SizeRange> {
    let configured = config.summary_range()?;
    let from = from.map(BoardSize::new).transpose()?.unwrap_or(configured.min());
    let to = to.map(BoardSize::new).transpose()?.unwrap_or(configured.max());
    Ok(SizeRange::new(from, to)?)
}

fn warn_if_large(size: BoardSize) {
    if size.get() > LARGE_BOARD {
        tracing::warn!(size = size.get(), "Large board, solving may take a long time");
    }
}

/// Batch report: a banner and example boards per size, then the timing table.
fn summary_text(range: SizeRange, examples: usize) -> anyhow::Result<String> {
    let mut out = vec![
        "N-Queens Solver — Bitmask Backtracking".to_string(),
        "=".repeat(50),
    ];

    let mut cache = SolutionCache::new();
    let mut rows = Vec::new();
    for n in range.min().as_u8()..=range.max().as_u8() {
        let size = BoardSize::new(i64::from(n))?;
        warn_if_large(size);
        let board = cache.get_or_solve(size);
        out.push(summary_report(board, examples));
        rows.push(SummaryRow::from(board));
    }

    out.push(String::new());
    out.push(comparison_table(&rows));
    out.push(String::new());
    Ok(out.join("\n"))
}

/// Statistics, the chosen solution and its table (or step text).
///
/// Every solution is written to `json` first when a path is given.
fn solve_text(
    n: i64,
    index: i64,
    attacks: bool,
    step: Option<i64>,
    json: Option<&Path>,
) -> anyhow::Result<String> {
    let widest = BoardSize::new(i64::from(BoardSize::MAX))?;
    let mut explorer = Explorer::new(SizeRange::new(BoardSize::new(0)?, widest)?);
    warn_if_large(BoardSize::new(n)?);

    let board = explorer.select(n)?;
    let mut out = vec![stats_text(board.size, board.len(), board.elapsed)];
    if let Some(path) = json {
        let report = SolutionReport::from(board);
        write_report(path, &report).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), solutions = report.count, "Wrote report");
        out.push(format!("Solutions written to: {}\n", path.display()));
    }

    explorer.goto(index)?;
    explorer.set_show_attacks(attacks);
    if let Some(step) = step {
        explorer.set_step(step)?;
    }
    out.push(view_text(&explorer.view()?));
    Ok(out.join("\n"))
}

fn view_text(view: &View) -> String {
    let mut out = vec![render_view(view)];
    if let Some(placement) = &view.placement {
        out.push(String::new());
        out.push(format!("Placement: {} ({})", placement, placement.to_algebraic()));
        let text = match view.step {
            Some(row) => step_text(placement, row),
            None => Some(solution_table(placement, view.index, view.total)),
        };
        if let Some(text) = text {
            out.push(String::new());
            out.push(text);
        }
    }
    out.join("\n")
}

/// The solution count, or the per-column split followed by the total.
fn count_text(size: BoardSize, divide: bool) -> String {
    let total = queens_solver::count(size);
    if !divide {
        return total.to_string();
    }

    let mut out: Vec<String> = queens_solver::count_divide(size)
        .iter()
        .map(|(col, nodes)| format!("column {:>2}: {}", col, nodes))
        .collect();
    out.push(String::new());
    out.push(format!("Total: {}", total));
    out.join("\n")
}

/// Builds the interactive explorer from the configuration and writes its
/// greeting. A configured `default_size` is opened right away.
fn start_explorer<W: Write>(config: &QueensConfig, writer: &mut W) -> anyhow::Result<Explorer> {
    let range = config.explorer_range()?;
    let mut explorer = Explorer::new(range);
    explorer.set_show_attacks(config.explorer.show_attacks);

    writeln!(writer, "N-Queens Explorer (boards {}..={})", range.min(), range.max())?;
    writeln!(writer, "{}", HELP)?;
    if let Some(size) = config.explorer.default_size {
        apply(ExplorerCommand::Solve(size.get() as i64), writer, &mut explorer)?;
    }
    Ok(explorer)
}
