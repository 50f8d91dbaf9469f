//! Command-line interface for resurface.
//!
//! The binary is a thin driver around `resurface_core`: it globs the current
//! working directory, streams each file's lines into the evaluation
//! pipeline, and prints one verdict line per file. All filesystem access
//! lives here; the core never touches disk.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use clap::Parser;

use resurface_core::date::parse_reference;
use resurface_core::duedate::DueWindow;
use resurface_core::error::Result;
use resurface_core::verdict::{Verdict, evaluate_lines};

/// Display Markdown files that have resurfacing schedules defined by RSF
/// dateblocks, and which have dates which are due.
#[derive(Parser)]
#[command(name = "resurface", version, about)]
struct Cli {
    /// Compare due dates to this date; accepts "today", "yesterday", or YYYY-MM-DD.
    #[arg(short = 'r', long, default_value = "today")]
    reference: String,

    /// Include due dates D days before the reference date.
    #[arg(short, long, default_value_t = 3, value_name = "D")]
    overdue: u32,

    /// Include due dates D days after the reference date.
    #[arg(short, long, default_value_t = 0, value_name = "D")]
    advance: u32,

    /// Report all file reading results, not just due files.
    #[arg(short, long)]
    verbose: bool,

    /// Include `.txt` files in the search.
    #[arg(short = 't', long)]
    include_txt: bool,

    /// Limit the number of lines read per file; 0 reads whole files.
    #[arg(short, long, default_value_t = 0, value_name = "N")]
    limit: usize,

    /// Flood the console.
    #[arg(long)]
    enable_logging: bool,
}

/// Parse arguments, scan the current directory, and print verdicts.
pub fn run_cli() {
    let cli = Cli::parse();
    init_logging(cli.enable_logging);

    let reference = match parse_reference(&cli.reference) {
        Ok(date) => date,
        Err(e) => {
            eprintln!("✗ Error parsing reference date: {e}");
            std::process::exit(2);
        }
    };

    let window = DueWindow::new(reference, cli.overdue, cli.advance);
    log::debug!(
        "scanning with window {} ..= {}",
        window.earliest(),
        window.latest()
    );

    for path in collect_files(cli.include_txt) {
        log::info!("scanning {}", path.display());
        match scan_file(&path, &window, cli.limit) {
            Ok(verdict) => {
                if let Some(line) = verdict_line(&verdict, &path, cli.verbose) {
                    println!("{line}");
                }
            }
            // Unreadable files are reported and skipped; the scan goes on.
            Err(e) => eprintln!("✗ Error reading {}: {e}", path.display()),
        }
    }
}

fn init_logging(enable_logging: bool) {
    let env = if enable_logging {
        env_logger::Env::default().default_filter_or("debug")
    } else {
        env_logger::Env::default()
    };
    env_logger::Builder::from_env(env).init();
}

/// Collect `*.md` (and optionally `*.txt`) files from the current directory,
/// non-recursively, in descending filename order.
fn collect_files(include_txt: bool) -> Vec<PathBuf> {
    let mut patterns = vec!["*.md"];
    if include_txt {
        patterns.push("*.txt");
    }

    let mut files = Vec::new();
    for pattern in patterns {
        match glob::glob(pattern) {
            Ok(paths) => files.extend(paths.filter_map(|entry| entry.ok())),
            Err(e) => eprintln!("✗ Error in glob pattern {pattern}: {e}"),
        }
    }

    files.sort();
    files.reverse();
    log::debug!("files found: {files:?}");
    files
}

/// Read one file up to `limit` lines (0 = unlimited) and evaluate it.
///
/// Lines past the limit are never read; the file handle is released on
/// every exit path, including read failures.
fn scan_file(path: &Path, window: &DueWindow, limit: usize) -> Result<Verdict> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
        if limit > 0 && lines.len() >= limit {
            break;
        }
    }

    Ok(evaluate_lines(&lines, window))
}

/// Format a verdict for display, reducing the path to its basename.
///
/// `DUE` lines always print; the other two verdicts only in verbose mode.
fn verdict_line(verdict: &Verdict, path: &Path, verbose: bool) -> Option<String> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());

    match verdict {
        Verdict::Due(date) => Some(format!("DUE : {date} : {name}")),
        Verdict::NoDueDateFound if verbose => Some(format!("NoDueDateFound : {name}")),
        Verdict::DateblockNotFound if verbose => Some(format!("DateblockNotFound : {name}")),
        _ => None,
    }
}
