#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use dirtree::cli::Args;
use dirtree::render::{header_lines, tree_to_lines};
use dirtree::terminal::{buffered_stdout, write_lines};
use dirtree::tree::{TreeBuilder, WalkdirTreeBuilder};
use ratatui::text::Line;
use std::fs;
use std::io::Write;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("dirtree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    init_logging();

    let args = Args::parse();

    let start = args
        .start_dir()
        .context("failed to resolve current directory")?;
    // Keep the name as given (a symlinked start shows the link's name); only
    // paths like `.` or `..` with no final component are resolved.
    let path = if start.file_name().is_some() {
        start
    } else {
        start
            .canonicalize()
            .with_context(|| format!("{}: failed to resolve path", start.display()))?
    };

    let metadata = fs::metadata(&path)
        .with_context(|| format!("{}: failed to resolve path", path.display()))?;
    anyhow::ensure!(metadata.is_dir(), "{}: Not a directory", path.display());

    tracing::debug!(path = %path.display(), "printing tree");

    let entries = WalkdirTreeBuilder.build_tree(&path);

    let mut lines = header_lines();
    lines.extend(tree_to_lines(&entries));
    lines.push(Line::default());

    let mut stdout = buffered_stdout();
    write_lines(&mut stdout, &lines).context("failed to write tree")?;
    stdout.flush().context("failed to write tree")?;

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dirtree=warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}
