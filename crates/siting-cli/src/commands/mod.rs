//! CLI command implementations.
//!
//! Reports go to stdout (or a file); status lines and warnings go to stderr
//! so that output can be piped.

pub mod input;
pub mod inspect;
pub mod sample;
pub mod solve;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::error::{CliError, CliResult};
use crate::loader::{self, LoadedGraph};

/// Load the graph named on the command line, or the built-in sample town.
pub fn load_input(file: Option<&str>, sample: bool) -> CliResult<LoadedGraph> {
    if sample {
        return Ok(LoadedGraph {
            graph: crate::sample::town()?,
            skipped: Vec::new(),
            created: Vec::new(),
        });
    }

    let file = file.ok_or(CliError::MissingInput)?;
    let loaded = loader::load_graph(file)?;
    warn_tolerated(&loaded);
    Ok(loaded)
}

/// Tell the user about input lines that were accepted with repairs.
fn warn_tolerated(loaded: &LoadedGraph) {
    for skipped in &loaded.skipped {
        eprintln!(
            "{} line {} skipped (fewer than 3 fields): {}",
            "Warning:".yellow(),
            skipped.line,
            skipped.content.dimmed()
        );
    }
    if !loaded.created.is_empty() {
        eprintln!(
            "{} created without a position: {}",
            "Warning:".yellow(),
            loaded.created.join(", ").bright_white()
        );
    }
}

/// Write `content` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, content: &str, what: &str) -> CliResult<()> {
    match path {
        Some(path) => {
            fs::write(path, content)?;
            eprintln!(
                "{} {} written to {}",
                "✓".bright_green(),
                what,
                path.display().to_string().bright_yellow()
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
