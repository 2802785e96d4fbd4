//! `siting input` command - Enter a road graph by hand.
//!
//! Prompts go to stderr and answers are read from stdin, one per line. The
//! finished graph is written in the graph file format, so it can be saved
//! with `--output` or piped into `siting solve -`.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use crate::error::{CliError, CliResult};
use crate::loader::{self, LoadedGraph};

/// Execute the `input` command.
pub fn execute(output: Option<&Path>) -> CliResult<()> {
    let loaded = prompt_graph(&mut io::stdin().lock(), &mut io::stderr())?;
    super::warn_tolerated(&loaded);

    eprintln!(
        "{} Graph created: {} locations, {} roads",
        "✓".bright_green(),
        loaded.graph.node_count().to_string().bright_white(),
        loaded.graph.edge_count().to_string().bright_white()
    );

    let mut buf = Vec::new();
    loader::write_graph(&loaded.graph, &mut buf)?;
    super::write_output(output, &String::from_utf8_lossy(&buf), "Graph")
}

/// One prompt/answer exchange. `answered` is the line number used in errors.
struct Session<'a, R, W> {
    input: &'a mut R,
    prompts: &'a mut W,
    answered: usize,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn ask(&mut self, prompt: &str) -> CliResult<String> {
        write!(self.prompts, "{}: ", prompt)?;
        self.prompts.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(CliError::Parse {
                line: self.answered + 1,
                message: format!("input ended while waiting for {}", prompt.to_lowercase()),
            });
        }
        self.answered += 1;
        Ok(answer.trim().to_string())
    }

    fn ask_count(&mut self, prompt: &str) -> CliResult<usize> {
        let answer = self.ask(prompt)?;
        loader::parse_count(self.answered, &answer, "a whole number")
    }
}

/// Ask for the node count, the nodes, the road count and the roads.
///
/// Entries follow the graph file rules: short answers are skipped, bad
/// numbers and invalid roads abort, unknown road endpoints are created.
pub fn prompt_graph<R: BufRead, W: Write>(
    input: &mut R,
    prompts: &mut W,
) -> CliResult<LoadedGraph> {
    let mut session = Session {
        input,
        prompts,
        answered: 0,
    };
    let mut loaded = LoadedGraph::default();

    let buildings = session.ask_count("Number of buildings")?;
    writeln!(session.prompts, "Enter each building as: name x y")?;
    for i in 1..=buildings {
        let answer = session.ask(&format!("Building {}", i))?;
        loaded.node_line(session.answered, &answer)?;
    }

    let roads = session.ask_count("Number of roads")?;
    writeln!(session.prompts, "Enter each road as: building building distance")?;
    for i in 1..=roads {
        let answer = session.ask(&format!("Road {}", i))?;
        loaded.road_line(session.answered, &answer)?;
    }

    tracing::info!(
        nodes = loaded.graph.node_count(),
        edges = loaded.graph.edge_count(),
        "graph entered"
    );
    Ok(loaded)
}
