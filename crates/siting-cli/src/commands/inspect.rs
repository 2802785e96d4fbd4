//! `siting inspect` command - Summarize a road graph without solving it.

use colored::Colorize;
use siting_graph::WeightedGraph;

use crate::error::CliResult;

/// Execute the `inspect` command.
pub fn execute(file: Option<&str>, sample: bool) -> CliResult<()> {
    let loaded = super::load_input(file, sample)?;
    let graph = &loaded.graph;

    let label = if sample { "(sample town)" } else { "" };
    println!(
        "{} {}",
        "Graph Summary".bright_white().underline(),
        label.dimmed()
    );
    println!(
        "  {} Locations: {}",
        "•".dimmed(),
        graph.node_count().to_string().bright_white()
    );
    println!(
        "  {} Roads: {}",
        "•".dimmed(),
        graph.edge_count().to_string().bright_white()
    );

    let networks = graph.component_count();
    if networks > 1 {
        println!(
            "  {} Networks: {} {}",
            "•".dimmed(),
            networks.to_string().bright_yellow(),
            "(no single site reaches every location)".yellow()
        );
    } else {
        println!(
            "  {} Networks: {}",
            "•".dimmed(),
            networks.to_string().bright_white()
        );
    }
    println!();
    print!("{}", listing(graph));

    Ok(())
}

/// Plain listing of locations and roads.
fn listing(graph: &WeightedGraph) -> String {
    let mut out = String::from("Locations:\n");
    for (_, node) in graph.nodes() {
        let position = match node.coordinate {
            Some(at) => format!("({}, {})", at.x, at.y),
            None => "(no position)".to_string(),
        };
        out.push_str(&format!("  {} {}\n", node.name, position));
    }

    out.push_str("\nRoads:\n");
    for (from, to, weight) in graph.edges() {
        out.push_str(&format!(
            "  {} -- {}: {}\n",
            graph.name(from),
            graph.name(to),
            weight
        ));
    }
    out
}
