//! `siting solve` command - Find the best site(s) in a road graph.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use siting_graph::{CenterFinder, GraphError};

use crate::config::{ReportFormat, SitingConfig};
use crate::error::CliResult;
use crate::report;

/// Command-line overrides for the `solve` command.
#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    pub tolerance: Option<f64>,
    pub format: Option<ReportFormat>,
    pub output: Option<PathBuf>,
    pub dot: Option<PathBuf>,
    pub precision: Option<usize>,
    pub per_component: bool,
}

/// Execute the `solve` command.
pub fn execute(
    file: Option<&str>,
    sample: bool,
    options: SolveOptions,
    config: &SitingConfig,
) -> CliResult<()> {
    let center_config = config.center_config(options.tolerance)?;
    let format = options.format.unwrap_or(config.report.format);
    let precision = options.precision.unwrap_or(config.report.precision);
    let output = options.output.or_else(|| config.report.output.clone());
    let dot = options.dot.or_else(|| config.report.dot.clone());

    let loaded = super::load_input(file, sample)?;
    let graph = &loaded.graph;

    let source = if sample {
        "sample town"
    } else {
        file.unwrap_or("-")
    };
    eprintln!("{} Locating optimal site", "→".bright_cyan());
    eprintln!("  {} Source: {}", "•".dimmed(), source.bright_yellow());
    eprintln!(
        "  {} Graph: {} locations, {} roads",
        "•".dimmed(),
        graph.node_count().to_string().bright_white(),
        graph.edge_count().to_string().bright_white()
    );
    eprintln!();

    let finder = CenterFinder::with_config(graph, center_config);

    let (rendered, result) = if options.per_component {
        let centers = finder.find_component_centers()?;
        let rendered = match format {
            ReportFormat::Text => report::render_components_text(graph, &centers, precision),
            ReportFormat::Json => report::render_components_json(graph, &centers)?,
        };
        (rendered, None)
    } else {
        let result = match finder.find_center() {
            Ok(result) => result,
            Err(e @ GraphError::NoCenterExists { .. }) => {
                let centers = finder.find_component_centers()?;
                eprint!(
                    "{}",
                    report::render_components_text(graph, &centers, precision)
                );
                eprintln!(
                    "{} rerun with {} to report these sites",
                    "Hint:".bright_cyan(),
                    "--per-component".bright_white()
                );
                return Err(e.into());
            }
            Err(e) => return Err(e.into()),
        };
        tracing::info!(
            center = ?result.center_names(),
            min_eccentricity = result.min_eccentricity,
            "center found"
        );
        let rendered = match format {
            ReportFormat::Text => report::render_text(&result, precision),
            ReportFormat::Json => report::render_json(&result)?,
        };
        (rendered, Some(result))
    };

    super::write_output(output.as_deref(), &rendered, "Report")?;

    if let Some(path) = dot {
        fs::write(&path, report::render_dot(graph, result.as_ref(), precision))?;
        eprintln!(
            "{} Diagram written to {}",
            "✓".bright_green(),
            path.display().to_string().bright_yellow()
        );
    }

    Ok(())
}
