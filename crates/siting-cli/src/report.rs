//! Result presentation: text report, JSON report and Graphviz diagram.

use serde::Serialize;
use siting_graph::{CenterResult, ComponentCenter, Eccentricity, WeightedGraph};

use crate::error::CliResult;

/// One row of a JSON eccentricity table.
#[derive(Debug, Serialize)]
pub struct EccentricityRow<'a> {
    pub name: &'a str,
    /// `null` when the location cannot reach the whole graph.
    pub eccentricity: Option<f64>,
    pub reachable: Option<usize>,
}

/// JSON document for a graph center.
#[derive(Debug, Serialize)]
pub struct CenterReport<'a> {
    pub center: Vec<&'a str>,
    pub min_eccentricity: f64,
    pub eccentricities: Vec<EccentricityRow<'a>>,
}

/// One connected component in a JSON per-component document.
#[derive(Debug, Serialize)]
pub struct ComponentRow<'a> {
    pub component: u32,
    pub size: usize,
    pub center: Vec<&'a str>,
    pub min_eccentricity: f64,
}

/// JSON document for per-component centers.
#[derive(Debug, Serialize)]
pub struct ComponentReport<'a> {
    pub components: Vec<ComponentRow<'a>>,
}

impl<'a> CenterReport<'a> {
    /// Build from a center result, rows ranked by eccentricity.
    pub fn new(result: &'a CenterResult) -> Self {
        let eccentricities = result
            .eccentricities
            .ranked()
            .into_iter()
            .map(|entry| EccentricityRow {
                name: &entry.name,
                eccentricity: entry.eccentricity.value(),
                reachable: match entry.eccentricity {
                    Eccentricity::Defined(_) => None,
                    Eccentricity::Undefined { reachable } => Some(reachable),
                },
            })
            .collect();

        Self {
            center: result.center_names(),
            min_eccentricity: result.min_eccentricity,
            eccentricities,
        }
    }
}

impl<'a> ComponentReport<'a> {
    /// Build from per-component centers.
    pub fn new(graph: &'a WeightedGraph, centers: &[ComponentCenter]) -> Self {
        let components = centers
            .iter()
            .map(|c| ComponentRow {
                component: c.component.get(),
                size: c.size(),
                center: c.center.iter().map(|&id| graph.name(id)).collect(),
                min_eccentricity: c.min_eccentricity,
            })
            .collect();
        Self { components }
    }
}

/// Pretty JSON for a center result.
pub fn render_json(result: &CenterResult) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(&CenterReport::new(result))?)
}

/// Pretty JSON for per-component centers.
pub fn render_components_json(
    graph: &WeightedGraph,
    centers: &[ComponentCenter],
) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(&ComponentReport::new(graph, centers))?)
}

fn underline(title: &str) -> String {
    format!("{}\n{}\n", title, "=".repeat(title.chars().count()))
}

/// Human-readable report for a center result.
pub fn render_text(result: &CenterResult, precision: usize) -> String {
    let total = result.eccentricities.len();
    let mut out = underline("FACILITY SITING RESULTS");
    out.push('\n');
    out.push_str(&format!(
        "Optimal site(s): {}\n",
        result.center_names().join(", ")
    ));
    out.push_str(&format!(
        "Minimum worst-case distance: {:.*}\n\n",
        precision, result.min_eccentricity
    ));

    out.push_str("Eccentricity per location:\n");
    out.push_str("--------------------------\n");
    for entry in result.eccentricities.ranked() {
        let value = match entry.eccentricity {
            Eccentricity::Defined(v) => format!("{:.*}", precision, v),
            Eccentricity::Undefined { reachable } => {
                format!("undefined (reaches {} of {})", reachable, total)
            }
        };
        out.push_str(&format!("{}: {}\n", entry.name, value));
    }
    out
}

/// Human-readable report for per-component centers.
pub fn render_components_text(
    graph: &WeightedGraph,
    centers: &[ComponentCenter],
    precision: usize,
) -> String {
    let mut out = underline("PER-NETWORK SITING RESULTS");
    out.push('\n');
    if centers.len() > 1 {
        out.push_str(&format!(
            "{} separate road networks; no single site reaches every location.\n\n",
            centers.len()
        ));
    }

    for (i, c) in centers.iter().enumerate() {
        let names: Vec<&str> = c.center.iter().map(|&id| graph.name(id)).collect();
        out.push_str(&format!(
            "Network {} ({} location{}): best site(s) {}, worst-case distance {:.*}\n",
            i + 1,
            c.size(),
            if c.size() == 1 { "" } else { "s" },
            names.join(", "),
            precision,
            c.min_eccentricity
        ));
    }
    out
}

fn quoted(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Graphviz diagram: positioned nodes, weighted roads, highlighted center.
///
/// Render with `neato -n -Tpng` to honour the coordinates.
pub fn render_dot(
    graph: &WeightedGraph,
    result: Option<&CenterResult>,
    precision: usize,
) -> String {
    let mut out = String::from("graph siting {\n");
    out.push_str("    node [shape=circle, style=filled, fillcolor=lightblue];\n");
    if let Some(result) = result {
        out.push_str(&format!(
            "    label={};\n    labelloc=t;\n",
            quoted(&format!(
                "Optimal site(s): {}",
                result.center_names().join(", ")
            ))
        ));
    }

    for (id, node) in graph.nodes() {
        let mut attrs = Vec::new();
        if let Some(at) = node.coordinate {
            attrs.push(format!("pos=\"{},{}!\"", at.x, at.y));
        }
        if let Some(result) = result {
            if let Some(value) = result.eccentricities.get(id).and_then(|e| e.value()) {
                attrs.push(format!("xlabel=\"E: {:.*}\"", precision, value));
            }
            if result.is_center(id) {
                attrs.push("fillcolor=red".to_string());
                attrs.push("penwidth=2".to_string());
            }
        }

        if attrs.is_empty() {
            out.push_str(&format!("    {};\n", quoted(&node.name)));
        } else {
            out.push_str(&format!(
                "    {} [{}];\n",
                quoted(&node.name),
                attrs.join(", ")
            ));
        }
    }

    for (from, to, weight) in graph.edges() {
        out.push_str(&format!(
            "    {} -- {} [label=\"{}\"];\n",
            quoted(graph.name(from)),
            quoted(graph.name(to)),
            weight
        ));
    }

    out.push_str("}\n");
    out
}
