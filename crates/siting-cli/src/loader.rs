//! Text exchange format for road graphs.
//!
//! ```text
//! 3            <- number of node lines that follow
//! A 0 0        <- name x y
//! B 1 0
//! C 2 0
//! A B 1.5      <- every remaining line: name name weight
//! B C 2
//! ```
//!
//! Blank lines and lines starting with `#` are ignored everywhere and do not
//! count towards the node lines, so node names may not start with `#`. Lines
//! with fewer than three fields are skipped and reported. Anything else that
//! does not parse fails the whole load: the graph is built privately and only
//! returned on success.

use std::fs;
use std::io::{self, Read, Write};

use siting_graph::{Coordinate, WeightedGraph};

use crate::error::{CliError, CliResult};

/// A line ignored because it had fewer than three fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: usize,
    pub content: String,
}

/// A fully parsed graph plus what was tolerated on the way.
#[derive(Debug, Clone, Default)]
pub struct LoadedGraph {
    pub graph: WeightedGraph,
    /// Short lines that were skipped.
    pub skipped: Vec<SkippedLine>,
    /// Road endpoints that had no node line and were created without a position.
    pub created: Vec<String>,
}

/// Load a graph from a file, or from stdin when `path` is `-`.
pub fn load_graph(path: &str) -> CliResult<LoadedGraph> {
    let read_error = |source| CliError::Input {
        path: path.to_string(),
        source,
    };

    let content = if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_error)?;
        buf
    } else {
        fs::read_to_string(path).map_err(read_error)?
    };

    let loaded = parse_graph(&content)?;
    tracing::info!(
        source = path,
        nodes = loaded.graph.node_count(),
        edges = loaded.graph.edge_count(),
        "graph loaded"
    );
    Ok(loaded)
}

/// Parse the exchange format.
pub fn parse_graph(input: &str) -> CliResult<LoadedGraph> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, text)| (i + 1, text.trim()))
        .filter(|(_, text)| !text.is_empty() && !text.starts_with('#'));

    let (header_line, header) = lines.next().ok_or_else(|| CliError::Parse {
        line: 1,
        message: "missing node count".to_string(),
    })?;
    let node_lines = parse_count(header_line, header, "node count")?;

    let mut loaded = LoadedGraph::default();
    for (line, text) in lines.by_ref().take(node_lines) {
        loaded.node_line(line, text)?;
    }
    for (line, text) in lines {
        loaded.road_line(line, text)?;
    }

    Ok(loaded)
}

impl LoadedGraph {
    /// Apply a `name x y` line.
    pub fn node_line(&mut self, line: usize, text: &str) -> CliResult<()> {
        let Some(fields) = self.split_fields(line, text) else {
            return Ok(());
        };
        check_name(line, fields[0])?;
        let x = parse_number(line, fields[1], "x coordinate")?;
        let y = parse_number(line, fields[2], "y coordinate")?;
        if !(x.is_finite() && y.is_finite()) {
            return Err(CliError::Parse {
                line,
                message: format!("coordinates must be finite, got ({}, {})", x, y),
            });
        }
        self.graph.add_node(fields[0], Some(Coordinate::new(x, y)));
        Ok(())
    }

    /// Apply a `name name weight` line, creating unknown endpoints.
    pub fn road_line(&mut self, line: usize, text: &str) -> CliResult<()> {
        let Some(fields) = self.split_fields(line, text) else {
            return Ok(());
        };
        let weight = parse_number(line, fields[2], "weight")?;

        for endpoint in [fields[0], fields[1]] {
            check_name(line, endpoint)?;
            if !self.graph.contains(endpoint) {
                tracing::debug!(line, node = endpoint, "creating road endpoint");
                self.graph.add_node(endpoint, None);
                self.created.push(endpoint.to_string());
            }
        }

        self.graph
            .add_edge(fields[0], fields[1], weight)
            .map_err(|source| CliError::Edge { line, source })
    }

    /// Split a line into fields, recording it as skipped if it is too short.
    fn split_fields<'a>(&mut self, line: usize, text: &'a str) -> Option<Vec<&'a str>> {
        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() < 3 {
            tracing::debug!(line, content = text, "skipping short line");
            self.skipped.push(SkippedLine {
                line,
                content: text.trim().to_string(),
            });
            return None;
        }
        Some(fields)
    }
}

/// Names that survive a write and re-read of the exchange format.
fn is_writable(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('#') && !name.contains(char::is_whitespace)
}

fn check_name(line: usize, name: &str) -> CliResult<()> {
    if is_writable(name) {
        Ok(())
    } else {
        Err(CliError::Parse {
            line,
            message: format!("node names cannot start with '#': {:?}", name),
        })
    }
}

/// Parse a non-negative line count.
pub fn parse_count(line: usize, field: &str, what: &str) -> CliResult<usize> {
    field.trim().parse().map_err(|_| CliError::Parse {
        line,
        message: format!("expected {}, found {:?}", what, field.trim()),
    })
}

fn parse_number(line: usize, field: &str, what: &str) -> CliResult<f64> {
    field.parse().map_err(|_| CliError::Parse {
        line,
        message: format!("{} is not a number: {:?}", what, field),
    })
}

/// Write a graph in the exchange format.
///
/// Nodes without a coordinate are written at `0 0`. Names that would not
/// read back (empty, containing whitespace, starting with `#`) are rejected.
pub fn write_graph<W: Write>(graph: &WeightedGraph, out: &mut W) -> CliResult<()> {
    if let Some((_, node)) = graph.nodes().find(|(_, n)| !is_writable(&n.name)) {
        return Err(CliError::UnwritableName(node.name.clone()));
    }

    writeln!(out, "{}", graph.node_count())?;
    for (_, node) in graph.nodes() {
        let at = node.coordinate.unwrap_or_default();
        writeln!(out, "{} {} {}", node.name, at.x, at.y)?;
    }
    for (from, to, weight) in graph.edges() {
        writeln!(out, "{} {} {}", graph.name(from), graph.name(to), weight)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use siting_graph::{EdgeFault, GraphError};

    const TRIANGLE: &str = "\
3
A 0 0
B 1 0
C 0.5 1
A B 1
B C 1
A C 3
";

    #[test]
    fn test_parse_triangle() {
        let loaded = parse_graph(TRIANGLE).unwrap();
        let g = &loaded.graph;

        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.weight("A", "C"), Some(3.0));
        assert_eq!(
            g.node(g.node_id("C").unwrap()).unwrap().coordinate,
            Some(Coordinate::new(0.5, 1.0))
        );
        assert!(loaded.skipped.is_empty());
        assert!(loaded.created.is_empty());
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let input = "# town\n\n2\nA 0 0\n\n# roads\nB 1 1\nA B 2.5\n";
        let loaded = parse_graph(input).unwrap();
        assert_eq!(loaded.graph.node_count(), 2);
        assert_eq!(loaded.graph.weight("A", "B"), Some(2.5));
    }

    #[test]
    fn test_short_lines_are_skipped() {
        let input = "2\nA 0 0\nB 1\nA B\nA C 2\n";
        let loaded = parse_graph(input).unwrap();

        assert_eq!(
            loaded.skipped,
            vec![
                SkippedLine {
                    line: 3,
                    content: "B 1".into()
                },
                SkippedLine {
                    line: 4,
                    content: "A B".into()
                },
            ]
        );
        // The edge line auto-created C
        assert_eq!(loaded.created, vec!["C".to_string()]);
        assert_eq!(loaded.graph.node_count(), 2);
        assert_eq!(loaded.graph.edge_count(), 1);
        let c = loaded.graph.node_id("C").unwrap();
        assert_eq!(loaded.graph.node(c).unwrap().coordinate, None);
    }

    #[test]
    fn test_bad_header() {
        let err = parse_graph("three\nA 0 0\n").unwrap_err();
        assert!(matches!(err, CliError::Parse { line: 1, .. }));

        let err = parse_graph("\n\n").unwrap_err();
        assert!(matches!(err, CliError::Parse { .. }));
    }

    #[test]
    fn test_bad_numbers_fail_with_line() {
        let err = parse_graph("1\nA zero 0\n").unwrap_err();
        assert!(matches!(err, CliError::Parse { line: 2, .. }));

        let err = parse_graph("2\nA 0 0\nB 1 1\nA B far\n").unwrap_err();
        assert!(matches!(err, CliError::Parse { line: 4, .. }));
        assert!(err.to_string().contains("weight"));

        let err = parse_graph("1\nA inf 0\n").unwrap_err();
        assert!(matches!(err, CliError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_rejected_road_reports_line() {
        let err = parse_graph("2\nA 0 0\nB 1 1\nA B 1\nB B 2\n").unwrap_err();
        match err {
            CliError::Edge { line, source } => {
                assert_eq!(line, 5);
                assert!(matches!(
                    source,
                    GraphError::InvalidEdge {
                        fault: EdgeFault::SelfLoop,
                        ..
                    }
                ));
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = parse_graph("2\nA 0 0\nB 1 1\nA B -1\n").unwrap_err();
        assert!(matches!(err, CliError::Edge { line: 4, .. }));
    }

    #[test]
    fn test_fewer_node_lines_than_declared() {
        let loaded = parse_graph("5\nA 0 0\nB 1 1\n").unwrap();
        assert_eq!(loaded.graph.node_count(), 2);
        assert_eq!(loaded.graph.edge_count(), 0);
    }

    #[test]
    fn test_write_then_parse_preserves_graph() {
        let original = parse_graph(TRIANGLE).unwrap().graph;
        let mut buf = Vec::new();
        write_graph(&original, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("3\nA 0 0\n"));

        let reparsed = parse_graph(&text).unwrap().graph;
        assert_eq!(reparsed.node_count(), 3);
        assert_eq!(reparsed.edge_count(), 3);
        assert_eq!(reparsed.weight("C", "A"), Some(3.0));
    }

    #[test]
    fn test_write_rejects_whitespace_names() {
        let mut g = WeightedGraph::new();
        g.add_node("Fire Station", None);
        let err = write_graph(&g, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, CliError::UnwritableName(_)));
    }

    #[test]
    fn test_hash_names_do_not_vanish_on_round_trip() {
        let mut g = WeightedGraph::new();
        g.add_node("#1", Some(Coordinate::new(0.0, 0.0)));
        g.add_node("B", Some(Coordinate::new(1.0, 0.0)));
        g.add_edge("#1", "B", 2.0).unwrap();

        let mut buf = Vec::new();
        let err = write_graph(&g, &mut buf).unwrap_err();
        assert!(matches!(err, CliError::UnwritableName(ref name) if name == "#1"));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_hash_name_in_road_is_rejected() {
        let err = parse_graph("1\nA 0 0\nA #x 2\n").unwrap_err();
        assert!(matches!(err, CliError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_line_handlers() {
        let mut loaded = LoadedGraph::default();
        loaded.node_line(1, "A 0 0").unwrap();
        loaded.node_line(2, "B").unwrap();
        loaded.road_line(3, "A C 4").unwrap();

        assert_eq!(loaded.graph.node_count(), 2);
        assert_eq!(loaded.graph.weight("C", "A"), Some(4.0));
        assert_eq!(loaded.skipped.len(), 1);
        assert_eq!(loaded.created, vec!["C".to_string()]);
        assert!(matches!(
            loaded.node_line(4, "#D 1 1"),
            Err(CliError::Parse { line: 4, .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("town.txt");
        fs::write(&path, TRIANGLE).unwrap();

        let loaded = load_graph(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.graph.node_count(), 3);

        let missing = dir.path().join("nope.txt");
        let err = load_graph(missing.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CliError::Input { .. }));
    }
}
