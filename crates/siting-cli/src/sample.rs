//! Built-in demo data: a small town of ten buildings and seventeen roads.

use siting_graph::{Coordinate, GraphError, WeightedGraph};

/// Buildings with their map positions.
const BUILDINGS: [(&str, f64, f64); 10] = [
    ("Dom1", 0.0, 0.0),
    ("Dom2", 1.0, 2.0),
    ("Dom3", 3.0, 1.0),
    ("Dom4", 5.0, 0.0),
    ("Dom5", 6.0, 2.0),
    ("Sklep", 2.0, 0.0),
    ("Szkoła", 4.0, 2.0),
    ("Urząd", 2.0, 3.0),
    ("Kościół", 0.0, 4.0),
    ("Park", 5.0, 4.0),
];

/// Roads with their lengths.
const ROADS: [(&str, &str, f64); 17] = [
    ("Dom1", "Dom2", 2.5),
    ("Dom1", "Sklep", 2.0),
    ("Dom2", "Urząd", 1.5),
    ("Dom2", "Szkoła", 3.0),
    ("Dom3", "Sklep", 1.0),
    ("Dom3", "Szkoła", 1.5),
    ("Dom3", "Dom4", 2.0),
    ("Dom4", "Dom5", 2.5),
    ("Dom4", "Szkoła", 2.0),
    ("Dom5", "Szkoła", 2.5),
    ("Dom5", "Park", 3.0),
    ("Sklep", "Dom2", 1.5),
    ("Szkoła", "Urząd", 2.0),
    ("Szkoła", "Park", 2.0),
    ("Urząd", "Kościół", 2.0),
    ("Urząd", "Park", 3.0),
    ("Kościół", "Park", 5.0),
];

/// Build the demo town.
pub fn town() -> Result<WeightedGraph, GraphError> {
    let mut graph = WeightedGraph::new();
    for (name, x, y) in BUILDINGS {
        graph.add_node(name, Some(Coordinate::new(x, y)));
    }
    for (a, b, weight) in ROADS {
        graph.add_edge(a, b, weight)?;
    }
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "sample town built"
    );
    Ok(graph)
}
