//! Node eccentricity.
//!
//! The eccentricity of a node is its largest shortest-path distance to any
//! other node. A node that cannot reach the whole graph has no eccentricity;
//! that case is recorded as [`Eccentricity::Undefined`] instead of a sentinel
//! number.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::dijkstra::shortest_paths_from;
use crate::models::{NodeId, WeightedGraph};
use crate::Result;

/// Eccentricity of a single node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Eccentricity {
    /// Node reaches every other node; value is the distance to the farthest one.
    Defined(f64),
    /// Node reaches only `reachable` nodes (itself included).
    Undefined { reachable: usize },
}

impl Eccentricity {
    /// The numeric eccentricity, if defined.
    pub fn value(&self) -> Option<f64> {
        match self {
            Eccentricity::Defined(v) => Some(*v),
            Eccentricity::Undefined { .. } => None,
        }
    }

    /// Check if the node reaches the whole graph.
    pub fn is_defined(&self) -> bool {
        matches!(self, Eccentricity::Defined(_))
    }

    /// Defined values ascending, undefined after all defined values.
    pub fn cmp_for_ranking(&self, other: &Self) -> Ordering {
        match (self.value(), other.value()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// One row of an [`EccentricityTable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EccentricityEntry {
    pub node: NodeId,
    pub name: String,
    pub eccentricity: Eccentricity,
}

/// Eccentricity of every node, in graph insertion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EccentricityTable {
    entries: Vec<EccentricityEntry>,
}

impl EccentricityTable {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows in graph insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &EccentricityEntry> {
        self.entries.iter()
    }

    /// Eccentricity of a node by id.
    pub fn get(&self, node: NodeId) -> Option<Eccentricity> {
        self.entries.get(node.index()).map(|e| e.eccentricity)
    }

    /// Name of a node by id.
    pub fn name(&self, node: NodeId) -> Option<&str> {
        self.entries.get(node.index()).map(|e| e.name.as_str())
    }

    /// Eccentricity of a node by name.
    pub fn get_by_name(&self, name: &str) -> Option<Eccentricity> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.eccentricity)
    }

    /// Smallest defined eccentricity.
    pub fn min_defined(&self) -> Option<f64> {
        self.entries
            .iter()
            .filter_map(|e| e.eccentricity.value())
            .min_by(f64::total_cmp)
    }

    /// Number of nodes without a defined eccentricity.
    pub fn undefined_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| !e.eccentricity.is_defined())
            .count()
    }

    /// Rows ranked by eccentricity ascending, undefined last.
    ///
    /// Equal eccentricities keep insertion order.
    pub fn ranked(&self) -> Vec<&EccentricityEntry> {
        let mut rows: Vec<_> = self.entries.iter().collect();
        rows.sort_by(|a, b| a.eccentricity.cmp_for_ranking(&b.eccentricity));
        rows
    }
}

impl<'a> IntoIterator for &'a EccentricityTable {
    type Item = &'a EccentricityEntry;
    type IntoIter = std::slice::Iter<'a, EccentricityEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Eccentricity of every node in `graph`.
///
/// Runs one Dijkstra per node. A node whose reachable set is smaller than the
/// graph gets [`Eccentricity::Undefined`]. An empty graph yields an empty table.
pub fn compute_eccentricities(graph: &WeightedGraph) -> Result<EccentricityTable> {
    let n = graph.node_count();
    let mut entries = Vec::with_capacity(n);

    for (id, node) in graph.nodes() {
        let paths = shortest_paths_from(graph, id)?;

        let eccentricity = if paths.len() < n {
            Eccentricity::Undefined {
                reachable: paths.len(),
            }
        } else {
            Eccentricity::Defined(paths.max_distance())
        };

        tracing::debug!(node = %node.name, ?eccentricity, "eccentricity computed");

        entries.push(EccentricityEntry {
            node: id,
            name: node.name.clone(),
            eccentricity,
        });
    }

    Ok(EccentricityTable { entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_path_graph() -> WeightedGraph {
        // A -1- B -1- C
        let mut g = WeightedGraph::new();
        for name in ["A", "B", "C"] {
            g.add_node(name, None);
        }
        g.add_edge("A", "B", 1.0).unwrap();
        g.add_edge("B", "C", 1.0).unwrap();
        g
    }

    #[test]
    fn test_path_graph_eccentricities() {
        let g = make_path_graph();
        let table = compute_eccentricities(&g).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.get_by_name("A"), Some(Eccentricity::Defined(2.0)));
        assert_eq!(table.get_by_name("B"), Some(Eccentricity::Defined(1.0)));
        assert_eq!(table.get_by_name("C"), Some(Eccentricity::Defined(2.0)));
        assert_eq!(table.min_defined(), Some(1.0));
        assert_eq!(table.undefined_count(), 0);
    }

    #[test]
    fn test_disconnected_nodes_are_undefined() {
        let mut g = make_path_graph();
        g.add_node("D", None);
        let table = compute_eccentricities(&g).unwrap();

        assert_eq!(
            table.get_by_name("A"),
            Some(Eccentricity::Undefined { reachable: 3 })
        );
        assert_eq!(
            table.get_by_name("D"),
            Some(Eccentricity::Undefined { reachable: 1 })
        );
        assert_eq!(table.undefined_count(), 4);
        assert_eq!(table.min_defined(), None);
    }

    #[test]
    fn test_single_node_has_zero_eccentricity() {
        let mut g = WeightedGraph::new();
        g.add_node("only", None);
        let table = compute_eccentricities(&g).unwrap();
        assert_eq!(table.get(NodeId(0)), Some(Eccentricity::Defined(0.0)));
    }

    #[test]
    fn test_empty_graph_gives_empty_table() {
        let table = compute_eccentricities(&WeightedGraph::new()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_ranked_puts_undefined_last() {
        let rows = [
            Eccentricity::Undefined { reachable: 1 },
            Eccentricity::Defined(3.0),
            Eccentricity::Defined(1.5),
        ];
        let mut sorted = rows;
        sorted.sort_by(Eccentricity::cmp_for_ranking);
        assert_eq!(
            sorted,
            [
                Eccentricity::Defined(1.5),
                Eccentricity::Defined(3.0),
                Eccentricity::Undefined { reachable: 1 },
            ]
        );

        let table = compute_eccentricities(&make_path_graph()).unwrap();
        let names: Vec<_> = table.ranked().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_table_serializes_as_rows() {
        let table = compute_eccentricities(&make_path_graph()).unwrap();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json[1]["name"], "B");
        assert_eq!(json[1]["eccentricity"]["defined"], 1.0);
    }
}
