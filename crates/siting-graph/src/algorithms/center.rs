//! Graph center: the best site for a shared facility.
//!
//! The center is the set of nodes with minimum eccentricity, i.e. the
//! locations whose worst-case travel distance to any other location is
//! smallest. Ties are never broken; every node at the minimum is reported.
//!
//! A disconnected road network has no center: no single site reaches every
//! location. [`CenterFinder::find_center`] reports that as
//! [`GraphError::NoCenterExists`]. Callers that want the best site of each
//! separate network ask [`CenterFinder::find_component_centers`] instead.

use serde::{Deserialize, Serialize};

use super::dijkstra::{shortest_paths_from, ShortestPaths};
use super::eccentricity::{compute_eccentricities, EccentricityTable};
use crate::models::{ComponentId, NodeId, WeightedGraph};
use crate::{GraphError, Result};

/// Default absolute tolerance for center membership.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Center computation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CenterConfig {
    /// A node belongs to the center when its eccentricity is within this
    /// distance of the minimum. Zero, negative or NaN means exact equality.
    pub tolerance: f64,
}

impl Default for CenterConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl CenterConfig {
    /// Create new center configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set tie tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    fn ties(&self, value: f64, min: f64) -> bool {
        value == min || (value - min).abs() < self.tolerance
    }
}

/// Outcome of [`CenterFinder::find_center`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenterResult {
    /// Smallest eccentricity in the graph.
    pub min_eccentricity: f64,
    /// Every node at the minimum, in graph insertion order.
    pub center: Vec<NodeId>,
    /// Eccentricity of every node.
    pub eccentricities: EccentricityTable,
}

impl CenterResult {
    /// Names of the center nodes.
    pub fn center_names(&self) -> Vec<&str> {
        self.center
            .iter()
            .filter_map(|&id| self.eccentricities.name(id))
            .collect()
    }

    /// Check if a node is part of the center.
    pub fn is_center(&self, node: NodeId) -> bool {
        self.center.contains(&node)
    }
}

/// Best site within one connected component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentCenter {
    /// Component label.
    pub component: ComponentId,
    /// Members of the component, in graph insertion order.
    pub nodes: Vec<NodeId>,
    /// Smallest eccentricity measured inside the component.
    pub min_eccentricity: f64,
    /// Members at that minimum.
    pub center: Vec<NodeId>,
}

impl ComponentCenter {
    /// Number of nodes in the component.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }
}

/// Computes graph centers for a borrowed graph.
///
/// The graph is borrowed immutably for the finder's lifetime, so it cannot
/// change while a computation runs.
#[derive(Debug, Clone)]
pub struct CenterFinder<'g> {
    graph: &'g WeightedGraph,
    config: CenterConfig,
}

impl<'g> CenterFinder<'g> {
    /// Create a finder with the default configuration.
    pub fn new(graph: &'g WeightedGraph) -> Self {
        Self::with_config(graph, CenterConfig::default())
    }

    /// Create a finder with an explicit configuration.
    pub fn with_config(graph: &'g WeightedGraph, config: CenterConfig) -> Self {
        Self { graph, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &CenterConfig {
        &self.config
    }

    /// The graph under analysis.
    pub fn graph(&self) -> &'g WeightedGraph {
        self.graph
    }

    /// Distances from the named node to every node it reaches.
    pub fn shortest_paths_from(&self, source: &str) -> Result<ShortestPaths> {
        let id = self
            .graph
            .node_id(source)
            .ok_or_else(|| GraphError::UnknownNode(source.to_string()))?;
        shortest_paths_from(self.graph, id)
    }

    /// Eccentricity of every node.
    pub fn compute_eccentricities(&self) -> Result<EccentricityTable> {
        compute_eccentricities(self.graph)
    }

    /// Find the graph center.
    ///
    /// Fails with [`GraphError::EmptyGraph`] when there are no nodes and with
    /// [`GraphError::NoCenterExists`] when no node reaches every other node.
    pub fn find_center(&self) -> Result<CenterResult> {
        if self.graph.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let eccentricities = self.compute_eccentricities()?;

        let Some(min_eccentricity) = eccentricities.min_defined() else {
            return Err(GraphError::NoCenterExists {
                nodes: self.graph.node_count(),
                components: self.graph.component_count(),
            });
        };

        let center: Vec<NodeId> = eccentricities
            .iter()
            .filter(|e| {
                e.eccentricity
                    .value()
                    .is_some_and(|v| self.config.ties(v, min_eccentricity))
            })
            .map(|e| e.node)
            .collect();

        tracing::debug!(
            min_eccentricity,
            center_size = center.len(),
            "graph center found"
        );

        Ok(CenterResult {
            min_eccentricity,
            center,
            eccentricities,
        })
    }

    /// Same as [`find_center`](Self::find_center).
    pub fn compute(&self) -> Result<CenterResult> {
        self.find_center()
    }

    /// Center of every connected component, ordered by component id.
    ///
    /// Eccentricities here only count nodes inside the component, so the
    /// result is defined for any non-empty graph. For a connected graph the
    /// single entry agrees with [`find_center`](Self::find_center).
    pub fn find_component_centers(&self) -> Result<Vec<ComponentCenter>> {
        if self.graph.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let labels = self.graph.component_count();
        let components = self.graph.components();
        let mut local: Vec<Vec<(NodeId, f64)>> = vec![Vec::new(); labels];

        for (id, _) in self.graph.nodes() {
            let paths = shortest_paths_from(self.graph, id)?;
            local[components[id.index()].get() as usize].push((id, paths.max_distance()));
        }

        let centers = local
            .into_iter()
            .enumerate()
            .map(|(label, members)| {
                let min_eccentricity = members
                    .iter()
                    .map(|&(_, ecc)| ecc)
                    .min_by(f64::total_cmp)
                    .unwrap_or(0.0);
                let center = members
                    .iter()
                    .filter(|&&(_, ecc)| self.config.ties(ecc, min_eccentricity))
                    .map(|&(id, _)| id)
                    .collect();

                ComponentCenter {
                    component: ComponentId::new(label as u32),
                    nodes: members.iter().map(|&(id, _)| id).collect(),
                    min_eccentricity,
                    center,
                }
            })
            .collect();

        Ok(centers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Eccentricity;

    fn graph_from(nodes: &[&str], edges: &[(&str, &str, f64)]) -> WeightedGraph {
        let mut g = WeightedGraph::new();
        for &name in nodes {
            g.add_node(name, None);
        }
        for &(a, b, w) in edges {
            g.add_edge(a, b, w).unwrap();
        }
        g
    }

    #[test]
    fn test_single_edge_both_endpoints_are_center() {
        let g = graph_from(&["A", "B"], &[("A", "B", 2.0)]);
        let result = CenterFinder::new(&g).find_center().unwrap();

        assert_eq!(result.min_eccentricity, 2.0);
        assert_eq!(result.center_names(), vec!["A", "B"]);
    }

    #[test]
    fn test_star_center_is_hub() {
        let g = graph_from(
            &["hub", "n", "e", "s", "w"],
            &[
                ("hub", "n", 1.0),
                ("hub", "e", 2.0),
                ("hub", "s", 1.5),
                ("hub", "w", 1.0),
            ],
        );
        let result = CenterFinder::new(&g).compute().unwrap();

        assert_eq!(result.center_names(), vec!["hub"]);
        assert_eq!(result.min_eccentricity, 2.0);
        assert!(result.is_center(NodeId(0)));
        assert!(!result.is_center(NodeId(2)));
    }

    #[test]
    fn test_tolerance_absorbs_rounding_noise() {
        // L -0.1- L2 -0.2- X -0.4- Y -0.3- R
        // X and Y are both 0.7 away from their farthest node, but Y's sum is
        // accumulated as (0.4 + 0.2) + 0.1 = 0.7000000000000001.
        let g = graph_from(
            &["L", "L2", "X", "Y", "R"],
            &[
                ("L", "L2", 0.1),
                ("L2", "X", 0.2),
                ("X", "Y", 0.4),
                ("Y", "R", 0.3),
            ],
        );

        let result = CenterFinder::new(&g).find_center().unwrap();
        assert_eq!(result.center_names(), vec!["X", "Y"]);
        assert_eq!(result.min_eccentricity, 0.7);

        let exact = CenterFinder::with_config(&g, CenterConfig::new().with_tolerance(0.0))
            .find_center()
            .unwrap();
        assert_eq!(exact.center_names(), vec!["X"]);

        let loose = CenterFinder::with_config(&g, CenterConfig::new().with_tolerance(0.25))
            .find_center()
            .unwrap();
        assert_eq!(loose.center_names(), vec!["L2", "X", "Y"]);
    }

    #[test]
    fn test_empty_graph() {
        let g = WeightedGraph::new();
        let finder = CenterFinder::new(&g);
        assert_eq!(finder.find_center(), Err(GraphError::EmptyGraph));
        assert_eq!(finder.find_component_centers(), Err(GraphError::EmptyGraph));
    }

    #[test]
    fn test_no_center_when_disconnected() {
        let g = graph_from(&["A", "B", "C"], &[("A", "B", 1.0)]);
        let finder = CenterFinder::new(&g);

        assert_eq!(
            finder.find_center(),
            Err(GraphError::NoCenterExists {
                nodes: 3,
                components: 2
            })
        );

        let table = finder.compute_eccentricities().unwrap();
        assert_eq!(
            table.get_by_name("C"),
            Some(Eccentricity::Undefined { reachable: 1 })
        );
    }

    #[test]
    fn test_component_centers() {
        // A -1- B -1- C      D -3- E
        let g = graph_from(
            &["A", "B", "C", "D", "E"],
            &[("A", "B", 1.0), ("B", "C", 1.0), ("D", "E", 3.0)],
        );
        let centers = CenterFinder::new(&g).find_component_centers().unwrap();

        assert_eq!(centers.len(), 2);

        assert_eq!(centers[0].component, ComponentId(0));
        assert_eq!(centers[0].size(), 3);
        assert_eq!(centers[0].center, vec![NodeId(1)]);
        assert_eq!(centers[0].min_eccentricity, 1.0);

        assert_eq!(centers[1].nodes, vec![NodeId(3), NodeId(4)]);
        assert_eq!(centers[1].center, vec![NodeId(3), NodeId(4)]);
        assert_eq!(centers[1].min_eccentricity, 3.0);
    }

    #[test]
    fn test_isolated_node_is_its_own_component_center() {
        let g = graph_from(&["A", "B", "lonely"], &[("A", "B", 1.0)]);
        let centers = CenterFinder::new(&g).find_component_centers().unwrap();

        assert_eq!(centers[1].center, vec![NodeId(2)]);
        assert_eq!(centers[1].min_eccentricity, 0.0);
    }

    #[test]
    fn test_component_centers_agree_with_center_when_connected() {
        let g = graph_from(
            &["A", "B", "C"],
            &[("A", "B", 1.0), ("B", "C", 1.0), ("A", "C", 3.0)],
        );
        let finder = CenterFinder::new(&g);
        let global = finder.find_center().unwrap();
        let local = finder.find_component_centers().unwrap();

        assert_eq!(local.len(), 1);
        assert_eq!(local[0].center, global.center);
        assert_eq!(local[0].min_eccentricity, global.min_eccentricity);
    }

    #[test]
    fn test_shortest_paths_by_name() {
        let g = graph_from(&["A", "B"], &[("A", "B", 2.0)]);
        let finder = CenterFinder::new(&g);

        let paths = finder.shortest_paths_from("B").unwrap();
        assert_eq!(paths.get(NodeId(0)), Some(2.0));

        assert_eq!(
            finder.shortest_paths_from("nowhere"),
            Err(GraphError::UnknownNode("nowhere".into()))
        );
    }
}
