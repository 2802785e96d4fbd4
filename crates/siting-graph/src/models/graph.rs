//! Undirected weighted graph of named locations.
//!
//! Storage is an adjacency list indexed by [`NodeId`]:
//! - `nodes[i]` = name and optional coordinate of node i
//! - `adjacency[i]` = incident edges of node i, one [`Edge`] per neighbor
//!
//! Every undirected edge is stored twice, once in each endpoint's list, with
//! the same weight. `edge_count` counts unordered pairs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::node::{ComponentId, NodeId};
use crate::algorithms::union_find::UnionFind;
use crate::{EdgeFault, GraphError, Result};

/// 2D position of a node. Only used for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    /// Create a new coordinate.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A named location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier.
    pub name: String,
    /// Position for diagrams, if known.
    pub coordinate: Option<Coordinate>,
}

/// Adjacency entry: the far endpoint and the road length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: NodeId,
    pub weight: f64,
}

/// Undirected, positively weighted graph.
///
/// Nodes keep their insertion order, which is also the iteration order of
/// every derived table.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl WeightedGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, or update the coordinate of an existing one.
    ///
    /// Returns the node's id. Re-adding a name never creates a second node.
    pub fn add_node(&mut self, name: impl Into<String>, coordinate: Option<Coordinate>) -> NodeId {
        let name = name.into();
        if let Some(&id) = self.index.get(&name) {
            self.nodes[id.index()].coordinate = coordinate;
            return id;
        }

        let id = NodeId::from(self.nodes.len());
        self.index.insert(name.clone(), id);
        self.nodes.push(Node { name, coordinate });
        self.adjacency.push(Vec::new());
        id
    }

    /// Connect two existing nodes with a road of the given length.
    ///
    /// Replaces the weight if the pair is already connected. Endpoints are
    /// never created here; unknown names are rejected and the graph is left
    /// unchanged on any error.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<()> {
        let invalid = |fault: EdgeFault| GraphError::InvalidEdge {
            from: from.to_string(),
            to: to.to_string(),
            fault,
        };

        if from == to {
            return Err(invalid(EdgeFault::SelfLoop));
        }
        if !(weight.is_finite() && weight > 0.0) {
            return Err(invalid(EdgeFault::InvalidWeight(weight)));
        }

        let u = self
            .node_id(from)
            .ok_or_else(|| invalid(EdgeFault::UnknownEndpoint(from.to_string())))?;
        let v = self
            .node_id(to)
            .ok_or_else(|| invalid(EdgeFault::UnknownEndpoint(to.to_string())))?;

        let replaced = Self::upsert(&mut self.adjacency[u.index()], v, weight);
        Self::upsert(&mut self.adjacency[v.index()], u, weight);
        if !replaced {
            self.edge_count += 1;
        }

        tracing::trace!(from, to, weight, replaced, "edge stored");
        Ok(())
    }

    /// Set the weight towards `to`, returning true if an entry already existed.
    fn upsert(edges: &mut Vec<Edge>, to: NodeId, weight: f64) -> bool {
        match edges.iter_mut().find(|e| e.to == to) {
            Some(edge) => {
                edge.weight = weight;
                true
            }
            None => {
                edges.push(Edge { to, weight });
                false
            }
        }
    }

    /// Neighbors of a node by name, with road lengths.
    ///
    /// Empty for isolated or unknown nodes.
    pub fn neighbors<'a>(&'a self, name: &str) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        let edges: &[Edge] = match self.node_id(name) {
            Some(id) => &self.adjacency[id.index()],
            None => &[],
        };
        edges
            .iter()
            .map(move |e| (self.nodes[e.to.index()].name.as_str(), e.weight))
    }

    /// Incident edges of a node by id (empty if out of range).
    pub fn edges_of(&self, node: NodeId) -> &[Edge] {
        self.adjacency
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Weight of the road between two nodes, if they are adjacent.
    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        let u = self.node_id(from)?;
        let v = self.node_id(to)?;
        self.adjacency[u.index()]
            .iter()
            .find(|e| e.to == v)
            .map(|e| e.weight)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True iff the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check if a node with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Look up a node id by name.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Name of a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.index()].name
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::from(i), node))
    }

    /// Every undirected edge exactly once, as `(lower id, higher id, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(i, edges)| {
            let from = NodeId::from(i);
            edges
                .iter()
                .filter(move |e| from < e.to)
                .map(move |e| (from, e.to, e.weight))
        })
    }

    fn road_networks(&self) -> UnionFind {
        let mut uf = UnionFind::new(self.node_count());
        for (u, v, _) in self.edges() {
            uf.union(u, v);
        }
        uf
    }

    /// Connected component of every node, indexed by [`NodeId`].
    pub fn components(&self) -> Vec<ComponentId> {
        self.road_networks().component_ids()
    }

    /// Number of connected components (0 for an empty graph).
    pub fn component_count(&self) -> usize {
        self.road_networks().num_components()
    }
}
