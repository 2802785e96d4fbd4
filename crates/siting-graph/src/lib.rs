//! Weighted road graphs and exact graph-center computation for facility siting.
//!
//! This crate answers one question: given locations connected by weighted
//! roads, which location(s) minimize the worst-case travel distance to every
//! other location? That set is the **graph center**. It includes:
//!
//! - **WeightedGraph**: Undirected, positively weighted graph with named nodes
//! - **Dijkstra**: Single-source shortest paths over a binary heap
//! - **Eccentricity**: Per-node worst-case distance, explicit about unreachable nodes
//! - **CenterFinder**: Minimum-eccentricity node set with configurable tie tolerance
//! - **Union-Find**: Connected component labelling for disconnected road networks
//!
//! # Example
//!
//! ```
//! use siting_graph::{CenterFinder, WeightedGraph};
//!
//! // A -1- B -1- C
//! let mut graph = WeightedGraph::new();
//! graph.add_node("A", None);
//! graph.add_node("B", None);
//! graph.add_node("C", None);
//! graph.add_edge("A", "B", 1.0).unwrap();
//! graph.add_edge("B", "C", 1.0).unwrap();
//!
//! let result = CenterFinder::new(&graph).find_center().unwrap();
//! assert_eq!(result.center_names(), vec!["B"]);
//! assert_eq!(result.min_eccentricity, 1.0);
//! ```

pub mod algorithms;
pub mod models;

// Re-export main types
pub use algorithms::center::{
    CenterConfig, CenterFinder, CenterResult, ComponentCenter, DEFAULT_TOLERANCE,
};
pub use algorithms::dijkstra::{shortest_paths_from, ShortestPaths};
pub use algorithms::eccentricity::{
    compute_eccentricities, Eccentricity, EccentricityEntry, EccentricityTable,
};
pub use algorithms::union_find::UnionFind;
pub use models::graph::{Coordinate, Edge, Node, WeightedGraph};
pub use models::node::{ComponentId, NodeId};

/// Reason an edge was rejected by [`WeightedGraph::add_edge`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EdgeFault {
    /// Both endpoints are the same node.
    #[error("self-loops are not allowed")]
    SelfLoop,

    /// Weight is zero, negative, NaN or infinite.
    #[error("weight must be positive and finite, got {0}")]
    InvalidWeight(f64),

    /// Endpoint is not a node of the graph.
    #[error("unknown endpoint '{0}'")]
    UnknownEndpoint(String),
}

/// Graph algorithm error types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// Edge rejected; the graph is left unchanged.
    #[error("Invalid edge {from}-{to}: {fault}")]
    InvalidEdge {
        from: String,
        to: String,
        fault: EdgeFault,
    },

    /// Node identifier not present in the graph.
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    /// Empty graph.
    #[error("Empty graph")]
    EmptyGraph,

    /// No node reaches every other node.
    #[error("No center exists: {nodes} nodes split across {components} disconnected components")]
    NoCenterExists { nodes: usize, components: usize },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
