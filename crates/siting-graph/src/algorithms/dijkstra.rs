//! Single-source shortest paths (Dijkstra).
//!
//! Computes road distances from one location to every location it can reach.
//! Edge weights are positive, so a binary min-heap with lazy deletion gives
//! O((V + E) log V) per source.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::models::{NodeId, WeightedGraph};
use crate::{GraphError, Result};

/// Heap entry: a node with its tentative distance.
///
/// Ordered so that `BinaryHeap` (a max-heap) pops the smallest distance first.
/// Equal distances pop the lower node id first.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    distance: f64,
    node: NodeId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Distances from one source to every node it reaches.
///
/// Unreachable nodes are absent rather than stored as infinity.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: NodeId,
    distances: HashMap<NodeId, f64>,
}

impl ShortestPaths {
    /// The source node.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Distance to `node`, or `None` if it is unreachable.
    pub fn get(&self, node: NodeId) -> Option<f64> {
        self.distances.get(&node).copied()
    }

    /// Check if `node` is reachable from the source.
    pub fn contains(&self, node: NodeId) -> bool {
        self.distances.contains_key(&node)
    }

    /// Number of reachable nodes, the source included.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Always false: the source reaches itself.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Reachable nodes and their distances, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.distances.iter().map(|(&node, &d)| (node, d))
    }

    /// Largest distance to any reachable node (0 when only the source is reachable).
    pub fn max_distance(&self) -> f64 {
        self.distances.values().copied().fold(0.0, f64::max)
    }

    /// The reachable node farthest from the source. Ties go to the lowest id.
    pub fn farthest(&self) -> Option<(NodeId, f64)> {
        self.iter()
            .max_by(|a, b| a.1.total_cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
    }
}

/// Dijkstra from `source` over the whole graph.
///
/// # Arguments
///
/// * `graph` - Road network
/// * `source` - Start node
///
/// # Returns
///
/// Distances to every reachable node. Fails with [`GraphError::EmptyGraph`]
/// on an empty graph and [`GraphError::UnknownNode`] when `source` is not a
/// node of `graph`.
pub fn shortest_paths_from(graph: &WeightedGraph, source: NodeId) -> Result<ShortestPaths> {
    let n = graph.node_count();
    if n == 0 {
        return Err(GraphError::EmptyGraph);
    }
    if source.index() >= n {
        return Err(GraphError::UnknownNode(format!("#{}", source.0)));
    }

    let mut dist = vec![f64::INFINITY; n];
    let mut visited = vec![false; n];
    let mut heap = BinaryHeap::new();
    let mut distances = HashMap::new();

    dist[source.index()] = 0.0;
    heap.push(HeapEntry {
        distance: 0.0,
        node: source,
    });

    while let Some(HeapEntry { distance, node }) = heap.pop() {
        let u = node.index();
        // Stale entry: a shorter distance was finalized already
        if visited[u] {
            continue;
        }
        visited[u] = true;
        distances.insert(node, distance);

        for edge in graph.edges_of(node) {
            let v = edge.to.index();
            if visited[v] {
                continue;
            }
            let candidate = distance + edge.weight;
            if candidate < dist[v] {
                dist[v] = candidate;
                heap.push(HeapEntry {
                    distance: candidate,
                    node: edge.to,
                });
            }
        }
    }

    Ok(ShortestPaths { source, distances })
}
