//! Disjoint sets over node ids.
//!
//! Tracks which locations share a road network. Used to label connected
//! components when the graph is disconnected and no global center exists.

use crate::models::{ComponentId, NodeId};

/// Union-find with path halving and union by size.
#[derive(Debug, Clone)]
pub struct UnionFind {
    /// `parent[i] == i` for roots.
    parent: Vec<u32>,
    /// Set size, valid only at roots.
    size: Vec<usize>,
    num_components: usize,
}

impl UnionFind {
    /// One singleton set per node.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
            size: vec![1; n],
            num_components: n,
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Representative of the set containing `x`.
    pub fn find(&mut self, x: NodeId) -> NodeId {
        let mut node = x.index();
        while self.parent[node] as usize != node {
            let grandparent = self.parent[self.parent[node] as usize];
            self.parent[node] = grandparent;
            node = grandparent as usize;
        }
        NodeId::from(node)
    }

    /// Merge the sets containing `x` and `y`, smaller under larger.
    ///
    /// Returns false if they were already in the same set.
    pub fn union(&mut self, x: NodeId, y: NodeId) -> bool {
        let (mut big, mut small) = (self.find(x), self.find(y));
        if big == small {
            return false;
        }
        if self.size[big.index()] < self.size[small.index()] {
            std::mem::swap(&mut big, &mut small);
        }

        self.parent[small.index()] = big.get();
        self.size[big.index()] += self.size[small.index()];
        self.num_components -= 1;
        true
    }

    /// Check if two nodes share a set.
    pub fn connected(&mut self, x: NodeId, y: NodeId) -> bool {
        self.find(x) == self.find(y)
    }

    /// Size of the set containing `x`.
    pub fn component_size(&mut self, x: NodeId) -> usize {
        let root = self.find(x);
        self.size[root.index()]
    }

    /// Dense component label for every node.
    ///
    /// Labels are 0, 1, 2, ... in order of each set's lowest node id, so a
    /// graph's first inserted node is always in component 0.
    pub fn component_ids(&mut self) -> Vec<ComponentId> {
        let n = self.parent.len();
        let mut labels = vec![ComponentId::UNASSIGNED; n];
        let mut next = 0u32;

        for i in 0..n {
            let root = self.find(NodeId::from(i)).index();
            if !labels[root].is_assigned() {
                labels[root] = ComponentId::new(next);
                next += 1;
            }
            labels[i] = labels[root];
        }

        labels
    }
}
