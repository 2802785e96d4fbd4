//! Graph algorithms.
//!
//! This module provides the siting pipeline, leaf first:
//! - [`dijkstra`]: Single-source shortest paths
//! - [`eccentricity`]: Worst-case distance per node
//! - [`center`]: Minimum-eccentricity node set
//! - [`union_find`]: Disjoint set data structure

pub mod center;
pub mod dijkstra;
pub mod eccentricity;
pub mod union_find;

pub use center::{CenterConfig, CenterFinder, CenterResult, ComponentCenter};
pub use dijkstra::{shortest_paths_from, ShortestPaths};
pub use eccentricity::{compute_eccentricities, Eccentricity, EccentricityEntry, EccentricityTable};
pub use union_find::UnionFind;
