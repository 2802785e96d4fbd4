//! Graph data models.
//!
//! This module provides the core data structures for representing road networks:
//! - [`WeightedGraph`]: Undirected graph of named locations and weighted roads
//! - [`NodeId`], [`ComponentId`]: Dense index types

pub mod graph;
pub mod node;

pub use graph::{Coordinate, Edge, Node, WeightedGraph};
pub use node::{ComponentId, NodeId};
