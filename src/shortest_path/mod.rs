//! Single-source shortest paths over a road network.
//!
//! Provides a binary-heap Dijkstra implementation producing a
//! [`ShortestPathTree`] with per-node distances and reconstructable paths.

mod dijkstra;

pub use dijkstra::{shortest_paths, ShortestPathTree};
