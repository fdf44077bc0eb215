//! Domain model types for tour planning.
//!
//! Provides the core abstractions: a directed weighted road network over
//! integer-indexed intersections, and closed tours through that network.

mod graph;
mod tour;

pub use graph::{Edge, RoadNetwork};
pub use tour::Tour;
