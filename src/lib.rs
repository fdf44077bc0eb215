//! # roundtrip
//!
//! Route planning over weighted directed road networks: find the shortest
//! closed tour that starts at a designated intersection, visits a small set
//! of mandatory waypoints, and returns to the start.
//!
//! The search is exact: all waypoint orderings are enumerated and scored
//! with Dijkstra shortest paths, which is why the boundary layer caps the
//! waypoint count at [`plan::MAX_WAYPOINTS`].
//!
//! ## Modules
//!
//! - [`models`] — Domain types (RoadNetwork, Edge, Tour)
//! - [`shortest_path`] — Single-source Dijkstra with path reconstruction
//! - [`permutation`] — Lazy lexicographic permutation enumeration
//! - [`optimizer`] — Exhaustive minimum-tour search
//! - [`plan`] — Boundary layer: names, text parsing, policy, formatting

pub mod models;
pub mod optimizer;
pub mod permutation;
pub mod plan;
pub mod shortest_path;
