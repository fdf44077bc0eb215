//! Boundary layer: names, parsing, policy, and result formatting.
//!
//! The solver core is purely index-based. This module owns everything that
//! deals with the outside world: the bidirectional name↔index registry,
//! parsing of the text problem format, the operational waypoint cap, and
//! rendering results with display names.

mod error;
mod problem;
mod registry;

pub use error::PlanError;
pub use problem::{Problem, TourPlan, MAX_WAYPOINTS};
pub use registry::NameRegistry;
