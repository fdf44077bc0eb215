//! Boundary error type.

use thiserror::Error;

/// Errors surfaced by the planning boundary.
///
/// All variants are terminal for the current query; nothing is retried or
/// silently defaulted. An unreachable intersection inside the core is not
/// an error (the solver reports it through `Option`); only the final
/// "no ordering works at all" outcome becomes [`PlanError::NoValidTour`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// A name was looked up that no intersection carries.
    #[error("unknown intersection name: {0}")]
    UnknownName(String),
    /// The waypoint count exceeds the operational maximum.
    #[error("too many waypoints: {count} (maximum {max})")]
    TooManyWaypoints {
        /// Requested waypoint count.
        count: usize,
        /// Operational maximum.
        max: usize,
    },
    /// The problem text did not match the expected format.
    #[error("malformed problem input: {0}")]
    Malformed(String),
    /// Every waypoint ordering has at least one unreachable leg.
    #[error("no valid tour found")]
    NoValidTour,
}
