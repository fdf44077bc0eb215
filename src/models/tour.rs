//! Closed tour type.

use serde::{Deserialize, Serialize};

/// A closed tour: the start intersection, a visiting order over the
/// waypoints, and a return to the start, with its total length.
///
/// Lengths are sums of shortest-path leg distances, so the stop sequence
/// records where the tour stops, not every intersection it drives through.
/// Use [`crate::optimizer::expand_tour`] to recover the full node-by-node
/// route.
///
/// # Examples
///
/// ```
/// use roundtrip::models::Tour;
///
/// let tour = Tour::new(0, vec![2, 1], 12);
/// assert_eq!(tour.stops(), &[0, 2, 1, 0]);
/// assert_eq!(tour.waypoint_order(), &[2, 1]);
/// assert_eq!(tour.length(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    stops: Vec<usize>,
    length: u64,
}

impl Tour {
    /// Creates a tour from a start node, a waypoint visiting order, and a
    /// total length. The stop sequence becomes start, waypoints, start.
    pub fn new(start: usize, waypoint_order: Vec<usize>, length: u64) -> Self {
        let mut stops = Vec::with_capacity(waypoint_order.len() + 2);
        stops.push(start);
        stops.extend(waypoint_order);
        stops.push(start);
        Self { stops, length }
    }

    /// The full stop sequence: start, waypoints in visiting order, start.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// The waypoint visiting order (stop sequence without the enclosing
    /// start node).
    pub fn waypoint_order(&self) -> &[usize] {
        &self.stops[1..self.stops.len() - 1]
    }

    /// The start (and end) intersection.
    pub fn start(&self) -> usize {
        self.stops[0]
    }

    /// Total tour length.
    pub fn length(&self) -> u64 {
        self.length
    }
}
