//! Exhaustive minimum-tour search.
//!
//! Scores every waypoint ordering against precomputed shortest-path trees
//! and keeps the shortest closed tour. Exact and exponential in the number
//! of waypoints; the boundary layer caps the waypoint count to keep the
//! search tractable.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{RoadNetwork, Tour};
use crate::permutation::permutations;
use crate::shortest_path::{shortest_paths, ShortestPathTree};

/// Finds the shortest closed tour from `start` through all `waypoints` and
/// back, or `None` if every ordering has an unreachable leg.
///
/// One shortest-path tree is computed per distinct source in
/// `{start} ∪ waypoints` (at most L+1 Dijkstra runs), then every
/// permutation of the waypoints is scored by summing leg distances from
/// those trees. A permutation is abandoned at its first unreachable leg.
/// Among equal-length tours the first one in lexicographic enumeration
/// order wins, so results are reproducible.
///
/// Total work is O(L! · L) table lookups plus the tree builds; callers
/// are expected to keep L small.
///
/// # Panics
///
/// Panics if `start` or any waypoint is not a valid intersection index.
///
/// # Examples
///
/// ```
/// use roundtrip::models::RoadNetwork;
/// use roundtrip::optimizer::find_minimum_tour;
///
/// // A one-way ring: 0 → 1 → 2 → 0.
/// let mut network = RoadNetwork::new(3);
/// network.add_road(0, 1, 1);
/// network.add_road(1, 2, 1);
/// network.add_road(2, 0, 1);
///
/// let tour = find_minimum_tour(&network, 0, &[1, 2]).expect("ring is connected");
/// assert_eq!(tour.length(), 3);
/// assert_eq!(tour.stops(), &[0, 1, 2, 0]);
/// ```
pub fn find_minimum_tour(network: &RoadNetwork, start: usize, waypoints: &[usize]) -> Option<Tour> {
    let mut trees: HashMap<usize, ShortestPathTree> = HashMap::new();
    for &source in std::iter::once(&start).chain(waypoints) {
        trees
            .entry(source)
            .or_insert_with(|| shortest_paths(network, source));
    }
    debug!(
        sources = trees.len(),
        waypoints = waypoints.len(),
        "precomputed shortest-path trees"
    );

    let mut best: Option<(Vec<usize>, u64)> = None;
    for ordering in permutations(waypoints) {
        let Some(total) = tour_length(&trees, start, &ordering) else {
            continue;
        };
        if best.as_ref().is_none_or(|(_, length)| total < *length) {
            debug!(length = total, order = ?ordering, "new best tour");
            best = Some((ordering, total));
        }
    }

    best.map(|(ordering, length)| Tour::new(start, ordering, length))
}

/// Sums the legs start → ordering… → start, or `None` at the first
/// unreachable leg.
fn tour_length(
    trees: &HashMap<usize, ShortestPathTree>,
    start: usize,
    ordering: &[usize],
) -> Option<u64> {
    let mut current = start;
    let mut total: u64 = 0;
    for &waypoint in ordering {
        total += trees[&current].distance(waypoint)?;
        current = waypoint;
    }
    total += trees[&current].distance(start)?;
    Some(total)
}

/// Expands a tour's stop sequence into the complete node-by-node route by
/// concatenating per-leg shortest paths.
///
/// Returns `None` if any leg has no path (only possible for tours not
/// produced by [`find_minimum_tour`] on the same network).
///
/// # Examples
///
/// ```
/// use roundtrip::models::RoadNetwork;
/// use roundtrip::optimizer::{expand_tour, find_minimum_tour};
///
/// let mut network = RoadNetwork::new(3);
/// network.add_road(0, 1, 1);
/// network.add_road(1, 2, 1);
/// network.add_road(2, 0, 1);
///
/// let tour = find_minimum_tour(&network, 0, &[2]).expect("connected");
/// assert_eq!(expand_tour(&network, &tour), Some(vec![0, 1, 2, 0]));
/// ```
pub fn expand_tour(network: &RoadNetwork, tour: &Tour) -> Option<Vec<usize>> {
    let stops = tour.stops();
    let mut route = vec![stops[0]];
    for leg in stops.windows(2) {
        let tree = shortest_paths(network, leg[0]);
        let path = tree.path_to(leg[1])?;
        route.extend_from_slice(&path[1..]);
    }
    Some(route)
}
