//! Binary-heap Dijkstra with lazy deletion.
//!
//! # Complexity
//!
//! O((N + E) log N) with N intersections and E roads. A node may sit in
//! the heap multiple times with different keys; stale entries are skipped
//! on extraction instead of being decreased in place.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::models::RoadNetwork;

/// Internal sentinel for "not reached"; never exposed through the API.
const UNREACHABLE: u64 = u64::MAX;

/// Shortest-path distances and predecessors from a fixed source node.
///
/// Produced by [`shortest_paths`]. Unreachable nodes report `None` rather
/// than a numeric sentinel.
///
/// # Examples
///
/// ```
/// use roundtrip::models::RoadNetwork;
/// use roundtrip::shortest_path::shortest_paths;
///
/// let mut network = RoadNetwork::new(3);
/// network.add_road(0, 1, 4);
/// network.add_road(1, 2, 6);
///
/// let tree = shortest_paths(&network, 0);
/// assert_eq!(tree.distance(0), Some(0));
/// assert_eq!(tree.distance(2), Some(10));
/// assert_eq!(tree.path_to(2), Some(vec![0, 1, 2]));
/// ```
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: usize,
    distances: Vec<u64>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPathTree {
    /// The source node all distances are measured from.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Shortest distance from the source to `node`, or `None` if no path
    /// exists.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid intersection index.
    pub fn distance(&self, node: usize) -> Option<u64> {
        match self.distances[node] {
            UNREACHABLE => None,
            d => Some(d),
        }
    }

    /// Reconstructs the shortest path from the source to `node`, inclusive
    /// of both endpoints, or `None` if `node` is unreachable.
    ///
    /// `path_to(source)` is the one-element path `[source]`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid intersection index.
    pub fn path_to(&self, node: usize) -> Option<Vec<usize>> {
        self.distance(node)?;

        let mut path = vec![node];
        let mut current = node;
        while let Some(prev) = self.predecessors[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Computes shortest distances from `source` to every node of `network`.
///
/// Road lengths are `u64`, so the non-negative-weight precondition of
/// Dijkstra's algorithm holds by construction. Ties between equal-length
/// relaxations are broken by road insertion order.
///
/// # Panics
///
/// Panics if `source` is not a valid intersection index.
pub fn shortest_paths(network: &RoadNetwork, source: usize) -> ShortestPathTree {
    let n = network.num_nodes();
    let mut distances = vec![UNREACHABLE; n];
    let mut predecessors = vec![None; n];
    let mut heap = BinaryHeap::new();

    distances[source] = 0;
    heap.push(Reverse((0u64, source)));

    while let Some(Reverse((dist, node))) = heap.pop() {
        // Stale entry: this node was already settled with a smaller key.
        if dist > distances[node] {
            continue;
        }
        for edge in network.roads_from(node) {
            let candidate = dist.saturating_add(edge.length);
            if candidate < distances[edge.to] {
                distances[edge.to] = candidate;
                predecessors[edge.to] = Some(node);
                heap.push(Reverse((candidate, edge.to)));
            }
        }
    }

    ShortestPathTree {
        source,
        distances,
        predecessors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Heap-free O(N²) Dijkstra used as a reference implementation.
    fn dense_shortest_paths(network: &RoadNetwork, source: usize) -> Vec<Option<u64>> {
        let n = network.num_nodes();
        let mut distances: Vec<Option<u64>> = vec![None; n];
        let mut settled = vec![false; n];
        distances[source] = Some(0);

        loop {
            let mut next: Option<(usize, u64)> = None;
            for node in 0..n {
                if settled[node] {
                    continue;
                }
                if let Some(d) = distances[node] {
                    if next.is_none() || d < next.expect("checked is_none").1 {
                        next = Some((node, d));
                    }
                }
            }
            let Some((node, dist)) = next else {
                break;
            };
            settled[node] = true;
            for edge in network.roads_from(node) {
                let candidate = dist.saturating_add(edge.length);
                if distances[edge.to].is_none_or(|d| candidate < d) {
                    distances[edge.to] = Some(candidate);
                }
            }
        }
        distances
    }

    fn line_network() -> RoadNetwork {
        // 0 → 1 → 2 → 3, plus a slow shortcut 0 → 2.
        let mut network = RoadNetwork::new(4);
        network.add_road(0, 1, 1);
        network.add_road(1, 2, 2);
        network.add_road(2, 3, 3);
        network.add_road(0, 2, 10);
        network
    }

    #[test]
    fn test_source_distance_is_zero() {
        let tree = shortest_paths(&line_network(), 0);
        assert_eq!(tree.distance(0), Some(0));
        assert_eq!(tree.source(), 0);
    }

    #[test]
    fn test_line_distances() {
        let tree = shortest_paths(&line_network(), 0);
        assert_eq!(tree.distance(1), Some(1));
        assert_eq!(tree.distance(2), Some(3));
        assert_eq!(tree.distance(3), Some(6));
    }

    #[test]
    fn test_unreachable_is_none() {
        let tree = shortest_paths(&line_network(), 3);
        assert_eq!(tree.distance(3), Some(0));
        assert_eq!(tree.distance(0), None);
        assert_eq!(tree.path_to(0), None);
    }

    #[test]
    fn test_directed_edges_not_mirrored() {
        let mut network = RoadNetwork::new(2);
        network.add_road(0, 1, 5);
        let tree = shortest_paths(&network, 1);
        assert_eq!(tree.distance(0), None);
    }

    #[test]
    fn test_path_to_source_is_singleton() {
        let tree = shortest_paths(&line_network(), 2);
        assert_eq!(tree.path_to(2), Some(vec![2]));
    }

    #[test]
    fn test_path_reconstruction() {
        let tree = shortest_paths(&line_network(), 0);
        assert_eq!(tree.path_to(3), Some(vec![0, 1, 2, 3]));
        // The slow 0 → 2 shortcut must not appear in the tree.
        assert_eq!(tree.path_to(2), Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_zero_weight_edges() {
        let mut network = RoadNetwork::new(3);
        network.add_road(0, 1, 0);
        network.add_road(1, 2, 0);
        let tree = shortest_paths(&network, 0);
        assert_eq!(tree.distance(2), Some(0));
        assert_eq!(tree.path_to(2), Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_parallel_roads_use_shortest() {
        let mut network = RoadNetwork::new(2);
        network.add_road(0, 1, 9);
        network.add_road(0, 1, 4);
        let tree = shortest_paths(&network, 0);
        assert_eq!(tree.distance(1), Some(4));
    }

    #[test]
    fn test_matches_dense_reference_on_cycle() {
        let mut network = RoadNetwork::new(5);
        network.add_road(0, 1, 2);
        network.add_road(1, 2, 2);
        network.add_road(2, 3, 2);
        network.add_road(3, 4, 2);
        network.add_road(4, 0, 2);
        network.add_road(0, 3, 7);
        for source in 0..5 {
            let tree = shortest_paths(&network, source);
            let dense = dense_shortest_paths(&network, source);
            for node in 0..5 {
                assert_eq!(tree.distance(node), dense[node]);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_heap_matches_dense_reference(
            n in 1usize..8,
            edges in proptest::collection::vec((0usize..8, 0usize..8, 0u64..100), 0..40),
        ) {
            let mut network = RoadNetwork::new(n);
            for (from, to, length) in edges {
                if from < n && to < n {
                    network.add_road(from, to, length);
                }
            }
            for source in 0..n {
                let tree = shortest_paths(&network, source);
                let dense = dense_shortest_paths(&network, source);
                for node in 0..n {
                    prop_assert_eq!(tree.distance(node), dense[node]);
                }
            }
        }

        #[test]
        fn prop_paths_are_edge_consistent(
            n in 1usize..8,
            edges in proptest::collection::vec((0usize..8, 0usize..8, 0u64..100), 0..40),
        ) {
            let mut network = RoadNetwork::new(n);
            for (from, to, length) in edges {
                if from < n && to < n {
                    network.add_road(from, to, length);
                }
            }
            let tree = shortest_paths(&network, 0);
            for node in 0..n {
                let Some(path) = tree.path_to(node) else { continue };
                prop_assert_eq!(*path.first().expect("path is non-empty"), 0);
                prop_assert_eq!(*path.last().expect("path is non-empty"), node);
                // Each leg must correspond to a real road whose length
                // accounts exactly for the distance increase.
                for leg in path.windows(2) {
                    let from_dist = tree.distance(leg[0]).expect("on path");
                    let to_dist = tree.distance(leg[1]).expect("on path");
                    let step = to_dist - from_dist;
                    let exists = network
                        .roads_from(leg[0])
                        .iter()
                        .any(|e| e.to == leg[1] && e.length == step);
                    prop_assert!(exists);
                }
            }
        }
    }
}
