//! Road network and edge types.

/// A directed road leaving an intersection.
///
/// Stored in the outgoing adjacency list of its source node; the source
/// index is implicit in where the edge is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Destination intersection index.
    pub to: usize,
    /// Road length (non-negative by construction).
    pub length: u64,
}

/// A weighted directed road network over `n` intersections.
///
/// Intersections are identified by indices in `0..n`. Roads are directed:
/// adding a road A→B says nothing about B→A. The network is built once by
/// appending roads and is read-only for the duration of a query (all solver
/// APIs take `&RoadNetwork`).
///
/// # Examples
///
/// ```
/// use roundtrip::models::RoadNetwork;
///
/// let mut network = RoadNetwork::new(3);
/// network.add_road(0, 1, 5);
/// network.add_road(1, 2, 7);
/// assert_eq!(network.num_nodes(), 3);
/// assert_eq!(network.roads_from(0).len(), 1);
/// assert_eq!(network.roads_from(2).len(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct RoadNetwork {
    adjacency: Vec<Vec<Edge>>,
}

impl RoadNetwork {
    /// Creates a network with `num_nodes` intersections and no roads.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); num_nodes],
        }
    }

    /// Appends a directed road from `from` to `to` with the given length.
    ///
    /// Parallel roads between the same pair are allowed; each is kept.
    ///
    /// # Panics
    ///
    /// Panics if `from` or `to` is not a valid intersection index.
    pub fn add_road(&mut self, from: usize, to: usize, length: u64) {
        assert!(
            to < self.adjacency.len(),
            "road destination {to} out of range"
        );
        self.adjacency[from].push(Edge { to, length });
    }

    /// Returns the roads leaving `node`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid intersection index.
    pub fn roads_from(&self, node: usize) -> &[Edge] {
        &self.adjacency[node]
    }

    /// Number of intersections in this network.
    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }
}
