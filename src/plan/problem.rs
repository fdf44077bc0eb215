//! Problem parsing, validation, and solving.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::RoadNetwork;
use crate::optimizer::find_minimum_tour;

use super::{NameRegistry, PlanError};

/// Operational maximum for the waypoint count.
///
/// The optimizer is exact and exponential in the waypoint count, so larger
/// queries are rejected here before any core computation starts.
pub const MAX_WAYPOINTS: usize = 6;

/// A validated tour-planning query: road network, name registry, start
/// intersection, and waypoint list, all resolved to indices.
///
/// Built either from the text problem format via [`Problem::parse`] or
/// programmatically via [`Problem::new`].
///
/// # Examples
///
/// ```
/// use roundtrip::plan::Problem;
///
/// let input = "\
/// 3 3
/// X Y Z
/// X Y 1
/// Y Z 1
/// Z X 1
/// X 2
/// Y Z";
/// let problem = Problem::parse(input).unwrap();
/// let plan = problem.solve().unwrap();
/// assert_eq!(plan.length(), 3);
/// assert_eq!(plan.stop_names(), ["X", "Y", "Z", "X"]);
/// ```
#[derive(Debug, Clone)]
pub struct Problem {
    network: RoadNetwork,
    registry: NameRegistry,
    start: usize,
    waypoints: Vec<usize>,
}

impl Problem {
    /// Builds a query from an already-constructed network and registry.
    ///
    /// The waypoint cap is enforced first, then the start and waypoint
    /// names are resolved. Duplicate waypoint names are allowed (the tour
    /// must then stop there more than once).
    pub fn new(
        network: RoadNetwork,
        registry: NameRegistry,
        start_name: &str,
        waypoint_names: &[&str],
    ) -> Result<Self, PlanError> {
        if registry.len() != network.num_nodes() {
            return Err(PlanError::Malformed(format!(
                "{} registered names for {} intersections",
                registry.len(),
                network.num_nodes()
            )));
        }
        if waypoint_names.len() > MAX_WAYPOINTS {
            return Err(PlanError::TooManyWaypoints {
                count: waypoint_names.len(),
                max: MAX_WAYPOINTS,
            });
        }
        let start = resolve(&registry, start_name)?;
        let waypoints = waypoint_names
            .iter()
            .map(|name| resolve(&registry, name))
            .collect::<Result<Vec<usize>, PlanError>>()?;
        Ok(Self {
            network,
            registry,
            start,
            waypoints,
        })
    }

    /// Parses the whitespace-separated text problem format:
    ///
    /// ```text
    /// N M
    /// <N intersection names>
    /// <M roads: from to length>
    /// <start name> L
    /// <L waypoint names>
    /// ```
    ///
    /// Any deviation (missing tokens, unparsable numbers, duplicate
    /// intersection names, trailing input) is a [`PlanError::Malformed`];
    /// road endpoints and waypoints naming unregistered intersections are
    /// [`PlanError::UnknownName`].
    pub fn parse(input: &str) -> Result<Self, PlanError> {
        let mut tokens = input.split_whitespace();

        let num_nodes = next_count(&mut tokens, "intersection count")?;
        let num_roads = next_count(&mut tokens, "road count")?;

        let mut registry = NameRegistry::new();
        for _ in 0..num_nodes {
            let name = next_token(&mut tokens, "intersection name")?;
            if registry.insert(name).is_none() {
                return Err(PlanError::Malformed(format!(
                    "duplicate intersection name: {name}"
                )));
            }
        }

        let mut network = RoadNetwork::new(num_nodes);
        for _ in 0..num_roads {
            let from = resolve(&registry, next_token(&mut tokens, "road source")?)?;
            let to = resolve(&registry, next_token(&mut tokens, "road destination")?)?;
            let length = next_length(&mut tokens)?;
            network.add_road(from, to, length);
        }

        let start_name = next_token(&mut tokens, "start name")?;
        let num_waypoints = next_count(&mut tokens, "waypoint count")?;
        let mut waypoint_names = Vec::with_capacity(num_waypoints.min(MAX_WAYPOINTS + 1));
        for _ in 0..num_waypoints {
            waypoint_names.push(next_token(&mut tokens, "waypoint name")?);
        }

        if let Some(extra) = tokens.next() {
            return Err(PlanError::Malformed(format!(
                "unexpected trailing input: {extra}"
            )));
        }

        Self::new(network, registry, start_name, &waypoint_names)
    }

    /// Runs the tour search and renders the result with display names.
    pub fn solve(&self) -> Result<TourPlan, PlanError> {
        debug!(
            start = self.start,
            waypoints = self.waypoints.len(),
            "solving tour query"
        );
        let tour = find_minimum_tour(&self.network, self.start, &self.waypoints)
            .ok_or(PlanError::NoValidTour)?;
        let stop_names = tour
            .stops()
            .iter()
            .map(|&index| {
                self.registry
                    .name_of(index)
                    .expect("tour stops come from the registry")
                    .to_string()
            })
            .collect();
        Ok(TourPlan {
            length: tour.length(),
            stop_names,
        })
    }

    /// The road network of this query.
    pub fn network(&self) -> &RoadNetwork {
        &self.network
    }

    /// The name registry of this query.
    pub fn registry(&self) -> &NameRegistry {
        &self.registry
    }

    /// Start intersection index.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Waypoint intersection indices, in input order.
    pub fn waypoints(&self) -> &[usize] {
        &self.waypoints
    }
}

fn resolve(registry: &NameRegistry, name: &str) -> Result<usize, PlanError> {
    registry
        .index_of(name)
        .ok_or_else(|| PlanError::UnknownName(name.to_string()))
}

fn next_token<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<&'a str, PlanError> {
    tokens
        .next()
        .ok_or_else(|| PlanError::Malformed(format!("missing {what}")))
}

fn next_count<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<usize, PlanError> {
    let token = next_token(tokens, what)?;
    token
        .parse()
        .map_err(|_| PlanError::Malformed(format!("invalid {what}: {token}")))
}

fn next_length<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<u64, PlanError> {
    let token = next_token(tokens, "road length")?;
    token
        .parse()
        .map_err(|_| PlanError::Malformed(format!("invalid road length: {token}")))
}

/// A solved tour, rendered with display names.
///
/// `Display` matches the classic report format:
///
/// ```text
/// Shortest tour length: 3
/// Tour order: X Y Z X
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourPlan {
    length: u64,
    stop_names: Vec<String>,
}

impl TourPlan {
    /// Total tour length.
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Stop names in visiting order: start, waypoints, start.
    pub fn stop_names(&self) -> &[String] {
        &self.stop_names
    }
}

impl fmt::Display for TourPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shortest tour length: {}\nTour order: {}",
            self.length,
            self.stop_names.join(" ")
        )
    }
}
