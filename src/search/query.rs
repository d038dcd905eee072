//! Dijkstra shortest-route queries over a [`LocationGraph`].
//!
//! Both queries settle locations in order of tentative distance, relaxing
//! every neighbor of each settled location. The distance-only query stops as
//! soon as the destination is settled; the route query drains the frontier
//! and then walks predecessor links back from the destination.
//!
//! # Complexity
//!
//! O((V + E) log E) per query, where E counts parallel edges separately.
//!
//! # Negative weights
//!
//! Negative weights are accepted. A settled location is never relaxed again,
//! so every query terminates, but the reported distance is then not
//! guaranteed to be minimal.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::Frontier;
use crate::distance::{DistanceTable, PredecessorTable};
use crate::error::{Result, RouteError};
use crate::graph::LocationGraph;
use crate::models::{Distance, Location, LocationId, ShortestRoute};

/// How a query treats a label that never appeared as an edge endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownLocationPolicy {
    /// Report [`RouteError::UnknownLocation`].
    #[default]
    Distinguish,
    /// Report [`RouteError::NoPath`], as if the label were an isolated
    /// location. A query from an unknown label to itself answers zero.
    Unreachable,
}

/// Scratch state of one search, discarded when the query returns.
struct Exploration {
    distances: DistanceTable,
    predecessors: PredecessorTable,
    settled: usize,
}

/// Borrowed query view over a location graph.
///
/// # Examples
///
/// ```
/// use rental_graph::error::RouteError;
/// use rental_graph::graph::LocationGraph;
/// use rental_graph::search::{RouteQuery, UnknownLocationPolicy};
///
/// let mut graph = LocationGraph::new();
/// graph.add_edge("A", "B", 5);
///
/// let strict = RouteQuery::new(&graph);
/// assert!(matches!(strict.distance("A", "D"), Err(RouteError::UnknownLocation(_))));
///
/// let lenient = RouteQuery::new(&graph).with_policy(UnknownLocationPolicy::Unreachable);
/// assert!(matches!(lenient.distance("A", "D"), Err(RouteError::NoPath { .. })));
/// assert_eq!(lenient.distance("D", "D"), Ok(0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteQuery<'g> {
    graph: &'g LocationGraph,
    policy: UnknownLocationPolicy,
}

impl<'g> RouteQuery<'g> {
    /// Creates a query view with the [`UnknownLocationPolicy::Distinguish`] policy.
    pub fn new(graph: &'g LocationGraph) -> Self {
        Self {
            graph,
            policy: UnknownLocationPolicy::default(),
        }
    }

    /// Sets the unknown-location policy.
    pub fn with_policy(mut self, policy: UnknownLocationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> UnknownLocationPolicy {
        self.policy
    }

    /// Minimum total distance from `source` to `destination`.
    ///
    /// Returns 0 when `source == destination` and the location is known.
    /// Stops as soon as the destination is extracted from the frontier.
    ///
    /// # Errors
    ///
    /// [`RouteError::NoPath`] if no chain of links connects the two, and
    /// [`RouteError::UnknownLocation`] for labels never inserted (under the
    /// default policy).
    pub fn distance(&self, source: &str, destination: &str) -> Result<Distance> {
        if source == destination && self.answers_unknown_identity(source) {
            return Ok(0);
        }
        let (from, to) = self.endpoints(source, destination)?;
        if from == to {
            return Ok(0);
        }

        let exploration = self.explore(from, Some(to));
        debug!(
            source,
            destination,
            settled = exploration.settled,
            "distance query finished"
        );
        exploration
            .distances
            .get(to)
            .ok_or_else(|| no_path(source, destination))
    }

    /// Minimum-distance route from `source` to `destination`.
    ///
    /// The returned route starts at `source`, ends at `destination`, and every
    /// consecutive pair is linked by an edge of the graph. When several routes
    /// share the minimum distance, the one found first wins: locations are
    /// settled in distance order with ties broken by label, and a predecessor
    /// is only replaced by a strictly shorter candidate.
    ///
    /// # Errors
    ///
    /// Same as [`distance`](Self::distance).
    pub fn route(&self, source: &str, destination: &str) -> Result<ShortestRoute> {
        if source == destination && self.answers_unknown_identity(source) {
            return Ok(ShortestRoute::new(vec![Location::new(source)], 0));
        }
        let (from, to) = self.endpoints(source, destination)?;
        if from == to {
            return Ok(ShortestRoute::new(vec![self.graph.location(from).clone()], 0));
        }

        let exploration = self.explore(from, None);
        debug!(
            source,
            destination,
            settled = exploration.settled,
            "route query finished"
        );
        let total = exploration
            .distances
            .get(to)
            .ok_or_else(|| no_path(source, destination))?;

        let locations = exploration
            .predecessors
            .path_to(to)
            .into_iter()
            .map(|id| self.graph.location(id).clone())
            .collect();
        Ok(ShortestRoute::new(locations, total))
    }

    fn answers_unknown_identity(&self, label: &str) -> bool {
        self.policy == UnknownLocationPolicy::Unreachable && !self.graph.contains(label)
    }

    fn endpoints(&self, source: &str, destination: &str) -> Result<(LocationId, LocationId)> {
        let resolve = |label: &str| {
            self.graph.id_of(label).ok_or_else(|| match self.policy {
                UnknownLocationPolicy::Distinguish => {
                    RouteError::UnknownLocation(Location::new(label))
                }
                UnknownLocationPolicy::Unreachable => no_path(source, destination),
            })
        };
        Ok((resolve(source)?, resolve(destination)?))
    }

    /// Runs Dijkstra from `source`, stopping once `target` is settled if given.
    fn explore(&self, source: LocationId, target: Option<LocationId>) -> Exploration {
        let size = self.graph.location_count();
        let mut distances = DistanceTable::new(size, source);
        let mut predecessors = PredecessorTable::new(size);
        let mut settled = vec![false; size];
        let mut settled_count = 0;

        let mut frontier = Frontier::new(self.graph);
        frontier.push(source, 0);

        while let Some((current, distance)) = frontier.pop() {
            if settled[current.index()] {
                continue;
            }
            settled[current.index()] = true;
            settled_count += 1;
            trace!(location = %self.graph.location(current), distance, "settled");

            if target == Some(current) {
                break;
            }

            for neighbor in self.graph.adjacent(current) {
                let next = neighbor.location;
                if settled[next.index()] {
                    continue;
                }
                let candidate = distance.saturating_add(neighbor.weight);
                if distances.improves(next, candidate) {
                    distances.set(next, candidate);
                    predecessors.set(next, current);
                    frontier.push(next, candidate);
                }
            }
        }

        Exploration {
            distances,
            predecessors,
            settled: settled_count,
        }
    }
}

fn no_path(source: &str, destination: &str) -> RouteError {
    RouteError::NoPath {
        from: Location::new(source),
        to: Location::new(destination),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(edges: &[(&str, &str, i64)]) -> LocationGraph {
        let mut g = LocationGraph::new();
        for &(a, b, w) in edges {
            g.add_edge(a, b, w);
        }
        g
    }

    fn route_labels(route: &ShortestRoute) -> Vec<&str> {
        route.locations().iter().map(Location::as_str).collect()
    }

    #[test]
    fn test_cheaper_two_hop_route() {
        let g = graph_of(&[("A", "B", 4), ("B", "C", 3), ("A", "C", 10)]);
        assert_eq!(g.shortest_distance("A", "C"), Ok(7));
        let route = g.shortest_path_with_route("A", "C").unwrap();
        assert_eq!(route_labels(&route), vec!["A", "B", "C"]);
        assert_eq!(route.total_distance(), 7);
    }

    #[test]
    fn test_unknown_destination() {
        let g = graph_of(&[("A", "B", 5)]);
        let err = g.shortest_distance("A", "D").unwrap_err();
        assert_eq!(err, RouteError::UnknownLocation(Location::new("D")));
        assert!(err.is_not_found());

        let lenient = g.query().with_policy(UnknownLocationPolicy::Unreachable);
        assert_eq!(
            lenient.distance("A", "D"),
            Err(RouteError::NoPath {
                from: Location::new("A"),
                to: Location::new("D"),
            })
        );
    }

    #[test]
    fn test_unknown_source_reported_first() {
        let g = graph_of(&[("A", "B", 5)]);
        assert_eq!(
            g.shortest_path_with_route("X", "Y"),
            Err(RouteError::UnknownLocation(Location::new("X")))
        );
    }

    #[test]
    fn test_multi_hop_beats_direct_edge() {
        let g = graph_of(&[("A", "B", 1), ("B", "C", 1), ("C", "D", 1), ("A", "D", 5)]);
        assert_eq!(g.shortest_distance("A", "D"), Ok(3));
        let route = g.shortest_path_with_route("A", "D").unwrap();
        assert_eq!(route_labels(&route), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_empty_graph() {
        let g = LocationGraph::new();
        assert!(g.shortest_distance("A", "B").unwrap_err().is_not_found());
        assert!(g.shortest_path_with_route("A", "B").unwrap_err().is_not_found());
        assert!(g.shortest_distance("A", "A").is_err());
    }

    #[test]
    fn test_cheaper_duplicate_wins() {
        let g = graph_of(&[("A", "B", 2), ("A", "B", 9)]);
        assert_eq!(g.shortest_distance("A", "B"), Ok(2));
        assert_eq!(g.shortest_distance("B", "A"), Ok(2));
        let g = graph_of(&[("A", "B", 9), ("A", "B", 2)]);
        assert_eq!(g.shortest_path_with_route("A", "B").unwrap().total_distance(), 2);
    }

    #[test]
    fn test_disconnected_components() {
        let g = graph_of(&[("A", "B", 1), ("C", "D", 1)]);
        assert_eq!(
            g.shortest_distance("A", "D"),
            Err(RouteError::NoPath {
                from: Location::new("A"),
                to: Location::new("D"),
            })
        );
        assert_eq!(
            g.shortest_path_with_route("D", "A").unwrap_err().to_string(),
            "no path found from D to A"
        );
    }

    #[test]
    fn test_identity_queries() {
        let g = graph_of(&[("A", "B", 5)]);
        assert_eq!(g.shortest_distance("A", "A"), Ok(0));
        let route = g.shortest_path_with_route("B", "B").unwrap();
        assert_eq!(route_labels(&route), vec!["B"]);
        assert_eq!(route.total_distance(), 0);

        let lenient = g.query().with_policy(UnknownLocationPolicy::Unreachable);
        assert_eq!(lenient.distance("Z", "Z"), Ok(0));
        assert_eq!(route_labels(&lenient.route("Z", "Z").unwrap()), vec!["Z"]);
        assert_eq!(
            g.shortest_distance("Z", "Z"),
            Err(RouteError::UnknownLocation(Location::new("Z")))
        );
    }

    #[test]
    fn test_zero_weight_edges() {
        let g = graph_of(&[("A", "B", 0), ("B", "C", 0), ("A", "C", 1)]);
        assert_eq!(g.shortest_distance("A", "C"), Ok(0));
    }

    #[test]
    fn test_equal_cost_routes_prefer_smaller_label() {
        // A-B-D and A-C-D both cost 2.
        let g = graph_of(&[("A", "C", 1), ("C", "D", 1), ("A", "B", 1), ("B", "D", 1)]);
        let route = g.shortest_path_with_route("A", "D").unwrap();
        assert_eq!(route_labels(&route), vec!["A", "B", "D"]);
        assert_eq!(route.total_distance(), 2);
    }

    #[test]
    fn test_negative_weight_terminates() {
        let g = graph_of(&[("A", "B", -1), ("B", "C", 2)]);
        assert_eq!(g.shortest_distance("A", "C"), Ok(1));
        assert!(g.shortest_path_with_route("C", "A").is_ok());
    }

    #[test]
    fn test_repeated_queries_are_identical() {
        let g = graph_of(&[("A", "B", 4), ("B", "C", 3), ("A", "C", 10), ("C", "D", 2)]);
        assert_eq!(g.shortest_distance("A", "D"), g.shortest_distance("A", "D"));
        assert_eq!(
            g.shortest_path_with_route("A", "D"),
            g.shortest_path_with_route("A", "D")
        );
    }

    #[test]
    fn test_route_matches_distance() {
        let g = graph_of(&[
            ("Mumbai", "Pune", 150),
            ("Pune", "Bengaluru", 840),
            ("Mumbai", "Bengaluru", 985),
            ("Mumbai", "New Delhi", 1400),
            ("New Delhi", "Bengaluru", 2150),
        ]);
        let route = g.shortest_path_with_route("New Delhi", "Bengaluru").unwrap();
        assert_eq!(
            Ok(route.total_distance()),
            g.shortest_distance("New Delhi", "Bengaluru")
        );
        assert_eq!(route.total_distance(), 2150);
        let route = g.shortest_path_with_route("Pune", "New Delhi").unwrap();
        assert_eq!(route_labels(&route), vec!["Pune", "Mumbai", "New Delhi"]);
        assert_eq!(route.total_distance(), 1550);
    }
}
