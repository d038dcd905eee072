//! Adjacency-list location graph.

use std::collections::HashMap;

use tracing::debug;

use super::LocationListing;
use crate::error::Result;
use crate::models::{Distance, Edge, Location, LocationId, Neighbor, ShortestRoute, Weight};
use crate::search::RouteQuery;

/// Undirected weighted graph of rental locations.
///
/// Locations are created implicitly the first time they appear as an edge
/// endpoint and are never removed. Each location gets a dense
/// [`LocationId`] in first-seen order, which also fixes the listing order.
///
/// Inserting the edge (A, B, w) stores (B, w) in A's adjacency list and
/// (A, w) in B's. Parallel edges are all retained.
///
/// # Examples
///
/// ```
/// use rental_graph::graph::LocationGraph;
///
/// let mut graph = LocationGraph::new();
/// graph.add_edge("A", "B", 4);
/// graph.add_edge("B", "C", 3);
/// graph.add_edge("A", "C", 10);
///
/// assert_eq!(graph.shortest_distance("A", "C"), Ok(7));
/// let route = graph.shortest_path_with_route("A", "C").unwrap();
/// assert_eq!(route.to_string(), "A -> B -> C");
/// assert_eq!(route.total_distance(), 7);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocationGraph {
    ids: HashMap<Location, LocationId>,
    locations: Vec<Location>,
    adjacency: Vec<Vec<Neighbor>>,
    edge_count: usize,
}

impl LocationGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph by inserting every edge in order.
    pub fn from_edges<I: IntoIterator<Item = Edge>>(edges: I) -> Self {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }

    /// Inserts an undirected edge between `from` and `to`.
    ///
    /// Both endpoints are created if unseen. Repeated calls add parallel
    /// edges; nothing is merged. A self-loop stores two entries in the
    /// location's own adjacency list.
    pub fn add_edge(&mut self, from: impl Into<Location>, to: impl Into<Location>, weight: Weight) {
        let from = self.intern(from.into());
        let to = self.intern(to.into());

        self.adjacency[from.index()].push(Neighbor {
            location: to,
            weight,
        });
        self.adjacency[to.index()].push(Neighbor {
            location: from,
            weight,
        });
        self.edge_count += 1;

        debug!(
            from = %self.locations[from.index()],
            to = %self.locations[to.index()],
            weight,
            "added location link"
        );
    }

    fn intern(&mut self, location: Location) -> LocationId {
        if let Some(&id) = self.ids.get(location.as_str()) {
            return id;
        }
        let id = LocationId(self.locations.len());
        self.ids.insert(location.clone(), id);
        self.locations.push(location);
        self.adjacency.push(Vec::new());
        id
    }

    /// Looks up the id of a location by label.
    pub fn id_of(&self, label: &str) -> Option<LocationId> {
        self.ids.get(label).copied()
    }

    /// Returns the location with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this graph.
    pub fn location(&self, id: LocationId) -> &Location {
        &self.locations[id.index()]
    }

    /// Returns `true` if `label` has appeared as an edge endpoint.
    pub fn contains(&self, label: &str) -> bool {
        self.ids.contains_key(label)
    }

    /// Number of known locations.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of [`add_edge`](Self::add_edge) calls so far.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if no edge has been added.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// All known locations in first-seen order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> + '_ {
        self.locations.iter()
    }

    /// Adjacency list of the location with the given id, in insertion order.
    pub fn adjacent(&self, id: LocationId) -> &[Neighbor] {
        &self.adjacency[id.index()]
    }

    /// Neighbors of `label` with link weights, or `None` if the label is unknown.
    pub fn neighbors(&self, label: &str) -> Option<impl Iterator<Item = (&Location, Weight)> + '_> {
        let id = self.id_of(label)?;
        Some(
            self.adjacent(id)
                .iter()
                .map(|n| (self.location(n.location), n.weight)),
        )
    }

    /// Weight of the cheapest edge directly linking `a` and `b`, if any.
    pub fn min_weight_between(&self, a: &str, b: &str) -> Option<Weight> {
        let (a, b) = (self.id_of(a)?, self.id_of(b)?);
        self.adjacent(a)
            .iter()
            .filter(|n| n.location == b)
            .map(|n| n.weight)
            .min()
    }

    /// Display adapter dumping every location with its neighbors.
    ///
    /// `unit` labels every weight, e.g. `"km"`.
    pub fn listing<'a>(&'a self, unit: &'a str) -> LocationListing<'a> {
        LocationListing::new(self, unit)
    }

    /// Human-readable dump of the graph with the default `units` label.
    pub fn list_locations(&self) -> String {
        self.listing(LocationListing::DEFAULT_UNIT).to_string()
    }

    /// Query view using the default policy, which reports unknown labels
    /// as [`RouteError::UnknownLocation`](crate::error::RouteError::UnknownLocation).
    pub fn query(&self) -> RouteQuery<'_> {
        RouteQuery::new(self)
    }

    /// Minimum total distance from `source` to `destination`.
    ///
    /// See [`RouteQuery::distance`].
    pub fn shortest_distance(&self, source: &str, destination: &str) -> Result<Distance> {
        self.query().distance(source, destination)
    }

    /// Minimum-distance route from `source` to `destination`.
    ///
    /// See [`RouteQuery::route`].
    pub fn shortest_path_with_route(&self, source: &str, destination: &str) -> Result<ShortestRoute> {
        self.query().route(source, destination)
    }
}

impl Extend<Edge> for LocationGraph {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, edges: I) {
        for edge in edges {
            let (from, to, weight) = edge.into_parts();
            self.add_edge(from, to, weight);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbor_list(graph: &LocationGraph, label: &str) -> Vec<(String, Weight)> {
        graph
            .neighbors(label)
            .map(|it| it.map(|(l, w)| (l.to_string(), w)).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_new_graph_is_empty() {
        let g = LocationGraph::new();
        assert!(g.is_empty());
        assert_eq!(g.location_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.neighbors("A").is_none());
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut g = LocationGraph::new();
        g.add_edge("A", "B", 5);
        assert_eq!(neighbor_list(&g, "A"), vec![("B".to_string(), 5)]);
        assert_eq!(neighbor_list(&g, "B"), vec![("A".to_string(), 5)]);
        assert_eq!(g.location_count(), 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_parallel_edges_are_retained() {
        let mut g = LocationGraph::new();
        g.add_edge("A", "B", 2);
        g.add_edge("A", "B", 9);
        g.add_edge("B", "A", 2);
        assert_eq!(
            neighbor_list(&g, "A"),
            vec![("B".to_string(), 2), ("B".to_string(), 9), ("B".to_string(), 2)]
        );
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.min_weight_between("A", "B"), Some(2));
        assert_eq!(g.min_weight_between("B", "A"), Some(2));
    }

    #[test]
    fn test_self_loop_stores_both_directions() {
        let mut g = LocationGraph::new();
        g.add_edge("A", "A", 3);
        assert_eq!(g.location_count(), 1);
        assert_eq!(
            neighbor_list(&g, "A"),
            vec![("A".to_string(), 3), ("A".to_string(), 3)]
        );
    }

    #[test]
    fn test_ids_follow_first_seen_order() {
        let mut g = LocationGraph::new();
        g.add_edge("Pune", "Mumbai", 150);
        g.add_edge("Delhi", "Pune", 1400);
        let order: Vec<&str> = g.locations().map(Location::as_str).collect();
        assert_eq!(order, vec!["Pune", "Mumbai", "Delhi"]);
        assert_eq!(g.id_of("Delhi"), Some(LocationId(2)));
        assert_eq!(g.location(LocationId(1)).as_str(), "Mumbai");
    }

    #[test]
    fn test_min_weight_between_unlinked() {
        let mut g = LocationGraph::new();
        g.add_edge("A", "B", 1);
        g.add_edge("B", "C", 1);
        assert_eq!(g.min_weight_between("A", "C"), None);
        assert_eq!(g.min_weight_between("A", "Z"), None);
    }

    #[test]
    fn test_from_edges() {
        let g = LocationGraph::from_edges(vec![Edge::new("A", "B", 4), Edge::new("B", "C", 3)]);
        assert_eq!(g.edge_count(), 2);
        assert!(g.contains("C"));
        assert!(!g.contains("D"));
    }
}
