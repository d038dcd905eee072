//! Seeded random location networks for demos and tests.

use rand::Rng;

use crate::models::{Edge, Weight};

/// Size and weight range of a generated network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkShape {
    /// Number of locations, labelled `loc-0 .. loc-{n-1}`.
    pub locations: usize,
    /// Links added on top of the spanning tree. May repeat existing pairs.
    pub extra_links: usize,
    /// Upper bound for link weights (inclusive, at least 1).
    pub max_distance: Weight,
}

impl Default for NetworkShape {
    fn default() -> Self {
        Self {
            locations: 8,
            extra_links: 6,
            max_distance: 100,
        }
    }
}

/// Label of the `index`-th generated location.
pub fn location_label(index: usize) -> String {
    format!("loc-{index}")
}

/// Generates the edges of a connected random network.
///
/// A random spanning tree links every location, then `extra_links` random
/// pairs are added. Weights are uniform in `1..=max_distance`.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use rental_graph::generate::{random_network, NetworkShape};
/// use rental_graph::graph::LocationGraph;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let shape = NetworkShape { locations: 5, extra_links: 3, max_distance: 20 };
/// let graph = LocationGraph::from_edges(random_network(&shape, &mut rng));
///
/// assert_eq!(graph.location_count(), 5);
/// assert_eq!(graph.edge_count(), 4 + 3);
/// assert!(graph.shortest_distance("loc-0", "loc-4").is_ok());
/// ```
pub fn random_network<R: Rng>(shape: &NetworkShape, rng: &mut R) -> Vec<Edge> {
    let n = shape.locations;
    if n < 2 {
        return Vec::new();
    }
    let max_distance = shape.max_distance.max(1);
    let mut edges = Vec::with_capacity(n - 1 + shape.extra_links);

    for i in 1..n {
        let parent = rng.random_range(0..i);
        let weight = rng.random_range(1..=max_distance);
        edges.push(Edge::new(location_label(parent), location_label(i), weight));
    }

    for _ in 0..shape.extra_links {
        let a = rng.random_range(0..n);
        let mut b = rng.random_range(0..n - 1);
        if b >= a {
            b += 1;
        }
        let weight = rng.random_range(1..=max_distance);
        edges.push(Edge::new(location_label(a), location_label(b), weight));
    }

    edges
}
