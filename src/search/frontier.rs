//! Min-priority frontier for Dijkstra's search.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::LocationGraph;
use crate::models::{Distance, LocationId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry<'g> {
    distance: Distance,
    label: &'g str,
    location: LocationId,
}

// Min-heap by distance; equal distances pop the smaller label first.
impl Ord for Entry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.label.cmp(self.label))
            .then_with(|| other.location.cmp(&self.location))
    }
}

impl PartialOrd for Entry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Locations awaiting extraction, ordered by tentative distance.
///
/// A location may be pushed several times as its tentative distance
/// improves; the search discards the stale copies when they surface.
///
/// # Examples
///
/// ```
/// use rental_graph::graph::LocationGraph;
/// use rental_graph::search::Frontier;
///
/// let mut graph = LocationGraph::new();
/// graph.add_edge("B", "A", 1);
/// let (a, b) = (graph.id_of("A").unwrap(), graph.id_of("B").unwrap());
///
/// let mut frontier = Frontier::new(&graph);
/// frontier.push(b, 5);
/// frontier.push(a, 5);
/// frontier.push(b, 2);
/// assert_eq!(frontier.pop(), Some((b, 2)));
/// assert_eq!(frontier.pop(), Some((a, 5)));
/// assert_eq!(frontier.pop(), Some((b, 5)));
/// assert_eq!(frontier.pop(), None);
/// ```
pub struct Frontier<'g> {
    graph: &'g LocationGraph,
    heap: BinaryHeap<Entry<'g>>,
}

impl<'g> Frontier<'g> {
    /// Creates an empty frontier over `graph`.
    pub fn new(graph: &'g LocationGraph) -> Self {
        Self {
            graph,
            heap: BinaryHeap::with_capacity(graph.location_count()),
        }
    }

    /// Inserts `location` with the given tentative distance.
    pub fn push(&mut self, location: LocationId, distance: Distance) {
        self.heap.push(Entry {
            distance,
            label: self.graph.location(location).as_str(),
            location,
        });
    }

    /// Removes and returns the entry with the smallest distance.
    pub fn pop(&mut self) -> Option<(LocationId, Distance)> {
        self.heap.pop().map(|e| (e.location, e.distance))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
