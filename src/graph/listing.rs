//! Human-readable dump of a location graph.

use std::fmt;

use super::LocationGraph;

/// Display adapter listing every location and its neighbors.
///
/// Locations appear in first-seen order and neighbors in insertion order.
/// The order is for display only.
///
/// # Examples
///
/// ```
/// use rental_graph::graph::LocationGraph;
///
/// let mut graph = LocationGraph::new();
/// graph.add_edge("A", "B", 4);
///
/// let text = graph.listing("km").to_string();
/// assert_eq!(
///     text,
///     "Rental Locations and Distances:\nA -> B (4 km)\nB -> A (4 km)\n"
/// );
/// ```
pub struct LocationListing<'a> {
    graph: &'a LocationGraph,
    unit: &'a str,
}

impl<'a> LocationListing<'a> {
    /// Unit label used by [`LocationGraph::list_locations`].
    pub const DEFAULT_UNIT: &'static str = "units";

    pub fn new(graph: &'a LocationGraph, unit: &'a str) -> Self {
        Self { graph, unit }
    }
}

impl fmt::Display for LocationListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.graph.is_empty() {
            return writeln!(f, "No rental locations yet.");
        }
        writeln!(f, "Rental Locations and Distances:")?;
        for location in self.graph.locations() {
            write!(f, "{location} -> ")?;
            if let Some(neighbors) = self.graph.neighbors(location.as_str()) {
                for (i, (neighbor, weight)) in neighbors.enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{neighbor} ({weight} {})", self.unit)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
