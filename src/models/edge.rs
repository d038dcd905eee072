//! Undirected weighted links between locations.

use serde::{Deserialize, Serialize};

use super::{Location, LocationId, Weight};

/// An undirected link between two locations with a distance.
///
/// Weights are not validated. Negative weights are accepted but shortest
/// distances are only guaranteed minimal when every weight is non-negative.
///
/// # Examples
///
/// ```
/// use rental_graph::models::Edge;
///
/// let e = Edge::new("Mumbai", "Pune", 150);
/// assert_eq!(e.from().as_str(), "Mumbai");
/// assert_eq!(e.to().as_str(), "Pune");
/// assert_eq!(e.weight(), 150);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    from: Location,
    to: Location,
    weight: Weight,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(from: impl Into<Location>, to: impl Into<Location>, weight: Weight) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    pub fn from(&self) -> &Location {
        &self.from
    }

    pub fn to(&self) -> &Location {
        &self.to
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Splits the edge into its endpoints and weight.
    pub fn into_parts(self) -> (Location, Location, Weight) {
        (self.from, self.to, self.weight)
    }
}

/// One entry of an adjacency list: the far endpoint and the link weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    /// Location reached by this link.
    pub location: LocationId,
    /// Link distance.
    pub weight: Weight,
}
