//! Shortest route result type.

use std::fmt;

use serde::Serialize;

use super::{Distance, Location};

/// An ordered sequence of locations from a query's source to its destination,
/// together with the total distance travelled.
///
/// A route always holds at least one location. A route from a location to
/// itself holds exactly that location and has distance zero.
///
/// # Examples
///
/// ```
/// use rental_graph::models::{Location, ShortestRoute};
///
/// let route = ShortestRoute::new(
///     vec![Location::new("A"), Location::new("B"), Location::new("C")],
///     7,
/// );
/// assert_eq!(route.source().as_str(), "A");
/// assert_eq!(route.destination().as_str(), "C");
/// assert_eq!(route.num_legs(), 2);
/// assert_eq!(route.to_string(), "A -> B -> C");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestRoute {
    locations: Vec<Location>,
    total_distance: Distance,
}

impl ShortestRoute {
    /// Creates a route from its locations and total distance.
    ///
    /// # Panics
    ///
    /// Panics if `locations` is empty.
    pub fn new(locations: Vec<Location>, total_distance: Distance) -> Self {
        assert!(!locations.is_empty(), "a route has at least one location");
        Self {
            locations,
            total_distance,
        }
    }

    /// Returns the ordered sequence of locations.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// First location of the route.
    pub fn source(&self) -> &Location {
        &self.locations[0]
    }

    /// Last location of the route.
    pub fn destination(&self) -> &Location {
        &self.locations[self.locations.len() - 1]
    }

    /// Total distance of the route.
    pub fn total_distance(&self) -> Distance {
        self.total_distance
    }

    /// Number of links travelled.
    pub fn num_legs(&self) -> usize {
        self.locations.len() - 1
    }

    /// Consecutive location pairs, in travel order.
    pub fn legs(&self) -> impl Iterator<Item = (&Location, &Location)> + '_ {
        self.locations.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Consumes the route, returning its locations.
    pub fn into_locations(self) -> Vec<Location> {
        self.locations
    }
}

impl fmt::Display for ShortestRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, location) in self.locations.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{location}")?;
        }
        Ok(())
    }
}
