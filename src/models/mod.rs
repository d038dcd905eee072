//! Domain model types for the rental location network.
//!
//! Provides the core abstractions: locations identified by label, undirected
//! weighted edges between them, and the route returned by a shortest-path
//! query.

mod edge;
mod location;
mod route;

pub use edge::{Edge, Neighbor};
pub use location::{Location, LocationId};
pub use route::ShortestRoute;

/// Distance carried by a single edge.
pub type Weight = i64;

/// Accumulated distance along a path.
pub type Distance = i64;
