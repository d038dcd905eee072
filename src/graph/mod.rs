//! The rental location graph.
//!
//! - [`LocationGraph`] — adjacency lists keyed by location, edge insertion,
//!   lookups, and the two shortest-route queries
//! - [`LocationListing`] — display adapter for dumping the graph

mod listing;
mod location_graph;

pub use listing::LocationListing;
pub use location_graph::LocationGraph;
