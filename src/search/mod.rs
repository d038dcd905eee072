//! Single-source shortest-path search (Dijkstra).
//!
//! - [`Frontier`] — binary-heap min-priority queue with label tie-breaking
//! - [`RouteQuery`] — distance-only and route-reconstructing queries
//! - [`UnknownLocationPolicy`] — whether unknown labels are reported as such

mod frontier;
mod query;

pub use frontier::Frontier;
pub use query::{RouteQuery, UnknownLocationPolicy};
