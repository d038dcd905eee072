//! Per-query scratch tables.
//!
//! A shortest-path query owns one [`DistanceTable`] and, for the route
//! variant, one [`PredecessorTable`]. Both are discarded when the query
//! returns.

mod table;

pub use table::{DistanceTable, PredecessorTable};
