//! # rental-graph
//!
//! Rental location network: an undirected weighted graph of locations with
//! Dijkstra shortest-distance and shortest-route queries.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Edge, ShortestRoute)
//! - [`graph`] — The location graph and its listing
//! - [`distance`] — Per-query distance and predecessor tables
//! - [`search`] — Dijkstra search: frontier and route queries
//! - [`error`] — Query error type
//! - [`config`] — Session configuration (TOML)
//! - [`generate`] — Seeded random networks
//! - [`cli`] — Command-line arguments and the interactive session

pub mod cli;
pub mod config;
pub mod distance;
pub mod error;
pub mod generate;
pub mod graph;
pub mod models;
pub mod search;
