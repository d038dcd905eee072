//! Line-oriented interactive session over a location graph.

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use serde_json::json;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{OutputFormat, RouteConfig};
use crate::error::RouteError;
use crate::graph::LocationGraph;
use crate::models::Weight;

pub const HELP: &str = "\
Commands:
  add <from> <to> <distance>   link two rental locations
  list                         show every location and its links
  distance <from> <to>         shortest distance between two locations
  route <from> <to>            shortest route between two locations
  help                         show this message
  quit                         end the session";

/// Input the session refuses before it reaches the graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("distance must be an integer, got '{0}'")]
    InvalidDistance(String),
}

/// One parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        from: String,
        to: String,
        weight: Weight,
    },
    List,
    Distance {
        from: String,
        to: String,
    },
    Route {
        from: String,
        to: String,
    },
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines and `#` comments yield `None`.
    ///
    /// # Errors
    /// Returns a [`SessionError`] for unknown verbs, wrong argument counts,
    /// and non-integer distances.
    pub fn parse(line: &str) -> Result<Option<Self>, SessionError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        let command = match words.as_slice() {
            ["add", from, to, weight] => Self::Add {
                from: from.to_string(),
                to: to.to_string(),
                weight: weight
                    .parse()
                    .map_err(|_| SessionError::InvalidDistance(weight.to_string()))?,
            },
            ["add", ..] => return Err(SessionError::Usage("add <from> <to> <distance>")),
            ["list"] => Self::List,
            ["distance", from, to] => Self::Distance {
                from: from.to_string(),
                to: to.to_string(),
            },
            ["distance", ..] => return Err(SessionError::Usage("distance <from> <to>")),
            ["route", from, to] => Self::Route {
                from: from.to_string(),
                to: to.to_string(),
            },
            ["route", ..] => return Err(SessionError::Usage("route <from> <to>")),
            ["help"] => Self::Help,
            ["quit"] | ["exit"] => Self::Quit,
            [verb, ..] => return Err(SessionError::UnknownCommand(verb.to_string())),
            [] => return Ok(None),
        };
        Ok(Some(command))
    }
}

/// Owns the graph for the lifetime of one session and renders answers.
///
/// # Examples
///
/// ```
/// use rental_graph::cli::Session;
/// use rental_graph::config::RouteConfig;
///
/// let mut session = Session::new(RouteConfig::default());
/// let mut out = Vec::new();
/// session
///     .run("add A B 4\nadd B C 3\nadd A C 10\ndistance A C\n".as_bytes(), &mut out)
///     .unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.ends_with("Shortest distance between A and C is: 7 km.\n"));
/// ```
pub struct Session {
    graph: LocationGraph,
    config: RouteConfig,
}

impl Session {
    /// Starts a session with an empty graph.
    pub fn new(config: RouteConfig) -> Self {
        Self::with_graph(LocationGraph::new(), config)
    }

    /// Starts a session over an existing graph.
    pub fn with_graph(graph: LocationGraph, config: RouteConfig) -> Self {
        Self { graph, config }
    }

    pub fn graph(&self) -> &LocationGraph {
        &self.graph
    }

    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Processes lines until `quit` or end of input.
    ///
    /// Rejected lines are reported on `out` and the session continues.
    ///
    /// # Errors
    /// Returns any I/O error from reading `input` or writing `out`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        info!("session started");
        for line in input.lines() {
            let line = line?;
            match Command::parse(&line) {
                Ok(Some(command)) => {
                    if self.execute(command, out)?.is_break() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(input = %line.trim(), error = %e, "rejected input");
                    writeln!(out, "error: {e}")?;
                }
            }
        }
        info!(
            locations = self.graph.location_count(),
            edges = self.graph.edge_count(),
            "session ended"
        );
        Ok(())
    }

    /// Executes one command, writing its answer to `out`.
    ///
    /// # Errors
    /// Returns any I/O error from writing `out`.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<ControlFlow<()>> {
        match command {
            Command::Add { from, to, weight } => {
                writeln!(
                    out,
                    "Added rental location link: {from} -> {to} ({weight} {})",
                    self.config.distance_unit
                )?;
                self.graph.add_edge(from, to, weight);
            }
            Command::List => {
                write!(out, "{}", self.graph.listing(&self.config.distance_unit))?;
            }
            Command::Distance { from, to } => self.answer_distance(&from, &to, out)?,
            Command::Route { from, to } => self.answer_route(&from, &to, out)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    fn answer_distance<W: Write>(&self, from: &str, to: &str, out: &mut W) -> io::Result<()> {
        let query = self.graph.query().with_policy(self.config.unknown_locations);
        let unit = &self.config.distance_unit;
        match (self.config.output, query.distance(from, to)) {
            (OutputFormat::Json, Ok(distance)) => writeln!(
                out,
                "{}",
                json!({ "source": from, "destination": to, "distance": distance })
            ),
            (OutputFormat::Json, Err(e)) => writeln!(
                out,
                "{}",
                json!({ "source": from, "destination": to, "error": e.to_string() })
            ),
            (OutputFormat::Text, Ok(distance)) => writeln!(
                out,
                "Shortest distance between {from} and {to} is: {distance} {unit}."
            ),
            (OutputFormat::Text, Err(RouteError::NoPath { .. })) => {
                writeln!(out, "Path between {from} and {to} not found.")
            }
            (OutputFormat::Text, Err(e)) => {
                writeln!(out, "Path between {from} and {to} not found: {e}.")
            }
        }
    }

    fn answer_route<W: Write>(&self, from: &str, to: &str, out: &mut W) -> io::Result<()> {
        let query = self.graph.query().with_policy(self.config.unknown_locations);
        let unit = &self.config.distance_unit;
        match (self.config.output, query.route(from, to)) {
            (OutputFormat::Json, Ok(route)) => writeln!(
                out,
                "{}",
                json!({ "source": from, "destination": to, "route": route })
            ),
            (OutputFormat::Json, Err(e)) => writeln!(
                out,
                "{}",
                json!({ "source": from, "destination": to, "error": e.to_string() })
            ),
            (OutputFormat::Text, Ok(route)) => {
                writeln!(out, "Shortest path from {from} to {to}:")?;
                writeln!(out, "{route}")?;
                writeln!(out, "Total Distance: {} {unit}", route.total_distance())
            }
            (OutputFormat::Text, Err(RouteError::NoPath { .. })) => {
                writeln!(out, "No path found from {from} to {to}!")
            }
            (OutputFormat::Text, Err(e)) => {
                writeln!(out, "No path found from {from} to {to}: {e}.")
            }
        }
    }
}
