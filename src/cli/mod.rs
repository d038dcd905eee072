//! Command-line surface: argument model and the interactive session.

pub mod session;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{OutputFormat, RouteConfig};
use crate::generate::NetworkShape;
use crate::models::Weight;
use crate::search::UnknownLocationPolicy;

pub use session::{Command, Session, SessionError};

#[derive(Parser, Debug)]
#[command(name = "rental-graph")]
#[command(about = "Rental location network with shortest-route queries", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print query answers as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Treat unknown locations as unreachable instead of reporting them
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Distance unit label (overrides the config file)
    #[arg(long, global = true)]
    pub unit: Option<String>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Read commands from standard input (the default)
    Shell,
    /// Generate a random network, list it and answer one route query
    Demo {
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = 8)]
        locations: usize,
        #[arg(long, default_value_t = 6)]
        extra_links: usize,
        #[arg(long, default_value_t = 100)]
        max_distance: Weight,
        /// Route source (defaults to the first location)
        #[arg(long)]
        from: Option<String>,
        /// Route destination (defaults to the last location)
        #[arg(long)]
        to: Option<String>,
    },
}

impl Commands {
    /// Network shape for the `demo` subcommand.
    pub fn shape(&self) -> Option<NetworkShape> {
        match *self {
            Self::Demo {
                locations,
                extra_links,
                max_distance,
                ..
            } => Some(NetworkShape {
                locations,
                extra_links,
                max_distance,
            }),
            Self::Shell => None,
        }
    }
}

impl Cli {
    /// Applies command-line overrides on top of a loaded config.
    pub fn apply_overrides(&self, mut config: RouteConfig) -> RouteConfig {
        if self.json {
            config.output = OutputFormat::Json;
        }
        if self.lenient {
            config.unknown_locations = UnknownLocationPolicy::Unreachable;
        }
        if let Some(unit) = &self.unit {
            config.distance_unit = unit.clone();
        }
        config
    }

    /// Default `tracing` filter directive for the chosen verbosity.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "rental_graph=debug",
            _ => "rental_graph=trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_shell() {
        let cli = Cli::parse_from(["rental-graph"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.log_directive(), "warn");
        assert_eq!(cli.apply_overrides(RouteConfig::default()), RouteConfig::default());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["rental-graph", "--json", "--lenient", "--unit", "mi", "-vv"]);
        let config = cli.apply_overrides(RouteConfig::default());
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.unknown_locations, UnknownLocationPolicy::Unreachable);
        assert_eq!(config.distance_unit, "mi");
        assert_eq!(cli.log_directive(), "rental_graph=trace");
    }

    #[test]
    fn test_demo_args() {
        let cli = Cli::parse_from([
            "rental-graph",
            "demo",
            "--seed",
            "7",
            "--locations",
            "12",
            "--to",
            "loc-3",
        ]);
        let command = cli.command.expect("subcommand");
        assert_eq!(
            command.shape(),
            Some(NetworkShape {
                locations: 12,
                extra_links: 6,
                max_distance: 100,
            })
        );
        match command {
            Commands::Demo { seed, from, to, .. } => {
                assert_eq!(seed, 7);
                assert_eq!(from, None);
                assert_eq!(to.as_deref(), Some("loc-3"));
            }
            Commands::Shell => panic!("expected demo"),
        }
    }
}
