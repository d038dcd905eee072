// src/bin/rental-graph.rs
use std::io::{self, Write};
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rental_graph::cli::{Cli, Command, Commands, Session};
use rental_graph::config::RouteConfig;
use rental_graph::generate::{location_label, random_network};
use rental_graph::graph::LocationGraph;

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);
    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => RouteConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => RouteConfig::default(),
    };
    let config = cli.apply_overrides(config);

    match &cli.command {
        None | Some(Commands::Shell) => run_shell(config),
        Some(command) => run_demo(command, config),
    }
}

fn run_shell(config: RouteConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    Session::new(config).run(stdin.lock(), &mut out)?;
    out.flush()?;
    Ok(())
}

fn run_demo(command: &Commands, config: RouteConfig) -> Result<()> {
    let Commands::Demo { seed, from, to, .. } = command else {
        bail!("not a demo command");
    };
    let shape = command.shape().context("demo command without a network shape")?;
    if shape.locations < 2 {
        bail!("a demo network needs at least two locations");
    }

    let mut rng = StdRng::seed_from_u64(*seed);
    let graph = LocationGraph::from_edges(random_network(&shape, &mut rng));
    info!(
        seed,
        locations = graph.location_count(),
        edges = graph.edge_count(),
        "generated demo network"
    );

    let from = from.clone().unwrap_or_else(|| location_label(0));
    let to = to
        .clone()
        .unwrap_or_else(|| location_label(shape.locations - 1));

    let mut session = Session::with_graph(graph, config);
    let mut out = io::stdout().lock();
    for command in [Command::List, Command::Route { from, to }] {
        if session.execute(command, &mut out)?.is_break() {
            break;
        }
    }
    out.flush()?;
    Ok(())
}
