//! Seymour - second-neighbor analysis CLI
//!
//! Classifies the vertices of a directed graph by comparing the sizes of
//! their first and second out-neighborhoods, generates random oriented
//! graphs, and runs an interactive editor for hunting counterexamples.

mod cli;
mod config;
mod graph;
mod models;
mod reporters;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Parse CLI args first: the log level comes from them unless RUST_LOG is set
    let cli = cli::Cli::parse();

    let filter = if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(&cli.log_level)
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run(cli)
}
