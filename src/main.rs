//! Artist Scout - resolves free-text artist names against the Genius API.
//!
//! Given one name or a file of names, it disambiguates each to the single
//! best-matching artist record and aggregates the results into an ordered
//! table for CSV export. Lookups are cached per session and batches run
//! with a bounded worker pool.

pub mod batch;
pub mod cache;
pub mod cli;
pub mod error;
pub mod export;
pub mod resolver;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("artist_scout=info".parse().unwrap()))
        .init();

    cli::run_command(&args)
}
