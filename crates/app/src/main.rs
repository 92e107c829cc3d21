//! Docbase - Main Entry Point
//!
//! Command line client for the Docbase knowledge-base service.
//!
//! ## Usage
//!
//! ```bash
//! export DOCBASE_ACCOUNT=acme
//! export DOCBASE_API_KEY=...
//!
//! docbase collections create manuals
//! docbase docs upload manuals ./guide.pdf
//! docbase ask manuals "Which cable goes where?"
//! ```

mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    cli::run(cli).await
}
