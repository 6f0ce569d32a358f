mod cli;
mod application;
mod domain;
mod data;
mod pipeline;
mod infra;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    // stdout carries the JSON response, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("supplement_advisor=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
