use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::{Builder, EnvFilter};

mod cli;

use cli::dispatch::dispatch;
use cli::types::Cli;

/// `RUST_LOG` wins when set; otherwise warn, or info with `--verbose`.
fn filter_builder(verbose: bool) -> Builder {
    let level = if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    EnvFilter::builder().with_default_directive(level.into())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(filter_builder(cli.verbose).from_env_lossy())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    dispatch(cli)
}
