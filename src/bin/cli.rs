// src/bin/cli.rs
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use mesa_scrape::cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    cli::run()
}
