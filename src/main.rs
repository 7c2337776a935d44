//! rift-scope - run one scope command over a file
//! Main entry point

use clap::Parser;
use rift_scope::cli::{self, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let report = cli::run(&args)?;
    println!("{report}");
    Ok(())
}
