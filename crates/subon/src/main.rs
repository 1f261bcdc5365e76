//! subon - Entry Point
//!
//! Binary entry point. Lives in the `subon` facade crate next to the
//! library it drives.

use std::process::ExitCode;

use clap::Parser;
use subon::cli::{Cli, execute, load_config};
use subon_infrastructure::logging::{bootstrap_subscriber, init_logging};

/// Load configuration, install logging, then run the requested command
///
/// Configuration loading logs to stderr through a scoped bootstrap
/// subscriber, since the configured one does not exist yet.
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = tracing::subscriber::with_default(bootstrap_subscriber(std::io::stderr), || {
        load_config(cli.config.as_deref())
    })?;
    init_logging(&config.logging)?;

    let mut stdout = std::io::stdout();
    if execute(cli.command, config, &mut stdout)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
