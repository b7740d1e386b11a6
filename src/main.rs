//! qib-bootstrap CLI
//!
//! Entry point for the qib-bootstrap command-line application.

use anyhow::Result;
use clap::Parser;

use qib_bootstrap::cli::output::display_error;
use qib_bootstrap::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(cli.log_level().into()),
        )
        .init();

    match cli.run().await {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
