mod cli;

use crate::cli::CLI;
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuidgen_cli::{batch, Interrupt, Session};

const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CLI::parse();

    if config.interactive {
        return run_interactive();
    }

    info!(
        variant = %config.variant,
        count = config.count,
        namespace = %config.namespace,
        "generating batch"
    );

    let mut stdout = std::io::stdout().lock();
    let outcome = batch::run(&config.to_batch_request(), &mut stdout)?;
    if let Some(path) = outcome.saved_to {
        eprintln!("UUIDs saved to {}", path.display());
    }

    Ok(())
}

fn run_interactive() -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async {
        let mut session = Session::new(
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
            Interrupt::ctrl_c(),
        );
        let reason = session.run().await?;
        info!(?reason, "interactive session finished");
        anyhow::Ok(())
    });

    // A stdin read may still be parked on the blocking pool after an interrupt.
    runtime.shutdown_background();
    result
}
