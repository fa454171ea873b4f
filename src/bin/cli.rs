//! hbre2ip CLI
//!
//! Scrapes the Hatena Blog staff picks and posts any new ones to Instapaper.
//! Settings and state live in `$HBRE2IP_PATH`, or next to the executable.

use std::process::ExitCode;

use clap::Parser;
use hbre2ip::{config, error::Result, pipeline};

/// hbre2ip - Hatena Blog staff picks to Instapaper
#[derive(Parser, Debug)]
#[command(
    name = "hbre2ip",
    version,
    about = "Post new Hatena Blog staff picks to Instapaper"
)]
struct Cli {}

/// Initialize logging; `RUST_LOG` overrides the default level.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();
}

async fn run() -> Result<()> {
    let config = config::load()?;
    log::info!("Using configuration directory {}", config.config_dir.display());

    pipeline::run(&config).await?;
    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    Cli::parse();
    init_logging();

    match run().await {
        Ok(()) => {
            log::info!("Done!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
