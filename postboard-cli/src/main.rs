//! postboard CLI - in-memory post bulletin service
//!
//! `postboard serve` starts the HTTP server exposing the `/posts.*`
//! endpoints. All state lives in memory and is lost on exit.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

mod commands;
mod config;
mod tracing_setup;

use commands::serve::ServeArgs;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(name = "postboard", version, about = "In-memory post bulletin service")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env has to be in place before clap reads env-backed flags
    let dotenv_files = config::load_dotenv();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    if dotenv_files.is_empty() {
        debug!("No .env files found (current dir or ~/.postboard)");
    }
    for path in &dotenv_files {
        info!("Loaded environment from {}", path.display());
    }

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
    }
}
