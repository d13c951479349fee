//! favstore CLI - runs the favorites HTTP service
//!
//! - `serve`: bind the HTTP API and serve until Ctrl+C/SIGTERM
//! - `schema`: print the `favorites` table the service expects

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "favstore",
    author,
    version,
    about = "HTTP CRUD service for saved profile favorites"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the favorites HTTP API
    Serve(commands::serve::ServeArgs),
    /// Print the SQL for the favorites table
    Schema,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; explicit env vars and flags still apply.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Schema => commands::run_schema(),
    }
    Ok(())
}
