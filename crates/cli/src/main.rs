//! Rolodex CLI - customer directory management from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List customers, optionally filtered and paginated
//! rolodex customers list --search grace --page 2 --sort-by email
//!
//! # Show one customer
//! rolodex customers show 3fa6f1c2-0b1d-4d6e-9f3a-7a8a4c1d9e02
//!
//! # Create a customer
//! rolodex customers create -f Grace -l Hopper -e grace@example.com -u grace.h
//!
//! # Update fields of a customer
//! rolodex customers update 3fa6f1c2-... --city Arlington
//!
//! # Delete a customer (prompts unless --yes)
//! rolodex customers delete 3fa6f1c2-...
//! ```
//!
//! # Environment Variables
//!
//! - `DIRECTORY_BASE_URL` - Base URL of the Directory Service (required)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "rolodex")]
#[command(author, version, about = "Rolodex customer directory tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage customer records
    Customers {
        #[command(subcommand)]
        action: commands::customers::CustomerAction,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Customers { action } => commands::customers::run(action).await?,
    }
    Ok(())
}
