//! Glyke CLI - Cart replay and admin grid tools.
//!
//! # Usage
//!
//! ```bash
//! # Replay cart edits against a rendered payload
//! glyke cart cart.json set:1:3 inc:2 remove:1
//!
//! # Print the data-grid options for a table
//! glyke grid products
//! ```
//!
//! # Commands
//!
//! - `cart` - Replay quantity edits and print each result as a JSON line
//! - `grid` - Print data-grid widget options

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

use commands::grid::GridTable;

#[derive(Parser)]
#[command(name = "glyke")]
#[command(author, version, about = "Glyke storefront tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay cart editor operations against a payload file
    Cart {
        /// Path to the rendered cart payload (JSON)
        payload: PathBuf,

        /// Operations: set:<id>:<qty>, inc:<id>, dec:<id>, remove:<id>
        #[arg(required = true)]
        ops: Vec<String>,
    },
    /// Print data-grid options for a table
    Grid {
        #[arg(value_enum)]
        table: GridTable,
    },
}

fn main() {
    // Initialize tracing
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "glyke_cli=info,glyke_storefront=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

#[allow(clippy::print_stdout)]
fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Cart { payload, ops } => {
            for line in commands::cart::replay(&payload, &ops)? {
                println!("{}", serde_json::to_string(&line)?);
            }
        }
        Commands::Grid { table } => {
            println!("{}", commands::grid::options_json(table)?);
        }
    }
    Ok(())
}
