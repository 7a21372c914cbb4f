//! Naked Pineapple bulk CLI - Shopify staged uploads and bulk mutations.
//!
//! # Usage
//!
//! ```bash
//! # Upload a JSONL file and run metafieldsSet over it
//! np-bulk run --kind metafields --file data/bulk_metafield.jsonl
//!
//! # Build the JSONL in memory from a JSON array of records
//! np-bulk run --kind metafields --records demos/metafields.json
//!
//! # Create products without touching webhooks
//! np-bulk run --kind products --file data/bulk_op_vars.jsonl --skip-webhook
//!
//! # Make sure the BULK_OPERATIONS_FINISH webhook exists
//! np-bulk webhook
//!
//! # Check on a bulk operation
//! np-bulk status gid://shopify/BulkOperation/123
//! ```
//!
//! # Commands
//!
//! - `run` - Stage, upload, and start a bulk mutation, then ensure the webhook
//! - `webhook` - Ensure the `BULK_OPERATIONS_FINISH` webhook subscription
//! - `status` - Look up a bulk operation

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use naked_pineapple_bulk::config::BulkConfig;
use naked_pineapple_core::{BulkMutationKind, Gid};

mod commands;
mod telemetry;

#[derive(Parser)]
#[command(name = "np-bulk")]
#[command(author, version, about = "Naked Pineapple Shopify bulk mutation tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload bulk mutation variables and start the bulk operation
    Run(RunArgs),
    /// Ensure the `BULK_OPERATIONS_FINISH` webhook subscription exists
    Webhook,
    /// Show the status of a bulk operation
    Status {
        /// Bulk operation ID (`gid://shopify/BulkOperation/...`)
        id: Gid,
    },
}

#[derive(Args)]
#[command(group(
    clap::ArgGroup::new("source")
        .required(true)
        .args(["file", "records"])
))]
pub struct RunArgs {
    /// Mutation to run per line (`products`, `metafields`)
    #[arg(short, long, default_value = "metafields")]
    pub kind: BulkMutationKind,

    /// JSONL file of mutation variables, uploaded as-is
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// JSON array of records, converted to JSONL in memory
    #[arg(short, long)]
    pub records: Option<PathBuf>,

    /// Do not check or create the webhook subscription
    #[arg(long)]
    pub skip_webhook: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match BulkConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing_subscriber::fmt::init();
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Sentry must be initialised before the tracing subscriber
    let sentry_guard = telemetry::init_sentry(&config);
    telemetry::init_tracing(&config);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, &config).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        // Flush pending Sentry events before exiting
        drop(sentry_guard);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &BulkConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Run(args) => commands::run::execute(config, args).await?,
        Commands::Webhook => {
            commands::webhook::execute(config).await?;
        }
        Commands::Status { id } => commands::status::execute(config, &id).await?,
    }
    Ok(())
}
