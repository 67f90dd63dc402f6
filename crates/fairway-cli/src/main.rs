//! Fairway CLI - Tournament scorekeeping from the command line
//!
//! Scores are queued locally and flushed to the tournament server when
//! connectivity allows.

mod cli;
mod commands;
mod error;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::common::resolve_db_path;
use crate::commands::handicap::run_handicap;
use crate::commands::payout::run_payout;
use crate::commands::pending::run_pending;
use crate::commands::score::run_score;
use crate::commands::sync::{run_flush, run_status};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fairway_core=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let db_path = resolve_db_path(cli.db_path);

    match cli.command {
        Commands::Score {
            entry,
            hole,
            strokes,
        } => run_score(&entry, hole, strokes, &db_path)?,
        Commands::Pending { json } => run_pending(json, &db_path)?,
        Commands::Flush => run_flush(cli.api_url, &db_path).await?,
        Commands::Status { json } => run_status(json, &db_path)?,
        Commands::Handicap {
            index,
            slope,
            rating,
            par,
            allowance,
            json,
        } => run_handicap(index, slope, rating, par, allowance, json)?,
        Commands::Payout {
            pot_cents,
            total_skins,
            skins,
            json,
        } => run_payout(pot_cents, total_skins, &skins, json)?,
    }

    Ok(())
}
