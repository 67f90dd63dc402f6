use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fairway_core::EntryId;

#[derive(Parser)]
#[command(name = "fairway")]
#[command(about = "Record tournament scores from the course, online or not")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to local database file
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    /// Tournament server base URL (falls back to FAIRWAY_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a score; queued locally until flushed to the server
    #[command(alias = "record")]
    Score {
        /// Tournament entry ID
        entry: EntryId,
        /// Hole number
        #[arg(value_parser = clap::value_parser!(u8).range(1..=18))]
        hole: u8,
        /// Stroke count
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        strokes: u32,
    },
    /// List score updates awaiting a server verdict
    Pending {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Push queued score updates to the server
    Flush,
    /// Show queue length and derived sync status
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compute course and playing handicap
    Handicap {
        /// Handicap index
        index: f64,
        /// Course slope rating
        slope: u32,
        /// Course rating
        rating: f64,
        /// Course par
        par: u32,
        /// Net allowance percentage
        #[arg(long, default_value = "100")]
        allowance: f64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Allocate a skins pot across entries
    Payout {
        /// Pot size in cents
        #[arg(long, value_name = "CENTS")]
        pot_cents: i64,
        /// Total skins won; defaults to the sum of the per-entry counts
        #[arg(long)]
        total_skins: Option<u32>,
        /// Per-entry skin counts as ENTRY=COUNT pairs
        #[arg(value_name = "ENTRY=COUNT", value_parser = parse_skin_count, required = true)]
        skins: Vec<(EntryId, u32)>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_skin_count(raw: &str) -> Result<(EntryId, u32), String> {
    let (entry, count) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ENTRY=COUNT, got `{raw}`"))?;

    let entry: EntryId = entry
        .parse()
        .map_err(|error| format!("invalid entry id in `{raw}`: {error}"))?;
    let count: u32 = count
        .trim()
        .parse()
        .map_err(|error| format!("invalid skin count in `{raw}`: {error}"))?;

    Ok((entry, count))
}
