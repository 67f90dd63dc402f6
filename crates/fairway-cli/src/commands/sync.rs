use std::path::Path;

use fairway_core::db::{ScoreQueue, SqliteScoreQueue};
use fairway_core::sync::{derive, HttpScoreClient, SyncCoordinator};
use serde::Serialize;

use crate::commands::common::{open_database, resolve_api_base_url};
use crate::error::CliError;

pub async fn run_flush(api_url: Option<String>, db_path: &Path) -> Result<(), CliError> {
    let base_url = resolve_api_base_url(api_url)?;
    let client = HttpScoreClient::new(base_url)?;
    let db = open_database(db_path)?;
    let coordinator = SyncCoordinator::new(&db, client);

    let summary = coordinator
        .flush_with(|| println!("Server holds newer state; refetch tournament scores"))
        .await?;

    if summary.attempted == 0 {
        println!("Nothing to flush.");
        return Ok(());
    }

    println!(
        "Flush complete: {} accepted, {} ignored, {} failed of {} attempted",
        summary.accepted, summary.ignored, summary.failed, summary.attempted
    );
    Ok(())
}

#[derive(Debug, Serialize)]
struct StatusReport {
    status: String,
    pending: usize,
}

pub fn run_status(as_json: bool, db_path: &Path) -> Result<(), CliError> {
    let db = open_database(db_path)?;
    let pending = SqliteScoreQueue::new(db.connection()).pending_count()?;

    // A one-shot CLI process has no reachability watcher or in-flight flush;
    // status reflects queue state with the device assumed online.
    let status = derive(true, pending, false);

    if as_json {
        let report = StatusReport {
            status: status.to_string(),
            pending,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Status: {status} ({pending} pending)");
    Ok(())
}
