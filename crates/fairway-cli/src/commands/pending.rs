use std::path::Path;

use chrono::DateTime;
use fairway_core::db::{ScoreQueue, SqliteScoreQueue};
use fairway_core::QueuedScoreUpdate;
use serde::Serialize;

use crate::commands::common::open_database;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct PendingItem {
    id: i64,
    entry_id: String,
    hole: u8,
    strokes: u32,
    client_updated_at: i64,
    client_updated_at_iso: String,
}

fn pending_item(update: &QueuedScoreUpdate) -> PendingItem {
    PendingItem {
        id: update.id,
        entry_id: update.entry_id.to_string(),
        hole: update.hole,
        strokes: update.strokes,
        client_updated_at: update.client_updated_at,
        client_updated_at_iso: iso_timestamp(update.client_updated_at),
    }
}

fn iso_timestamp(unix_ms: i64) -> String {
    DateTime::from_timestamp_millis(unix_ms)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .to_rfc3339()
}

pub fn run_pending(as_json: bool, db_path: &Path) -> Result<(), CliError> {
    let db = open_database(db_path)?;
    let items = SqliteScoreQueue::new(db.connection()).pending_items()?;

    if as_json {
        let json_items = items.iter().map(pending_item).collect::<Vec<PendingItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No pending score updates.");
        return Ok(());
    }

    for update in &items {
        println!(
            "#{} {} hole {}: {} strokes ({})",
            update.id,
            update.entry_id,
            update.hole,
            update.strokes,
            iso_timestamp(update.client_updated_at)
        );
    }
    Ok(())
}
