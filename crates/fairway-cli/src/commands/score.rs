use std::path::Path;

use fairway_core::db::{ScoreQueue, SqliteScoreQueue};
use fairway_core::EntryId;

use crate::commands::common::open_database;
use crate::error::CliError;

pub fn run_score(
    entry: &EntryId,
    hole: u8,
    strokes: u32,
    db_path: &Path,
) -> Result<(), CliError> {
    let db = open_database(db_path)?;
    let queue = SqliteScoreQueue::new(db.connection());
    let update = queue.enqueue(entry, hole, strokes)?;

    println!(
        "Queued update {}: {} hole {} = {} strokes",
        update.id, update.entry_id, update.hole, update.strokes
    );
    Ok(())
}
