//! Score queue repository implementation

use crate::error::{Error, Result};
use crate::models::{EntryId, QueuedScoreUpdate};
use crate::util::unix_millis_now;
use rusqlite::{params, params_from_iter, Connection};

/// Trait for the local score mutation queue
///
/// A durable FIFO staging area for score mutations that cannot be applied
/// instantaneously. Storage failures are surfaced to the caller, never
/// swallowed.
pub trait ScoreQueue {
    /// Append a new unsynced update with the current timestamp
    fn enqueue(&self, entry_id: &EntryId, hole: u8, strokes: u32) -> Result<QueuedScoreUpdate>;

    /// Count of entries still awaiting a server verdict
    fn pending_count(&self) -> Result<usize>;

    /// Unsynced updates in insertion order
    ///
    /// Order matters: the flush loop processes items sequentially and callers
    /// must not assume any item is retried out of order.
    fn pending_items(&self) -> Result<Vec<QueuedScoreUpdate>>;

    /// Set `synced` for exactly the given ids; returns the count modified
    ///
    /// An empty id list is a no-op returning 0 and issues no query.
    fn mark_synced(&self, ids: &[i64]) -> Result<usize>;

    /// Delete a record outright once the server has given a terminal verdict
    /// (accepted, or explicitly ignored as stale)
    fn remove_settled(&self, id: i64) -> Result<()>;
}

/// `SQLite` implementation of `ScoreQueue`
pub struct SqliteScoreQueue<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteScoreQueue<'a> {
    /// Create a new queue over the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Parse a queued update from a database row
    fn parse_update(row: &rusqlite::Row<'_>) -> rusqlite::Result<QueuedScoreUpdate> {
        let entry_id: String = row.get(1)?;
        Ok(QueuedScoreUpdate {
            id: row.get(0)?,
            entry_id: EntryId::new(entry_id),
            hole: row.get(2)?,
            strokes: row.get(3)?,
            client_updated_at: row.get(4)?,
            synced: row.get::<_, i32>(5)? != 0,
        })
    }
}

impl ScoreQueue for SqliteScoreQueue<'_> {
    fn enqueue(&self, entry_id: &EntryId, hole: u8, strokes: u32) -> Result<QueuedScoreUpdate> {
        let now = unix_millis_now();

        self.conn.execute(
            "INSERT INTO pending_scores (entry_id, hole, strokes, client_updated_at, synced)
             VALUES (?, ?, ?, ?, 0)",
            params![entry_id.as_str(), hole, strokes, now],
        )?;

        Ok(QueuedScoreUpdate {
            id: self.conn.last_insert_rowid(),
            entry_id: entry_id.clone(),
            hole,
            strokes,
            client_updated_at: now,
            synced: false,
        })
    }

    fn pending_count(&self) -> Result<usize> {
        let count: usize = self.conn.query_row(
            "SELECT COUNT(*) FROM pending_scores WHERE synced = 0",
            [],
            |row| row.get(0),
        )?;

        Ok(count)
    }

    fn pending_items(&self) -> Result<Vec<QueuedScoreUpdate>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, entry_id, hole, strokes, client_updated_at, synced
             FROM pending_scores
             WHERE synced = 0
             ORDER BY id ASC",
        )?;

        let updates = stmt
            .query_map([], Self::parse_update)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(updates)
    }

    fn mark_synced(&self, ids: &[i64]) -> Result<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!("UPDATE pending_scores SET synced = 1 WHERE id IN ({placeholders})");
        let changed = self.conn.execute(&sql, params_from_iter(ids.iter()))?;

        Ok(changed)
    }

    fn remove_settled(&self, id: i64) -> Result<()> {
        let rows = self
            .conn
            .execute("DELETE FROM pending_scores WHERE id = ?", params![id])?;

        if rows == 0 {
            return Err(Error::NotFound(id.to_string()));
        }

        Ok(())
    }
}
