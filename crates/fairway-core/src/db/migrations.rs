//! Database migrations

use crate::error::Result;
use rusqlite::Connection;

/// Current schema version
const CURRENT_VERSION: i32 = 1;

/// Run all pending migrations
pub fn run(conn: &Connection) -> Result<()> {
    let version = get_version(conn)?;

    if version < 1 {
        migrate_v1(conn)?;
    }

    Ok(())
}

/// Get the current schema version
fn get_version(conn: &Connection) -> Result<i32> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get::<_, i32>(0).map(|flag| flag != 0),
    )?;

    if !exists {
        return Ok(0);
    }

    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;

    Ok(version)
}

/// Migration to version 1: Initial schema
fn migrate_v1(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "BEGIN;
         CREATE TABLE IF NOT EXISTS schema_version (
             version INTEGER PRIMARY KEY
         );
         -- Pending score mutations, one row per queued update
         CREATE TABLE IF NOT EXISTS pending_scores (
             id INTEGER PRIMARY KEY AUTOINCREMENT,
             entry_id TEXT NOT NULL,
             hole INTEGER NOT NULL,
             strokes INTEGER NOT NULL,
             client_updated_at INTEGER NOT NULL,
             synced INTEGER NOT NULL DEFAULT 0
         );
         CREATE INDEX IF NOT EXISTS idx_pending_scores_synced ON pending_scores(synced);
         INSERT INTO schema_version (version) VALUES (1);
         COMMIT;",
    )?;

    tracing::info!("Migrated database to version {CURRENT_VERSION}");
    Ok(())
}
