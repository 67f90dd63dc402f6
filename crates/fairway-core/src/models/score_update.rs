//! Queued score mutation model

use serde::{Deserialize, Serialize};

use super::EntryId;

/// A score mutation staged locally until the server settles it.
///
/// Created on enqueue, mutated only to flip `synced`, deleted once the server
/// accepts it or explicitly ignores it as stale. Multiple unsynced updates
/// for the same (entry, hole) pair are legal; the server's last-write-wins
/// verdict resolves them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedScoreUpdate {
    /// Locally-assigned sequence number (SQLite rowid)
    pub id: i64,
    /// Tournament entry the strokes belong to
    pub entry_id: EntryId,
    /// Hole number, 1-18
    pub hole: u8,
    /// Stroke count for the hole
    pub strokes: u32,
    /// Client-side mutation timestamp (Unix ms), serialized as ISO-8601 on the wire
    pub client_updated_at: i64,
    /// Whether the server has acknowledged this update
    pub synced: bool,
}
