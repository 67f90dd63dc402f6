//! Sync status derivation

use serde::{Deserialize, Serialize};
use std::fmt;

/// User-visible sync state for the local score queue
///
/// A pure projection of queue length, flushing flag, and reachability;
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    /// Queue is empty and no flush is running
    Synced,
    /// Updates are queued or a flush is in flight
    Syncing,
    /// Device is unreachable; updates accumulate locally
    Offline,
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Synced => "synced",
            Self::Syncing => "syncing",
            Self::Offline => "offline",
        })
    }
}

/// Derive the displayed sync status from reachability and queue state.
///
/// Offline overrides everything else. Total over the input space; no error
/// path.
#[must_use]
pub const fn derive(online: bool, queue_length: usize, is_flushing: bool) -> SyncStatus {
    if !online {
        SyncStatus::Offline
    } else if is_flushing || queue_length > 0 {
        SyncStatus::Syncing
    } else {
        SyncStatus::Synced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_overrides_everything() {
        for queue_length in [0, 1, 3] {
            for is_flushing in [false, true] {
                assert_eq!(
                    derive(false, queue_length, is_flushing),
                    SyncStatus::Offline
                );
            }
        }
    }

    #[test]
    fn test_online_empty_idle_is_synced() {
        assert_eq!(derive(true, 0, false), SyncStatus::Synced);
    }

    #[test]
    fn test_online_with_queue_is_syncing() {
        assert_eq!(derive(true, 3, false), SyncStatus::Syncing);
    }

    #[test]
    fn test_online_flushing_is_syncing() {
        assert_eq!(derive(true, 0, true), SyncStatus::Syncing);
    }

    #[test]
    fn test_display_matches_serde() {
        assert_eq!(SyncStatus::Synced.to_string(), "synced");
        assert_eq!(
            serde_json::to_string(&SyncStatus::Offline).unwrap(),
            "\"offline\""
        );
    }
}
