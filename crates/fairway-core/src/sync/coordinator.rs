//! Flush orchestration for the local score queue
//!
//! A coordinator is an explicit instance constructed with its queue database
//! and submitter injected. Callers (UI shells, reachability watchers) own
//! triggering `set_online` and `flush` at the right lifecycle moments; the
//! coordinator owns the per-item settle semantics.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;

use crate::db::{Database, ScoreQueue, SqliteScoreQueue};
use crate::error::Result;
use crate::sync::client::{ScoreSubmission, ScoreSubmitter, SubmitVerdict};
use crate::sync::status::{derive, SyncStatus};

/// Outcome counts for one flush pass
///
/// A reentrant flush call that was skipped reports all zeroes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FlushSummary {
    /// Items in the snapshot at flush start
    pub attempted: usize,
    /// Items the server accepted (removed from the queue)
    pub accepted: usize,
    /// Items the server ignored as stale (removed; refetch requested)
    pub ignored: usize,
    /// Items that hit a transient failure (left queued)
    pub failed: usize,
}

impl FlushSummary {
    /// True when every attempted item reached a terminal verdict
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.failed == 0
    }
}

/// Orchestrates flush attempts against the remote scores endpoint
pub struct SyncCoordinator<'a, S> {
    db: &'a Database,
    submitter: S,
    online: AtomicBool,
    flushing: AtomicBool,
}

impl<'a, S: ScoreSubmitter> SyncCoordinator<'a, S> {
    /// Create a coordinator over the given queue database and submitter
    ///
    /// Starts online; reachability watchers adjust via [`Self::set_online`].
    pub const fn new(db: &'a Database, submitter: S) -> Self {
        Self {
            db,
            submitter,
            online: AtomicBool::new(true),
            flushing: AtomicBool::new(false),
        }
    }

    /// Last recorded reachability state
    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }

    /// Whether a flush pass is currently in flight
    pub fn is_flushing(&self) -> bool {
        self.flushing.load(Ordering::SeqCst)
    }

    /// Record a reachability change
    ///
    /// Going online triggers a flush attempt (its errors are logged, not
    /// propagated). Going offline records state only; in-flight network
    /// calls are not cancelled, they fail naturally.
    pub async fn set_online(&self, online: bool) {
        let was_online = self.online.swap(online, Ordering::SeqCst);

        if online && !was_online {
            tracing::debug!("Back online, attempting flush");
            if let Err(error) = self.flush().await {
                tracing::warn!("Flush after reconnect failed: {error}");
            }
        }
    }

    /// Current user-visible status derived from reachability and queue state
    pub fn status(&self) -> Result<SyncStatus> {
        let pending = SqliteScoreQueue::new(self.db.connection()).pending_count()?;
        Ok(derive(self.is_online(), pending, self.is_flushing()))
    }

    /// Flush pending updates without a refetch callback
    pub async fn flush(&self) -> Result<FlushSummary> {
        self.flush_with(|| {}).await
    }

    /// Flush pending updates, invoking `on_refetch_needed` for every update
    /// the server ignored as stale
    ///
    /// At most one flush runs at a time: a reentrant call is a no-op. The
    /// pending snapshot is read once at flush start, so updates enqueued
    /// mid-flush wait for the next pass. Per-item failures are transient and
    /// independent; only a queue storage failure aborts the pass, and the
    /// in-flight flag is cleared either way.
    pub async fn flush_with<F: FnMut()>(&self, mut on_refetch_needed: F) -> Result<FlushSummary> {
        if self.flushing.swap(true, Ordering::SeqCst) {
            tracing::debug!("Flush already in progress, skipping");
            return Ok(FlushSummary::default());
        }

        let result = self.run_flush(&mut on_refetch_needed).await;
        self.flushing.store(false, Ordering::SeqCst);
        result
    }

    async fn run_flush(&self, on_refetch_needed: &mut dyn FnMut()) -> Result<FlushSummary> {
        let queue = SqliteScoreQueue::new(self.db.connection());
        let snapshot = queue.pending_items()?;
        let mut summary = FlushSummary {
            attempted: snapshot.len(),
            ..FlushSummary::default()
        };

        for update in &snapshot {
            let submission = ScoreSubmission::from(update);
            match self.submitter.submit(&submission).await {
                Ok(SubmitVerdict::Accepted) => {
                    queue.remove_settled(update.id)?;
                    summary.accepted += 1;
                    tracing::debug!("Update {} accepted", update.id);
                }
                Ok(SubmitVerdict::Ignored { reason }) => {
                    // Server state is newer; drop the local copy and ask the
                    // caller to refetch authoritative scores.
                    queue.remove_settled(update.id)?;
                    summary.ignored += 1;
                    tracing::info!(
                        "Update {} ignored as stale ({})",
                        update.id,
                        reason.as_deref().unwrap_or("no reason given")
                    );
                    on_refetch_needed();
                }
                Err(error) => {
                    // Transient: the item stays queued for the next pass
                    summary.failed += 1;
                    tracing::warn!("Update {} submission failed: {error}", update.id);
                }
            }
        }

        tracing::debug!(
            "Flush pass complete: {}/{} settled",
            summary.accepted + summary.ignored,
            summary.attempted
        );
        Ok(summary)
    }
}
