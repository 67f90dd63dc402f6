//! Score sync: submission client, flush coordination, and status derivation

mod client;
mod coordinator;
mod status;

pub use client::{
    HttpScoreClient, ScoreSubmission, ScoreSubmitter, SubmitError, SubmitResult, SubmitVerdict,
};
pub use coordinator::{FlushSummary, SyncCoordinator};
pub use status::{derive, SyncStatus};
