//! fairway-core - Core library for Fairway
//!
//! This crate contains the offline score queue, sync orchestration, and the
//! deterministic handicap/payout engines shared by all Fairway interfaces.

pub mod db;
pub mod error;
pub mod handicap;
pub mod models;
pub mod payout;
pub mod sync;
pub mod util;

pub use error::{Error, Result};
pub use models::{EntryId, QueuedScoreUpdate};
