//! Database layer: connection management, migrations, and the score queue

mod connection;
mod migrations;
mod queue;

pub use connection::Database;
pub use queue::{ScoreQueue, SqliteScoreQueue};
