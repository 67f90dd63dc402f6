use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] fairway_core::Error),
    #[error(transparent)]
    Submit(#[from] fairway_core::sync::SubmitError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error(
        "Scores API is not configured. Pass --api-url or set FAIRWAY_API_URL to enable `fairway flush`."
    )]
    ApiNotConfigured,
}
