//! HTTP client for the remote scores endpoint

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::QueuedScoreUpdate;
use crate::util::{compact_text, is_http_url, normalize_text_option};

/// Wire payload for `POST /api/scores`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmission {
    pub entry_id: String,
    pub hole: u8,
    pub strokes: u32,
    pub client_updated_at: DateTime<Utc>,
}

impl From<&QueuedScoreUpdate> for ScoreSubmission {
    fn from(update: &QueuedScoreUpdate) -> Self {
        Self {
            entry_id: update.entry_id.as_str().to_string(),
            hole: update.hole,
            strokes: update.strokes,
            client_updated_at: DateTime::from_timestamp_millis(update.client_updated_at)
                .unwrap_or(DateTime::UNIX_EPOCH),
        }
    }
}

/// Per-item server verdict for a submitted score
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitVerdict {
    /// Server applied the mutation
    Accepted,
    /// Server already holds newer state; the local copy is stale
    Ignored { reason: Option<String> },
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Invalid scores endpoint configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Score submission HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Scores API error: {0}")]
    Api(String),
    #[error("Invalid scores API payload: {0}")]
    InvalidPayload(String),
}

pub type SubmitResult<T> = Result<T, SubmitError>;

/// Transport seam for score submission
///
/// The coordinator treats every error as retryable; only an explicit server
/// verdict settles a queued update.
#[allow(async_fn_in_trait)]
pub trait ScoreSubmitter {
    async fn submit(&self, submission: &ScoreSubmission) -> SubmitResult<SubmitVerdict>;
}

/// reqwest-backed `ScoreSubmitter` for the tournament server
#[derive(Clone)]
pub struct HttpScoreClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpScoreClient {
    /// Build a client posting to `{base_url}/api/scores`
    pub fn new(base_url: impl Into<String>) -> SubmitResult<Self> {
        let base = normalize_base_url(base_url.into())?;
        Ok(Self {
            endpoint: format!("{base}/api/scores"),
            client: reqwest::Client::builder().build()?,
        })
    }

    /// Full endpoint URL submissions are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ScoreSubmitter for HttpScoreClient {
    async fn submit(&self, submission: &ScoreSubmission) -> SubmitResult<SubmitVerdict> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(submission)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::Api(parse_api_error(status, &body)));
        }

        let payload = response.json::<SubmitResponse>().await?;
        payload.try_into()
    }
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    status: String,
    reason: Option<String>,
}

impl TryFrom<SubmitResponse> for SubmitVerdict {
    type Error = SubmitError;

    fn try_from(value: SubmitResponse) -> SubmitResult<Self> {
        match value.status.as_str() {
            "accepted" => Ok(Self::Accepted),
            "ignored" => Ok(Self::Ignored {
                reason: normalize_text_option(value.reason),
            }),
            other => Err(SubmitError::InvalidPayload(format!(
                "unknown verdict status `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    message: Option<String>,
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = payload.message.or(payload.error) {
            return format!("{} ({})", message.trim(), status.as_u16());
        }
    }

    let trimmed = compact_text(body);
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    }
}

fn normalize_base_url(raw: String) -> SubmitResult<String> {
    let base = normalize_text_option(Some(raw)).ok_or_else(|| {
        SubmitError::InvalidConfiguration("base URL must not be empty".to_string())
    })?;
    if is_http_url(&base) {
        Ok(base.trim_end_matches('/').to_string())
    } else {
        Err(SubmitError::InvalidConfiguration(
            "base URL must include http:// or https://".to_string(),
        ))
    }
}
