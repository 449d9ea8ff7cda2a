use crate::domain::high_scores::{HighScoreEntry, SubmitScore};
use crate::domain::ports::ScoreService;
use crate::interface_adapters::protocol::{ErrorResponse, ScoreEntryDto, SubmitScoreRequest};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt;
use std::time::Duration;

#[derive(Debug)]
pub enum ScoreClientError {
    /// Connection, timeout or other transport failure.
    Transport(reqwest::Error),
    /// The service answered with a non-success status.
    Upstream { status: StatusCode, message: String },
    /// The body was not a score table.
    Decode(reqwest::Error),
}

impl fmt::Display for ScoreClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreClientError::Transport(err) => write!(f, "score service unreachable: {err}"),
            ScoreClientError::Upstream { status, message } => {
                write!(f, "score service returned {status}: {message}")
            }
            ScoreClientError::Decode(err) => write!(f, "malformed score table: {err}"),
        }
    }
}

impl std::error::Error for ScoreClientError {}

// Thin reqwest client for the high-score service.
#[derive(Clone)]
pub struct ScoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl ScoreClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url: String = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn list(&self) -> Result<Vec<HighScoreEntry>, ScoreClientError> {
        let response = self
            .http
            .get(format!("{}/scores", self.base_url))
            .send()
            .await
            .map_err(ScoreClientError::Transport)?;

        read_table(response).await
    }

    pub async fn submit(
        &self,
        submission: SubmitScore,
    ) -> Result<Vec<HighScoreEntry>, ScoreClientError> {
        let response = self
            .http
            .post(format!("{}/scores", self.base_url))
            .json(&SubmitScoreRequest::from(submission))
            .send()
            .await
            .map_err(ScoreClientError::Transport)?;

        read_table(response).await
    }
}

async fn read_table(response: reqwest::Response) -> Result<Vec<HighScoreEntry>, ScoreClientError> {
    let status = response.status();
    if !status.is_success() {
        // Error bodies are advisory; fall back to the status reason.
        let message = match response.json::<ErrorResponse>().await {
            Ok(error) => error.message,
            Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
        };
        return Err(ScoreClientError::Upstream { status, message });
    }

    let entries = response
        .json::<Vec<ScoreEntryDto>>()
        .await
        .map_err(ScoreClientError::Decode)?;
    Ok(entries.into_iter().map(HighScoreEntry::from).collect())
}

#[async_trait]
impl ScoreService for ScoreClient {
    async fn fetch_scores(&self) -> Result<Vec<HighScoreEntry>, String> {
        self.list().await.map_err(|e| e.to_string())
    }

    async fn submit_score(&self, submission: SubmitScore) -> Result<Vec<HighScoreEntry>, String> {
        self.submit(submission).await.map_err(|e| e.to_string())
    }
}
