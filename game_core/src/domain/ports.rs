use async_trait::async_trait;

use crate::domain::high_scores::{HighScoreEntry, SubmitScore};

// Port for the external high-score persistence service.
#[async_trait]
pub trait ScoreService: Send + Sync {
    async fn fetch_scores(&self) -> Result<Vec<HighScoreEntry>, String>;
    async fn submit_score(&self, submission: SubmitScore) -> Result<Vec<HighScoreEntry>, String>;
}
