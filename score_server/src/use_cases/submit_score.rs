use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::{ScoreEntry, TABLE_LIMIT};
use crate::domain::errors::ScoreError;
use crate::domain::ports::ScoreStore;
use crate::interface_adapters::protocol::SubmitScoreRequest;

const INITIALS_LEN: usize = 3;
const INITIALS_PAD: char = 'A';

// Submit use case: sanitize, insert, rank, cap and persist.
pub struct SubmitScoreUseCase<S> {
    pub store: S,
    // Serializes load-modify-save so concurrent submissions cannot drop rows.
    pub write_lock: Arc<Mutex<()>>,
}

impl<S> SubmitScoreUseCase<S>
where
    S: ScoreStore,
{
    pub async fn execute(
        &self,
        payload: SubmitScoreRequest,
    ) -> Result<Vec<ScoreEntry>, ScoreError> {
        let initials = sanitize_name(payload.name.as_ref())?;
        let score = sanitize_score(payload.score.as_ref())?;
        let round = sanitize_round(payload.round.as_ref());

        let _guard = self.write_lock.lock().await;

        let mut table = self
            .store
            .load()
            .await
            .map_err(|_| ScoreError::StorageFailure)?;
        table.push(ScoreEntry {
            initials,
            score,
            round,
        });
        rank(&mut table);
        table.truncate(TABLE_LIMIT);

        self.store
            .save(&table)
            .await
            .map_err(|_| ScoreError::StorageFailure)?;

        Ok(table)
    }
}

/// Stable sort by score, highest first. Equal scores keep insertion order.
pub(crate) fn rank(table: &mut [ScoreEntry]) {
    table.sort_by(|a, b| b.score.cmp(&a.score));
}

fn sanitize_name(value: Option<&Value>) -> Result<String, ScoreError> {
    let raw = value
        .and_then(Value::as_str)
        .ok_or(ScoreError::MissingName)?;

    let mut initials: String = raw
        .chars()
        .flat_map(char::to_uppercase)
        .filter(|c| c.is_ascii_uppercase())
        .take(INITIALS_LEN)
        .collect();
    while initials.len() < INITIALS_LEN {
        initials.push(INITIALS_PAD);
    }
    Ok(initials)
}

fn sanitize_score(value: Option<&Value>) -> Result<u32, ScoreError> {
    let score = value
        .and_then(Value::as_f64)
        .filter(|s| s.is_finite())
        .ok_or(ScoreError::InvalidScore)?;

    // `as` saturates: negatives land on 0, huge values on u32::MAX.
    Ok(score.floor() as u32)
}

fn sanitize_round(value: Option<&Value>) -> u32 {
    match value.and_then(Value::as_f64) {
        Some(round) if round.is_finite() && round >= 1.0 => round.floor() as u32,
        _ => 1,
    }
}
