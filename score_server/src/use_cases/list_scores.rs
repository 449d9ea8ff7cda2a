use crate::domain::entities::{ScoreEntry, TABLE_LIMIT};
use crate::domain::errors::ScoreError;
use crate::domain::ports::ScoreStore;
use crate::use_cases::submit_score::rank;

// List use case: the stored table, ranked and capped.
pub struct ListScoresUseCase<S> {
    pub store: S,
}

impl<S> ListScoresUseCase<S>
where
    S: ScoreStore,
{
    pub async fn execute(&self) -> Result<Vec<ScoreEntry>, ScoreError> {
        let mut table = self
            .store
            .load()
            .await
            .map_err(|_| ScoreError::StorageFailure)?;

        // A hand-edited file may be unsorted or oversized.
        rank(&mut table);
        table.truncate(TABLE_LIMIT);
        Ok(table)
    }
}
