use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::ScoreEntry;

// Port for high-score table persistence used by score use cases.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    async fn load(&self) -> Result<Vec<ScoreEntry>, String>;
    async fn save(&self, table: &[ScoreEntry]) -> Result<(), String>;
}

#[async_trait]
impl<T: ScoreStore + ?Sized> ScoreStore for Arc<T> {
    async fn load(&self) -> Result<Vec<ScoreEntry>, String> {
        (**self).load().await
    }

    async fn save(&self, table: &[ScoreEntry]) -> Result<(), String> {
        (**self).save(table).await
    }
}
