use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

use crate::domain::entities::ScoreEntry;
use crate::domain::ports::ScoreStore;

// Application state shared by the score handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ScoreStore>,
    // Held across load-modify-save in the submit use case.
    pub write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: Arc<dyn ScoreStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}

// In-memory score store adapter, used by tests and throwaway runs.
#[derive(Clone, Default)]
pub struct InMemoryScoreStore {
    pub table: Arc<Mutex<Vec<ScoreEntry>>>,
}

#[async_trait]
impl ScoreStore for InMemoryScoreStore {
    async fn load(&self) -> Result<Vec<ScoreEntry>, String> {
        Ok(self.table.lock().await.clone())
    }

    async fn save(&self, table: &[ScoreEntry]) -> Result<(), String> {
        *self.table.lock().await = table.to_vec();
        Ok(())
    }
}

// JSON file store: the whole table lives in one pretty-printed array.
#[derive(Clone, Debug)]
pub struct JsonFileScoreStore {
    pub path: PathBuf,
}

impl JsonFileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        PathBuf::from(staging)
    }
}

#[async_trait]
impl ScoreStore for JsonFileScoreStore {
    async fn load(&self) -> Result<Vec<ScoreEntry>, String> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(format!("read {}: {e}", self.path.display())),
        };

        match serde_json::from_str(&raw) {
            Ok(table) => Ok(table),
            Err(e) => {
                // A corrupt file starts a fresh table; the next save overwrites it.
                warn!(path = %self.path.display(), error = %e, "unreadable score file");
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, table: &[ScoreEntry]) -> Result<(), String> {
        let body = serde_json::to_vec_pretty(table).map_err(|e| e.to_string())?;

        // Write-then-rename so readers never see a half-written table.
        let staging = self.staging_path();
        tokio::fs::write(&staging, body)
            .await
            .map_err(|e| format!("write {}: {e}", staging.display()))?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(|e| format!("rename to {}: {e}", self.path.display()))
    }
}
