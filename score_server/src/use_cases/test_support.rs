use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::ScoreEntry;
use crate::domain::ports::ScoreStore;

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub load: bool,
    pub save: bool,
}

// In-memory store that records every save for assertions.
#[derive(Clone)]
pub(crate) struct RecordingStore {
    table: Arc<Mutex<Vec<ScoreEntry>>>,
    saves: Arc<Mutex<usize>>,
    failures: FailureFlags,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            table: Arc::new(Mutex::new(Vec::new())),
            saves: Arc::new(Mutex::new(0)),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn with_scores(self, scores: &[u32]) -> Self {
        {
            let mut guard = self.table.lock().expect("table mutex poisoned");
            *guard = scores
                .iter()
                .map(|&score| ScoreEntry {
                    initials: "OLD".to_string(),
                    score,
                    round: 1,
                })
                .collect();
        }
        self
    }

    pub(crate) fn stored(&self) -> Vec<ScoreEntry> {
        self.table.lock().expect("table mutex poisoned").clone()
    }

    pub(crate) fn save_count(&self) -> usize {
        *self.saves.lock().expect("saves mutex poisoned")
    }
}

#[async_trait]
impl ScoreStore for RecordingStore {
    async fn load(&self) -> Result<Vec<ScoreEntry>, String> {
        if self.failures.load {
            return Err("load failed".to_string());
        }
        Ok(self.table.lock().expect("table mutex poisoned").clone())
    }

    async fn save(&self, table: &[ScoreEntry]) -> Result<(), String> {
        if self.failures.save {
            return Err("save failed".to_string());
        }
        *self.table.lock().expect("table mutex poisoned") = table.to_vec();
        *self.saves.lock().expect("saves mutex poisoned") += 1;
        Ok(())
    }
}
