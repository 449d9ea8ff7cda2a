use crate::domain::high_scores::HighScoreEntry;
use crate::interface_adapters::protocol::SessionSnapshotDto;
use crate::use_cases::SessionSnapshot;
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

/// Serializes each snapshot once into the JSON render surface.
///
/// Only the latest frame is kept; a renderer that falls behind simply reads the
/// newest one.
pub async fn snapshot_serializer(
    mut snapshot_rx: broadcast::Receiver<SessionSnapshot>,
    latest_tx: watch::Sender<String>,
) {
    loop {
        match snapshot_rx.recv().await {
            Ok(snapshot) => {
                let dto = SessionSnapshotDto::from(&snapshot);
                match serde_json::to_string(&dto) {
                    Ok(json) => {
                        latest_tx.send_replace(json);
                    }
                    Err(e) => {
                        error!(error = ?e, "failed to serialize snapshot");
                    }
                }
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!(missed = n, "snapshot serializer lagged; skipping to latest");
            }
            Err(broadcast::error::RecvError::Closed) => {
                break;
            }
        }
    }
}

/// Logs every high-score table the score task publishes.
///
/// Returns the number of tables seen once the score task is gone.
pub async fn high_score_reporter(mut table_rx: watch::Receiver<Vec<HighScoreEntry>>) -> usize {
    let mut seen = 0;
    while table_rx.changed().await.is_ok() {
        let table = table_rx.borrow_and_update().clone();
        seen += 1;
        let top = table.first();
        info!(
            entries = table.len(),
            top_initials = top.map(|e| e.initials.as_str()).unwrap_or("---"),
            top_score = top.map(|e| e.score).unwrap_or(0),
            "high score table updated"
        );
    }
    seen
}
