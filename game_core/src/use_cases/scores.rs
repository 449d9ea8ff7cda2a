// Non-blocking high-score access for the simulation.
//
// The session only ever reads the cached table and queues commands. The score
// task owns the network round trips and swaps the table when they resolve.

use crate::domain::high_scores::{HighScoreEntry, SubmitScore, qualifies};
use crate::domain::ports::ScoreService;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreCommand {
    Fetch,
    Submit(SubmitScore),
}

/// Session-side handle: a cached table plus a fire-and-forget command queue.
#[derive(Debug, Clone)]
pub struct ScoreBoard {
    table_rx: watch::Receiver<Vec<HighScoreEntry>>,
    command_tx: mpsc::UnboundedSender<ScoreCommand>,
}

/// Task-side ends of the score board channels.
#[derive(Debug)]
pub struct ScoreBackend {
    pub table_tx: watch::Sender<Vec<HighScoreEntry>>,
    pub command_rx: mpsc::UnboundedReceiver<ScoreCommand>,
}

impl ScoreBoard {
    pub fn channel(initial: Vec<HighScoreEntry>) -> (Self, ScoreBackend) {
        let (table_tx, table_rx) = watch::channel(initial);
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        (
            Self {
                table_rx,
                command_tx,
            },
            ScoreBackend {
                table_tx,
                command_rx,
            },
        )
    }

    /// Copy of the table as last seen from the service.
    pub fn table(&self) -> Vec<HighScoreEntry> {
        self.table_rx.borrow().clone()
    }

    pub fn qualifies(&self, score: u32) -> bool {
        qualifies(&self.table_rx.borrow(), score)
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<HighScoreEntry>> {
        self.table_rx.clone()
    }

    pub fn request_fetch(&self) {
        self.dispatch(ScoreCommand::Fetch);
    }

    pub fn submit(&self, submission: SubmitScore) {
        self.dispatch(ScoreCommand::Submit(submission));
    }

    fn dispatch(&self, command: ScoreCommand) {
        // Without a running score task the game keeps its cached table.
        if self.command_tx.send(command).is_err() {
            debug!("score task not running; command dropped");
        }
    }
}

/// Drains score commands until every `ScoreBoard` is dropped.
pub async fn score_task<S>(service: Arc<S>, backend: ScoreBackend)
where
    S: ScoreService + ?Sized,
{
    let ScoreBackend {
        table_tx,
        mut command_rx,
    } = backend;

    while let Some(command) = command_rx.recv().await {
        match command {
            ScoreCommand::Fetch => match service.fetch_scores().await {
                Ok(table) => {
                    debug!(entries = table.len(), "high scores fetched");
                    table_tx.send_replace(table);
                }
                Err(error) => {
                    warn!(%error, "high score fetch failed; showing empty table");
                    table_tx.send_replace(Vec::new());
                }
            },
            ScoreCommand::Submit(submission) => {
                let score = submission.score;
                match service.submit_score(submission).await {
                    Ok(table) => {
                        debug!(score, entries = table.len(), "high score submitted");
                        table_tx.send_replace(table);
                    }
                    Err(error) => {
                        warn!(%error, score, "high score submit failed; dropped");
                    }
                }
            }
        }
    }

    debug!("score task stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct FakeScores {
        stored: Mutex<Vec<HighScoreEntry>>,
        fail_fetch: bool,
        fail_submit: bool,
    }

    #[async_trait]
    impl ScoreService for FakeScores {
        async fn fetch_scores(&self) -> Result<Vec<HighScoreEntry>, String> {
            if self.fail_fetch {
                return Err("connection refused".to_string());
            }
            Ok(self.stored.lock().map_err(|e| e.to_string())?.clone())
        }

        async fn submit_score(
            &self,
            submission: SubmitScore,
        ) -> Result<Vec<HighScoreEntry>, String> {
            if self.fail_submit {
                return Err("upstream returned 500".to_string());
            }
            let mut stored = self.stored.lock().map_err(|e| e.to_string())?;
            stored.push(HighScoreEntry {
                initials: submission.name,
                score: submission.score,
                round: submission.round,
            });
            Ok(stored.clone())
        }
    }

    fn entry(initials: &str, score: u32) -> HighScoreEntry {
        HighScoreEntry {
            initials: initials.to_string(),
            score,
            round: 1,
        }
    }

    async fn next_table(rx: &mut watch::Receiver<Vec<HighScoreEntry>>) -> Vec<HighScoreEntry> {
        tokio::time::timeout(Duration::from_secs(2), rx.changed())
            .await
            .expect("table update timed out")
            .expect("table sender dropped");
        rx.borrow_and_update().clone()
    }

    #[tokio::test]
    async fn when_submit_succeeds_then_table_is_replaced() {
        let service = Arc::new(FakeScores::default());
        let (board, backend) = ScoreBoard::channel(Vec::new());
        let mut rx = board.subscribe();
        tokio::spawn(score_task(service, backend));

        board.submit(SubmitScore {
            name: "ACE".to_string(),
            score: 900,
            round: 3,
        });

        let table = next_table(&mut rx).await;
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].initials, "ACE");
        assert_eq!(board.table(), table);
    }

    #[tokio::test]
    async fn when_fetch_fails_then_table_degrades_to_empty() {
        let service = Arc::new(FakeScores {
            fail_fetch: true,
            ..Default::default()
        });
        let (board, backend) = ScoreBoard::channel(vec![entry("OLD", 10)]);
        let mut rx = board.subscribe();
        tokio::spawn(score_task(service, backend));

        board.request_fetch();

        assert!(next_table(&mut rx).await.is_empty());
        assert!(board.qualifies(1));
    }

    #[tokio::test]
    async fn when_submit_fails_then_table_is_left_alone() {
        let service = Arc::new(FakeScores {
            fail_submit: true,
            ..Default::default()
        });
        let initial = vec![entry("OLD", 10)];
        let (board, backend) = ScoreBoard::channel(initial.clone());
        let rx = board.subscribe();
        let task = tokio::spawn(score_task(service, backend));

        board.submit(SubmitScore {
            name: "NEW".to_string(),
            score: 50,
            round: 1,
        });
        drop(board);
        task.await.expect("score task panicked");

        assert_eq!(*rx.borrow(), initial);
    }

    #[test]
    fn when_no_task_is_running_then_commands_are_dropped_quietly() {
        let (board, backend) = ScoreBoard::channel(vec![entry("AAA", 5)]);
        drop(backend);

        board.request_fetch();

        assert!(board.qualifies(6));
        assert_eq!(board.table().len(), 1);
    }
}
