use super::frame::FrameClock;
use super::session::GameSession;
use super::types::SessionSnapshot;
use crate::domain::state::{ActionInput, Bounds};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, broadcast, watch};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::info;

/// Drives one session at a fixed interval until `shutdown` fires.
///
/// Input and viewport are sampled from their latest values each tick. Late ticks
/// are skipped rather than replayed; the frame clock clamps whatever time did
/// pass. Returns the session so callers can report the final state.
pub async fn game_task(
    mut session: GameSession,
    input_rx: watch::Receiver<ActionInput>,
    bounds_rx: watch::Receiver<Bounds>,
    snapshot_tx: broadcast::Sender<SessionSnapshot>,
    tick_interval: Duration,
    shutdown: Arc<Notify>,
) -> GameSession {
    let mut interval = tokio::time::interval(tick_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let started = Instant::now();
    let mut clock = FrameClock::new();

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                break;
            }
            _ = interval.tick() => {}
        }

        let step = clock.advance(started.elapsed().as_secs_f64() * 1000.0);
        let input = *input_rx.borrow();
        let bounds = *bounds_rx.borrow();

        session.tick(step, &input, bounds);

        // No subscribers is fine; snapshots are best-effort.
        let _ = snapshot_tx.send(session.snapshot());
    }

    info!(
        phase = ?session.phase(),
        score = session.score(),
        round = session.round(),
        "game loop stopped"
    );
    session
}
