// Framework bootstrap for the headless game runner.

use crate::domain::ports::ScoreService;
use crate::domain::state::ActionInput;
use crate::domain::tuning::GameTuning;
use crate::frameworks::config;
use crate::interface_adapters::clients::ScoreClient;
use crate::interface_adapters::pilot::pilot_task;
use crate::interface_adapters::render::{high_score_reporter, snapshot_serializer};
use crate::interface_adapters::utils::rng::session_seed;
use crate::use_cases::{
    GameSession, ScoreBoard, SessionConfig, SessionSnapshot, game_task, score_task,
};

use std::io::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, broadcast, watch};

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Plays one piloted session against `scores` and returns its final snapshot.
///
/// `run_for` of `None` plays until Ctrl-C.
pub async fn run(
    session_config: SessionConfig,
    scores: Arc<dyn ScoreService>,
    run_for: Option<Duration>,
) -> Result<SessionSnapshot> {
    let (board, backend) = ScoreBoard::channel(Vec::new());
    tokio::spawn(score_task(scores, backend));
    tokio::spawn(high_score_reporter(board.subscribe()));

    let session = GameSession::new(session_config, board);

    // input_tx/rx: held actions, written by the input host, sampled every tick.
    let (input_tx, input_rx) = watch::channel(ActionInput::default());
    // bounds_tx/rx: viewport size; a host would update it on resize.
    let (_bounds_tx, bounds_rx) = watch::channel(session_config.bounds);
    // snapshot_tx/rx: one snapshot per tick for renderers and the pilot.
    let (snapshot_tx, _snapshot_rx) = broadcast::channel(config::SNAPSHOT_BROADCAST_CAPACITY);
    // latest_tx/rx: JSON render surface for the most recent tick.
    let (latest_tx, latest_rx) = watch::channel(String::new());

    tokio::spawn(snapshot_serializer(snapshot_tx.subscribe(), latest_tx));
    tokio::spawn(pilot_task(snapshot_tx.subscribe(), input_tx));

    let shutdown = Arc::new(Notify::new());
    let game = tokio::spawn(game_task(
        session,
        input_rx,
        bounds_rx,
        snapshot_tx,
        config::FRAME_INTERVAL,
        shutdown.clone(),
    ));

    tracing::info!(
        seed = session_config.seed,
        width = session_config.bounds.width(),
        height = session_config.bounds.height(),
        touch_primary = session_config.touch_primary,
        "session running"
    );

    match run_for {
        Some(duration) => tokio::time::sleep(duration).await,
        None => tokio::signal::ctrl_c().await?,
    }
    shutdown.notify_one();

    let session = game.await.map_err(std::io::Error::other)?;
    let snapshot = session.snapshot();
    tracing::info!(
        phase = ?snapshot.phase,
        score = snapshot.score,
        round = snapshot.round,
        lives = snapshot.lives,
        "session finished"
    );
    tracing::debug!(frame = %latest_rx.borrow().as_str(), "last rendered frame");

    Ok(snapshot)
}

pub async fn run_with_config() -> Result<SessionSnapshot> {
    init_runtime();

    let tuning = config::load_tuning().unwrap_or_else(|e| {
        tracing::error!(error = %e, "invalid tuning file; using defaults");
        GameTuning::default()
    });

    let score_url = config::score_service_url();
    let score_timeout = config::score_request_timeout();
    let client = ScoreClient::new(score_url.clone(), score_timeout)
        .map_err(|e| std::io::Error::other(format!("failed to initialize score client: {e}")))?;
    tracing::debug!(
        score_url = %score_url,
        score_timeout_ms = score_timeout.as_millis(),
        "score client configured"
    );

    let session_config = SessionConfig {
        tuning,
        seed: session_seed(config::game_seed()),
        bounds: config::viewport(),
        touch_primary: config::touch_primary(),
    };

    run(session_config, Arc::new(client), config::run_duration()).await
}
