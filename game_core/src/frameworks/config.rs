use crate::domain::state::Bounds;
use crate::domain::tuning::{GameTuning, TuningError};
use std::{env, time::Duration};

// Runtime/host settings (not gameplay tuning).

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

pub fn score_service_url() -> String {
    env::var("SCORE_SERVICE_URL").unwrap_or_else(|_| "http://127.0.0.1:3001".to_string())
}

pub fn score_request_timeout() -> Duration {
    let millis = parse_env::<u64>("SCORE_REQUEST_TIMEOUT_MS").unwrap_or(1500);
    Duration::from_millis(millis)
}

pub fn game_seed() -> Option<u64> {
    parse_env("GAME_SEED")
}

pub fn viewport() -> Bounds {
    let width = parse_env::<f32>("VIEWPORT_WIDTH").unwrap_or(1280.0);
    let height = parse_env::<f32>("VIEWPORT_HEIGHT").unwrap_or(720.0);
    Bounds::new(width, height)
}

pub fn touch_primary() -> bool {
    matches!(
        env::var("TOUCH_PRIMARY").as_deref().map(str::trim),
        Ok("1" | "true" | "yes")
    )
}

/// How long the headless runner plays; `None` runs until Ctrl-C.
pub fn run_duration() -> Option<Duration> {
    parse_env::<u64>("RUN_SECONDS")
        .filter(|&secs| secs > 0)
        .map(Duration::from_secs)
}

/// Tuning from `GAME_TUNING_PATH`, or the built-in defaults when unset.
pub fn load_tuning() -> Result<GameTuning, TuningError> {
    match env::var("GAME_TUNING_PATH") {
        Ok(path) => {
            let source = std::fs::read_to_string(&path).map_err(TuningError::Read)?;
            GameTuning::from_toml(&source)
        }
        Err(_) => Ok(GameTuning::default()),
    }
}

pub const SNAPSHOT_BROADCAST_CAPACITY: usize = 128;

pub const FRAME_INTERVAL: Duration = Duration::from_micros(1_000_000 / 60);
