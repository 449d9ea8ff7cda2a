use std::{env, path::PathBuf};

// Runtime/server settings.

pub fn http_port() -> u16 {
    env::var("SCORE_SERVER_PORT")
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(3001)
}

pub fn scores_file() -> PathBuf {
    env::var("SCORES_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("scores.json"))
}
