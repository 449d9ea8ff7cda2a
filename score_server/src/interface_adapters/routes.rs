use crate::interface_adapters::handlers::{list_scores, submit_score};
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/scores", get(list_scores).post(submit_score))
        .with_state(state)
}
