use crate::domain::errors::ScoreError;
use crate::interface_adapters::protocol::{ErrorResponse, ScoreEntryResponse, SubmitScoreRequest};
use crate::interface_adapters::state::AppState;
use crate::use_cases::list_scores::ListScoresUseCase;
use crate::use_cases::submit_score::SubmitScoreUseCase;
use axum::extract::rejection::JsonRejection;
use axum::{Json, extract::State, http::StatusCode};
use tracing::{error, info};

type ApiError = (StatusCode, Json<ErrorResponse>);

// Handler for reading the ranked table.
pub async fn list_scores(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScoreEntryResponse>>, ApiError> {
    let use_case = ListScoresUseCase {
        store: state.store.clone(),
    };

    let table = use_case.execute().await.map_err(map_score_error)?;

    Ok(Json(table.into_iter().map(ScoreEntryResponse::from).collect()))
}

// Handler for submitting one score; responds with the updated table.
pub async fn submit_score(
    State(state): State<AppState>,
    payload: Result<Json<SubmitScoreRequest>, JsonRejection>,
) -> Result<Json<Vec<ScoreEntryResponse>>, ApiError> {
    let Json(payload) = payload
        .map_err(|rejection| error_response(StatusCode::BAD_REQUEST, &rejection.body_text()))?;

    let use_case = SubmitScoreUseCase {
        store: state.store.clone(),
        write_lock: state.write_lock.clone(),
    };

    let table = use_case.execute(payload).await.map_err(map_score_error)?;
    info!(entries = table.len(), "score submitted");

    Ok(Json(table.into_iter().map(ScoreEntryResponse::from).collect()))
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

fn map_score_error(err: ScoreError) -> ApiError {
    match err {
        ScoreError::MissingName | ScoreError::InvalidScore => {
            error_response(StatusCode::BAD_REQUEST, &err.to_string())
        }
        ScoreError::StorageFailure => {
            error!("score store failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }
}
