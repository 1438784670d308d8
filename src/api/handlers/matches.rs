use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use std::sync::Arc;

use super::AppState;
use crate::api::extractors::MatchSubmission;
use crate::api::models::SubmitResponse;

pub async fn get_matches(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let matches = state.ladder().matches().to_vec();
    Json(matches)
}

pub async fn submit_match(
    State(state): State<Arc<AppState>>,
    submission: MatchSubmission,
) -> impl IntoResponse {
    if submission.winners.len() != submission.losers.len() {
        log::warn!(
            "Match with {} winners and {} losers, only paired players are rated",
            submission.winners.len(),
            submission.losers.len()
        );
    }

    // Whole match under one lock: all pairs plus the log append
    let mut ladder = state.ladder();
    let outcomes = state
        .engine
        .apply_match(&mut ladder, submission.winners, submission.losers, Utc::now());

    for outcome in &outcomes {
        log::debug!(
            "{} beat {}: {:+.1} / {:+.1}",
            outcome.winner,
            outcome.loser,
            outcome.winner_delta,
            outcome.loser_delta
        );
    }

    Json(SubmitResponse { success: true })
}
