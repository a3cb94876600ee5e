//! Daily leaderboard endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use ::leaderboard::LeaderboardRow;
use serde::Serialize;
use workout_store::WorkoutStore;

use crate::error::ApiError;
use crate::routes::AppState;

#[derive(Serialize)]
pub struct LeaderboardResponse {
    pub data: Vec<LeaderboardRow>,
}

/// GET /leaderboard — today's users ranked by total reps.
#[tracing::instrument(skip(state))]
pub async fn today<S: WorkoutStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<LeaderboardResponse>, ApiError> {
    metrics::counter!("leaderboard_requests").increment(1);

    let data = state
        .leaderboard
        .today()
        .await
        .map_err(ApiError::store("Failed to fetch leaderboard logs"))?;

    Ok(Json(LeaderboardResponse { data }))
}
