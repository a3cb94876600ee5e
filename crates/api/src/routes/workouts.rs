//! Workout logging endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use workout_store::{NewWorkout, Username, WorkoutLog, WorkoutStore};

use crate::error::ApiError;
use crate::routes::{AppState, whole_number};

const USAGE: &str = "Invalid payload. Expected { username: string, reps: number }";

/// A blank username fails deserialization and is reported with the same
/// message as any other malformed body.
#[derive(Deserialize)]
pub struct SaveWorkoutRequest {
    pub username: Option<Username>,
    pub reps: Option<Number>,
}

impl SaveWorkoutRequest {
    fn validate(self) -> Result<NewWorkout, ApiError> {
        let invalid = || ApiError::BadRequest(USAGE.to_string());

        let username = self.username.ok_or_else(invalid)?;
        // Upper bound matches the INTEGER column.
        let reps = self
            .reps
            .as_ref()
            .and_then(whole_number)
            .filter(|r| (0..=i64::from(i32::MAX)).contains(r))
            .and_then(|r| u32::try_from(r).ok())
            .ok_or_else(invalid)?;

        Ok(NewWorkout::new(username, reps))
    }
}

#[derive(Serialize)]
pub struct SaveWorkoutResponse {
    pub message: &'static str,
    pub data: Vec<WorkoutLog>,
}

/// POST /workouts — record a set of reps, creating the user on first use.
#[tracing::instrument(skip(state, payload))]
pub async fn save<S: WorkoutStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<SaveWorkoutRequest>, JsonRejection>,
) -> Result<Json<SaveWorkoutResponse>, ApiError> {
    let Json(req) = payload.map_err(|_| ApiError::BadRequest(USAGE.to_string()))?;
    let workout = req.validate()?;

    state
        .store
        .ensure_user(&workout.username)
        .await
        .map_err(ApiError::store("Failed to find/create user"))?;

    let log = state
        .store
        .insert_log(workout)
        .await
        .map_err(ApiError::store("Failed to save workout log"))?;

    metrics::counter!("workouts_saved").increment(1);
    tracing::info!(username = %log.username, reps = log.reps, "workout saved");

    Ok(Json(SaveWorkoutResponse {
        message: "Workout saved successfully!",
        data: vec![log],
    }))
}
