//! Daily goal endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use workout_store::{GoalUpdate, User, Username, WorkoutStore};

use crate::error::ApiError;
use crate::routes::{AppState, whole_number};

const USAGE: &str = "Invalid payload. Expected { username: string, daily_goal: number (>0) }";

#[derive(Deserialize)]
pub struct UpdateGoalRequest {
    pub username: Option<Username>,
    pub daily_goal: Option<Number>,
}

impl UpdateGoalRequest {
    fn validate(self) -> Result<GoalUpdate, ApiError> {
        let invalid = || ApiError::BadRequest(USAGE.to_string());

        let username = self.username.ok_or_else(invalid)?;
        let daily_goal = self
            .daily_goal
            .as_ref()
            .and_then(whole_number)
            .filter(|g| (1..=i64::from(i32::MAX)).contains(g))
            .and_then(|g| u32::try_from(g).ok())
            .ok_or_else(invalid)?;

        Ok(GoalUpdate::new(username, daily_goal))
    }
}

#[derive(Serialize)]
pub struct UpdateGoalResponse {
    pub message: &'static str,
    pub data: Vec<User>,
}

/// POST /goals — set a user's daily rep goal, creating the user if needed.
#[tracing::instrument(skip(state, payload))]
pub async fn update<S: WorkoutStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<UpdateGoalRequest>, JsonRejection>,
) -> Result<Json<UpdateGoalResponse>, ApiError> {
    let Json(req) = payload.map_err(|_| ApiError::BadRequest(USAGE.to_string()))?;
    let update = req.validate()?;

    let user = state
        .store
        .upsert_goal(update)
        .await
        .map_err(ApiError::store("Failed to update goal"))?;

    metrics::counter!("goals_updated").increment(1);
    tracing::info!(username = %user.username, daily_goal = ?user.daily_goal, "goal updated");

    Ok(Json(UpdateGoalResponse {
        message: "Goal updated successfully!",
        data: vec![user],
    }))
}
