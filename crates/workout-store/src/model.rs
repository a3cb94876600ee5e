//! Rows handled by the workout store.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{LogId, Username};

/// A user record. The daily goal stays unset until the user picks one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub username: Username,
    pub daily_goal: Option<u32>,
}

/// One stored workout log row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutLog {
    pub id: LogId,
    pub username: Username,
    pub reps: u32,
    pub created_at: DateTime<Utc>,
}

/// A workout log row joined with its user's daily goal.
///
/// `daily_goal` is `None` when the user has no goal set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutLogEntry {
    pub username: Username,
    pub reps: u32,
    pub created_at: DateTime<Utc>,
    pub daily_goal: Option<u32>,
}

/// A workout to be recorded.
#[derive(Debug, Clone)]
pub struct NewWorkout {
    pub username: Username,
    pub reps: u32,
}

impl NewWorkout {
    pub fn new(username: Username, reps: u32) -> Self {
        Self { username, reps }
    }
}

/// A new daily goal for a user.
#[derive(Debug, Clone)]
pub struct GoalUpdate {
    pub username: Username,
    pub daily_goal: u32,
}

impl GoalUpdate {
    pub fn new(username: Username, daily_goal: u32) -> Self {
        Self {
            username,
            daily_goal,
        }
    }
}
