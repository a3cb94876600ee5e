use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::{
    DayWindow, GoalUpdate, LogId, NewWorkout, Result, User, Username, WorkoutLog,
    WorkoutLogEntry, WorkoutStoreError, store::WorkoutStore,
};

#[derive(Default)]
struct State {
    users: HashMap<Username, User>,
    logs: Vec<WorkoutLog>,
}

/// In-memory workout store, used by tests and when no database is configured.
///
/// Mirrors the PostgreSQL implementation, including the requirement that a
/// user exists before logs are written for it.
#[derive(Clone, Default)]
pub struct InMemoryWorkoutStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryWorkoutStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of log rows stored.
    pub async fn log_count(&self) -> usize {
        self.state.read().await.logs.len()
    }

    /// Stores a log row with an explicit creation time.
    pub async fn insert_log_at(
        &self,
        workout: NewWorkout,
        created_at: DateTime<Utc>,
    ) -> Result<WorkoutLog> {
        let mut state = self.state.write().await;
        if !state.users.contains_key(&workout.username) {
            return Err(WorkoutStoreError::UnknownUser(workout.username));
        }

        let log = WorkoutLog {
            id: LogId::new(),
            username: workout.username,
            reps: workout.reps,
            created_at,
        };
        state.logs.push(log.clone());
        Ok(log)
    }

    /// Clears all users and logs.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.users.clear();
        state.logs.clear();
    }
}

#[async_trait]
impl WorkoutStore for InMemoryWorkoutStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn ensure_user(&self, username: &Username) -> Result<User> {
        let mut state = self.state.write().await;
        let user = state
            .users
            .entry(username.clone())
            .or_insert_with(|| User {
                username: username.clone(),
                daily_goal: None,
            });
        Ok(user.clone())
    }

    async fn insert_log(&self, workout: NewWorkout) -> Result<WorkoutLog> {
        self.insert_log_at(workout, Utc::now()).await
    }

    async fn upsert_goal(&self, update: GoalUpdate) -> Result<User> {
        let mut state = self.state.write().await;
        let user = User {
            username: update.username.clone(),
            daily_goal: Some(update.daily_goal),
        };
        state.users.insert(update.username, user.clone());
        Ok(user)
    }

    async fn get_user(&self, username: &Username) -> Result<Option<User>> {
        Ok(self.state.read().await.users.get(username).cloned())
    }

    async fn logs_in_window(&self, window: DayWindow) -> Result<Vec<WorkoutLogEntry>> {
        let state = self.state.read().await;
        let mut entries: Vec<_> = state
            .logs
            .iter()
            .filter(|log| window.contains(log.created_at))
            .map(|log| WorkoutLogEntry {
                username: log.username.clone(),
                reps: log.reps,
                created_at: log.created_at,
                daily_goal: state
                    .users
                    .get(&log.username)
                    .and_then(|user| user.daily_goal),
            })
            .collect();
        entries.sort_by_key(|e| e.created_at);
        Ok(entries)
    }
}
