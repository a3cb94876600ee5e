use async_trait::async_trait;

use crate::{
    DayWindow, GoalUpdate, NewWorkout, Result, User, Username, WorkoutLog, WorkoutLogEntry,
};

/// Core trait for workout storage backends.
///
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<()>;

    /// Creates the user if it does not exist yet.
    ///
    /// An existing user is left untouched, including its daily goal.
    async fn ensure_user(&self, username: &Username) -> Result<User>;

    /// Stores one workout log row stamped with the current time.
    ///
    /// Fails with `UnknownUser` if the user has no record.
    async fn insert_log(&self, workout: NewWorkout) -> Result<WorkoutLog>;

    /// Creates the user with the given goal, or replaces the goal of an
    /// existing user.
    async fn upsert_goal(&self, update: GoalUpdate) -> Result<User>;

    /// Looks up a single user.
    async fn get_user(&self, username: &Username) -> Result<Option<User>>;

    /// Returns every log row created inside `window`, joined with the goal of
    /// its user.
    ///
    /// Entries are returned in `created_at` order (oldest first).
    async fn logs_in_window(&self, window: DayWindow) -> Result<Vec<WorkoutLogEntry>>;
}

/// Extension trait providing convenience methods for workout stores.
#[async_trait]
pub trait WorkoutStoreExt: WorkoutStore {
    /// Records a workout, creating the user on first use.
    #[tracing::instrument(skip(self, workout), fields(username = %workout.username, reps = workout.reps))]
    async fn record_workout(&self, workout: NewWorkout) -> Result<WorkoutLog> {
        self.ensure_user(&workout.username).await?;
        self.insert_log(workout).await
    }
}

// Blanket implementation for all WorkoutStore implementations
impl<T: WorkoutStore + ?Sized> WorkoutStoreExt for T {}
