//! Loads a day's workout logs and ranks them.

use workout_store::{DayWindow, Result, WorkoutStore};

use crate::aggregate::{LeaderboardRow, aggregate};

/// Builds leaderboards from a workout store.
pub struct LeaderboardService<S: WorkoutStore> {
    store: S,
}

impl<S: WorkoutStore> LeaderboardService<S> {
    /// Creates a new leaderboard service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Ranks every user who logged reps inside `window`.
    #[tracing::instrument(skip(self), fields(start = %window.start, end = %window.end))]
    pub async fn for_window(&self, window: DayWindow) -> Result<Vec<LeaderboardRow>> {
        let entries = self.store.logs_in_window(window).await?;
        let entry_count = entries.len();

        let rows = aggregate(entries);

        metrics::histogram!("leaderboard_rows").record(rows.len() as f64);
        tracing::debug!(entries = entry_count, rows = rows.len(), "leaderboard aggregated");

        Ok(rows)
    }

    /// Ranks the current UTC day.
    pub async fn today(&self) -> Result<Vec<LeaderboardRow>> {
        self.for_window(DayWindow::today()).await
    }
}
