use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use crate::{
    DayWindow, GoalUpdate, LogId, NewWorkout, Result, User, Username, WorkoutLog,
    WorkoutLogEntry, WorkoutStoreError, store::WorkoutStore,
};

const LOG_USERNAME_FK: &str = "workout_log_username_fkey";

/// PostgreSQL-backed workout store.
#[derive(Clone)]
pub struct PostgresWorkoutStore {
    pool: PgPool,
}

impl PostgresWorkoutStore {
    /// Creates a new PostgreSQL workout store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    fn to_column(field: &'static str, value: u32) -> Result<i32> {
        i32::try_from(value).map_err(|_| WorkoutStoreError::ValueOutOfRange {
            field,
            value: i64::from(value),
        })
    }

    fn from_column(field: &'static str, value: i32) -> Result<u32> {
        u32::try_from(value).map_err(|_| WorkoutStoreError::ValueOutOfRange {
            field,
            value: i64::from(value),
        })
    }

    fn goal_from_column(value: Option<i32>) -> Result<Option<u32>> {
        value
            .map(|goal| Self::from_column("daily_goal", goal))
            .transpose()
    }

    fn row_to_user(row: PgRow) -> Result<User> {
        Ok(User {
            username: Username::parse(row.try_get::<String, _>("username")?)?,
            daily_goal: Self::goal_from_column(row.try_get("daily_goal")?)?,
        })
    }

    fn row_to_log(row: PgRow) -> Result<WorkoutLog> {
        Ok(WorkoutLog {
            id: LogId::from_uuid(row.try_get::<Uuid, _>("id")?),
            username: Username::parse(row.try_get::<String, _>("username")?)?,
            reps: Self::from_column("reps", row.try_get("reps")?)?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
        })
    }

    fn row_to_entry(row: PgRow) -> Result<WorkoutLogEntry> {
        Ok(WorkoutLogEntry {
            username: Username::parse(row.try_get::<String, _>("username")?)?,
            reps: Self::from_column("reps", row.try_get("reps")?)?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
            daily_goal: Self::goal_from_column(row.try_get("daily_goal")?)?,
        })
    }
}

#[async_trait]
impl WorkoutStore for PostgresWorkoutStore {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn ensure_user(&self, username: &Username) -> Result<User> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO users (username)
            VALUES ($1)
            ON CONFLICT (username) DO NOTHING
            "#,
        )
        .bind(username.as_str())
        .execute(&mut *tx)
        .await?;

        let row = sqlx::query("SELECT username, daily_goal FROM users WHERE username = $1")
            .bind(username.as_str())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Self::row_to_user(row)
    }

    async fn insert_log(&self, workout: NewWorkout) -> Result<WorkoutLog> {
        let reps = Self::to_column("reps", workout.reps)?;

        let row = sqlx::query(
            r#"
            INSERT INTO workout_log (id, username, reps)
            VALUES ($1, $2, $3)
            RETURNING id, username, reps, created_at
            "#,
        )
        .bind(LogId::new().as_uuid())
        .bind(workout.username.as_str())
        .bind(reps)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.constraint() == Some(LOG_USERNAME_FK)
            {
                return WorkoutStoreError::UnknownUser(workout.username.clone());
            }
            WorkoutStoreError::Database(e)
        })?;

        Self::row_to_log(row)
    }

    async fn upsert_goal(&self, update: GoalUpdate) -> Result<User> {
        let goal = Self::to_column("daily_goal", update.daily_goal)?;

        let row = sqlx::query(
            r#"
            INSERT INTO users (username, daily_goal)
            VALUES ($1, $2)
            ON CONFLICT (username) DO UPDATE SET
                daily_goal = EXCLUDED.daily_goal
            RETURNING username, daily_goal
            "#,
        )
        .bind(update.username.as_str())
        .bind(goal)
        .fetch_one(&self.pool)
        .await?;

        Self::row_to_user(row)
    }

    async fn get_user(&self, username: &Username) -> Result<Option<User>> {
        let row: Option<PgRow> =
            sqlx::query("SELECT username, daily_goal FROM users WHERE username = $1")
                .bind(username.as_str())
                .fetch_optional(&self.pool)
                .await?;

        row.map(Self::row_to_user).transpose()
    }

    async fn logs_in_window(&self, window: DayWindow) -> Result<Vec<WorkoutLogEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT w.username, w.reps, w.created_at, u.daily_goal
            FROM workout_log w
            LEFT JOIN users u ON u.username = w.username
            WHERE w.created_at >= $1 AND w.created_at < $2
            ORDER BY w.created_at ASC, w.id ASC
            "#,
        )
        .bind(window.start)
        .bind(window.end)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_entry).collect()
    }
}
