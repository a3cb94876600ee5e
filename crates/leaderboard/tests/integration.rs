//! Integration tests for ranking workouts written to an in-memory store.

use chrono::{Duration, TimeZone, Utc};
use leaderboard::{DEFAULT_DAILY_GOAL, LeaderboardService};
use workout_store::{
    DayWindow, GoalUpdate, InMemoryWorkoutStore, NewWorkout, Username, WorkoutStore,
    WorkoutStoreExt,
};

fn name(s: &str) -> Username {
    Username::parse(s).unwrap()
}

fn setup() -> (InMemoryWorkoutStore, LeaderboardService<InMemoryWorkoutStore>) {
    let store = InMemoryWorkoutStore::new();
    let service = LeaderboardService::new(store.clone());
    (store, service)
}

#[tokio::test]
async fn empty_day_gives_empty_leaderboard() {
    let (_, service) = setup();
    let rows = service.today().await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn ranks_todays_workouts_with_goals() {
    let (store, service) = setup();

    store
        .upsert_goal(GoalUpdate::new(name("alice"), 50))
        .await
        .unwrap();
    store
        .record_workout(NewWorkout::new(name("alice"), 10))
        .await
        .unwrap();
    store
        .record_workout(NewWorkout::new(name("bob"), 25))
        .await
        .unwrap();
    store
        .record_workout(NewWorkout::new(name("alice"), 5))
        .await
        .unwrap();

    let rows = service.today().await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].username, name("bob"));
    assert_eq!(rows[0].total_reps, 25);
    assert_eq!(rows[0].daily_goal, DEFAULT_DAILY_GOAL);
    assert_eq!(rows[1].username, name("alice"));
    assert_eq!(rows[1].total_reps, 15);
    assert_eq!(rows[1].daily_goal, 50);
}

#[tokio::test]
async fn goal_set_after_logging_is_picked_up() {
    let (store, service) = setup();

    store
        .record_workout(NewWorkout::new(name("carol"), 8))
        .await
        .unwrap();
    store
        .upsert_goal(GoalUpdate::new(name("carol"), 12))
        .await
        .unwrap();

    let rows = service.today().await.unwrap();
    assert_eq!(rows[0].daily_goal, 12);
}

#[tokio::test]
async fn other_days_are_excluded() {
    let (store, service) = setup();
    let day = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let window = DayWindow::containing(day);

    store.ensure_user(&name("dave")).await.unwrap();
    store
        .insert_log_at(NewWorkout::new(name("dave"), 30), day)
        .await
        .unwrap();
    store
        .insert_log_at(NewWorkout::new(name("dave"), 1000), day - Duration::days(1))
        .await
        .unwrap();
    store
        .insert_log_at(NewWorkout::new(name("dave"), 1000), window.end)
        .await
        .unwrap();

    let rows = service.for_window(window).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].total_reps, 30);
}
